use crate::error::{AppError, Result};
use crate::menu::{self, ALL_CATEGORIES};
use crate::models::{Category, MenuItem};

#[tauri::command]
pub fn get_categories() -> Vec<Category> {
    menu::categories().to_vec()
}

#[tauri::command]
pub fn get_menu_items(category: Option<String>, search: Option<String>) -> Vec<MenuItem> {
    let category = category.as_deref().unwrap_or(ALL_CATEGORIES);
    let search = search.as_deref().unwrap_or("");

    menu::filter_menu_items(menu::menu_items(), category, search)
        .into_iter()
        .cloned()
        .collect()
}

#[tauri::command]
pub fn get_popular_items() -> Vec<MenuItem> {
    menu::get_popular_items().into_iter().cloned().collect()
}

#[tauri::command]
pub fn get_menu_item(id: String) -> Result<MenuItem> {
    menu::find_menu_item(&id)
        .cloned()
        .ok_or(AppError::MenuItemNotFound(id))
}
