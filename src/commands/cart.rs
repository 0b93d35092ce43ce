use crate::cart::CartAction;
use crate::error::{AppError, Result};
use crate::menu;
use crate::models::{CartState, NewCartItem, OrderType};
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_cart(app: AppHandle) -> Result<CartState> {
    app.session().cart()
}

#[tauri::command]
pub fn add_to_cart(app: AppHandle, item: NewCartItem) -> Result<CartState> {
    app.session().dispatch(CartAction::Add(item))
}

#[tauri::command]
pub fn add_menu_item_to_cart(app: AppHandle, menu_item_id: String) -> Result<CartState> {
    let menu_item = menu::find_menu_item(&menu_item_id)
        .ok_or_else(|| AppError::MenuItemNotFound(menu_item_id.clone()))?;
    let item = NewCartItem::try_from(menu_item)?;

    app.session().dispatch(CartAction::Add(item))
}

#[tauri::command]
pub fn remove_from_cart(app: AppHandle, id: i64) -> Result<CartState> {
    app.session().dispatch(CartAction::Remove(id))
}

#[tauri::command]
pub fn update_quantity(app: AppHandle, id: i64, quantity: i64) -> Result<CartState> {
    app.session().dispatch(CartAction::UpdateQuantity { id, quantity })
}

#[tauri::command]
pub fn increase_quantity(app: AppHandle, id: i64) -> Result<CartState> {
    app.session().dispatch(CartAction::Increase(id))
}

#[tauri::command]
pub fn decrease_quantity(app: AppHandle, id: i64) -> Result<CartState> {
    app.session().dispatch(CartAction::Decrease(id))
}

#[tauri::command]
pub fn clear_cart(app: AppHandle) -> Result<CartState> {
    app.session().dispatch(CartAction::Clear)
}

#[tauri::command]
pub fn get_order_type(app: AppHandle) -> Result<OrderType> {
    app.session().order_type()
}

#[tauri::command]
pub fn set_order_type(app: AppHandle, order_type: OrderType) -> Result<OrderType> {
    app.session().set_order_type(order_type)
}
