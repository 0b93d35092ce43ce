use crate::models::{RestaurantInfo, Route};
use crate::store::StoreExt;
use tauri::AppHandle;

pub const ROUTES: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/menu", "Menu"),
    ("/order", "Order Online"),
    ("/reservations", "Reservations"),
];

#[tauri::command]
pub fn get_restaurant_info(app: AppHandle) -> RestaurantInfo {
    StoreExt::config(&app).restaurant.clone()
}

#[tauri::command]
pub fn is_loading(app: AppHandle) -> bool {
    app.loading().is_loading()
}

#[tauri::command]
pub fn get_routes() -> Vec<Route> {
    ROUTES
        .iter()
        .map(|(path, title)| Route {
            path: path.to_string(),
            title: title.to_string(),
        })
        .collect()
}
