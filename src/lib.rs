pub mod cart;
mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod reservation;
pub mod store;


use config::AppConfig;
use reservation::ReservationDesk;
use store::{LoadingState, Session, StoreExt};
use tauri::{Emitter, Manager};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|value| matches!(value.trim(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed.
    let result = if env_bool("LITTLE_LEMON_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialised: {e}");
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    let result = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(Session::new())
        .manage(ReservationDesk::new())
        .manage(LoadingState::default())
        .setup(|app| {
            let config = AppConfig::load(app.handle());
            let splash_delay = config.splash_delay();
            app.manage(config);

            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                tokio::time::sleep(splash_delay).await;
                handle.loading().finish();
                if let Err(e) = handle.emit("app-loaded", ()) {
                    error!(error = %e, "failed to emit app-loaded");
                }
            });

            info!("Little Lemon started");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Menu
            commands::menu::get_categories,
            commands::menu::get_menu_items,
            commands::menu::get_popular_items,
            commands::menu::get_menu_item,
            // Cart
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::add_menu_item_to_cart,
            commands::cart::remove_from_cart,
            commands::cart::update_quantity,
            commands::cart::increase_quantity,
            commands::cart::decrease_quantity,
            commands::cart::clear_cart,
            commands::cart::get_order_type,
            commands::cart::set_order_type,
            // Reservations
            commands::reservations::get_reservation_options,
            commands::reservations::validate_reservation,
            commands::reservations::submit_reservation,
            commands::reservations::is_submitting,
            // App
            commands::app::get_restaurant_info,
            commands::app::is_loading,
            commands::app::get_routes,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        error!(error = %e, "error while running tauri application");
        std::process::exit(1);
    }
}
