use crate::cart::CartAction;
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{CartState, OrderType};
use crate::reservation::ReservationDesk;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tauri::{AppHandle, Manager};
use tracing::debug;

/// In-memory ordering session. Lives as long as the app and is never saved.
#[derive(Debug, Default)]
pub struct Session {
    pub cart: Mutex<CartState>,
    pub order_type: Mutex<OrderType>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> Result<CartState> {
        Ok(self.cart.lock()?.clone())
    }

    /// Runs one reducer step and returns the cart as it is afterwards.
    pub fn dispatch(&self, action: CartAction) -> Result<CartState> {
        let mut cart = self.cart.lock()?;
        debug!(?action, "cart action");
        cart.apply(action);
        debug!(lines = cart.items.len(), total = %cart.total, "cart updated");
        Ok(cart.clone())
    }

    pub fn order_type(&self) -> Result<OrderType> {
        Ok(*self.order_type.lock()?)
    }

    pub fn set_order_type(&self, order_type: OrderType) -> Result<OrderType> {
        let mut current = self.order_type.lock()?;
        *current = order_type;
        Ok(order_type)
    }
}

/// Startup flag; true until the splash delay has passed.
#[derive(Debug)]
pub struct LoadingState(AtomicBool);

impl Default for LoadingState {
    fn default() -> Self {
        Self(AtomicBool::new(true))
    }
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn finish(&self) {
        self.0.store(false, Ordering::Release);
    }
}

pub trait StoreExt {
    fn session(&self) -> &Session;
    fn desk(&self) -> &ReservationDesk;
    fn loading(&self) -> &LoadingState;
    fn config(&self) -> &AppConfig;
}

impl StoreExt for AppHandle {
    fn session(&self) -> &Session {
        self.state::<Session>().inner()
    }

    fn desk(&self) -> &ReservationDesk {
        self.state::<ReservationDesk>().inner()
    }

    fn loading(&self) -> &LoadingState {
        self.state::<LoadingState>().inner()
    }

    fn config(&self) -> &AppConfig {
        self.state::<AppConfig>().inner()
    }
}
