pub mod app;
pub mod cart;
pub mod menu;
pub mod reservations;
