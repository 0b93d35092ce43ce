use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
    pub description: String,
}

/// Add-to-cart payload: a cart line without its quantity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
}

impl NewCartItem {
    pub fn with_quantity(self, quantity: u32) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity,
            image: self.image,
            description: self.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Delivery,
    Pickup,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub price_formatted: Option<String>,
    pub image: String,
    pub category: String,
    pub is_popular: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}

/// Raw reservation form values as typed by the guest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub occasion: String,
    pub special_requests: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guests: "2".to_string(),
            occasion: String::new(),
            special_requests: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Anniversary,
    Birthday,
    Business,
    Date,
    Family,
    Friends,
    Celebration,
    Other,
}

/// A reservation whose form passed validation.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u8,
    pub occasion: Option<Occasion>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReservationConfirmation {
    pub reservation: Reservation,
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

#[derive(Debug, Serialize, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReservationOptions {
    pub time_slots: Vec<String>,
    pub occasions: Vec<SelectOption>,
    pub guests: Vec<SelectOption>,
    pub defaults: ReservationForm,
    pub min_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RestaurantInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_hours: Vec<OpeningHours>,
    pub notes: Vec<String>,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        let hours = |days: &str, hours: &str| OpeningHours {
            days: days.to_string(),
            hours: hours.to_string(),
        };

        Self {
            name: "Little Lemon".to_string(),
            address: "2 Rue Jeanne d'Arc, 45000 Orléans France".to_string(),
            phone: "+33 9 12 34 56 78".to_string(),
            email: "info@littlelemon.com".to_string(),
            opening_hours: vec![
                hours("Monday - Wednesday", "10:30 - 00:00"),
                hours("Friday", "12:00 - 01:00"),
                hours("Saturday - Sunday", "10:30 - 00:00"),
            ],
            notes: vec![
                "Reservations are confirmed by email".to_string(),
                "Please arrive 10 minutes before your reserved time".to_string(),
                "For groups of more than 8 people, contact us directly".to_string(),
                "Cancellation possible up to 2 hours before the reservation".to_string(),
            ],
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Route {
    pub path: String,
    pub title: String,
}
