use crate::error::{AppError, Result};
use crate::models::{Category, MenuItem, NewCartItem};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::OnceLock;

/// Category id meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();
static MENU_ITEMS: OnceLock<Vec<MenuItem>> = OnceLock::new();

pub fn categories() -> &'static [Category] {
    CATEGORIES.get_or_init(|| {
        [
            (ALL_CATEGORIES, "All Items", "🍽️"),
            ("starters", "Starters", "🥗"),
            ("main-courses", "Main Courses", "🍖"),
            ("desserts", "Desserts", "🍰"),
            ("drinks", "Drinks", "🥤"),
        ]
        .into_iter()
        .map(|(id, name, icon)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect()
    })
}

pub fn menu_items() -> &'static [MenuItem] {
    MENU_ITEMS.get_or_init(|| {
        vec![
            item(
                "1",
                "Greek Salad",
                "Fresh lettuce, tomatoes, cucumbers, olives, and feta cheese with our signature dressing.",
                dec!(12.99),
                "/salad.jpg",
                "starters",
                true,
            ),
            item(
                "2",
                "Bruschetta",
                "Toasted bread topped with tomatoes, garlic, and fresh basil.",
                dec!(8.99),
                "/bruschetta1.jpg",
                "starters",
                false,
            ),
            item(
                "3",
                "Grilled Salmon",
                "Fresh Atlantic salmon grilled to perfection with herbs and lemon.",
                dec!(24.99),
                "/gourmet.jpg",
                "main-courses",
                true,
            ),
            item(
                "4",
                "Lemon Chicken",
                "Tender chicken breast with lemon sauce and Mediterranean herbs.",
                dec!(19.99),
                "/creme.jpg",
                "main-courses",
                false,
            ),
            item(
                "5",
                "Tiramisu",
                "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone cream.",
                dec!(9.99),
                "/gourmet.jpg",
                "desserts",
                false,
            ),
            item(
                "6",
                "Fresh Lemonade",
                "Homemade lemonade with fresh lemons and a hint of mint.",
                dec!(4.99),
                "/salad.jpg",
                "drinks",
                false,
            ),
            item(
                "7",
                "Lemon Cheesecake",
                "Creamy cheesecake with lemon zest and berries.",
                dec!(9.99),
                "/creme.jpg",
                "desserts",
                false,
            ),
        ]
    })
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: Decimal,
    image: &str,
    category: &str,
    is_popular: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        price_formatted: Some(format_price(price)),
        image: image.to_string(),
        category: category.to_string(),
        is_popular,
    }
}

/// Filters by category (unless `"all"`) and then by a case-insensitive
/// substring of name or description. A blank term skips the search filter;
/// otherwise the term is matched as typed, surrounding spaces included.
/// Order is preserved.
pub fn filter_menu_items<'a>(
    items: &'a [MenuItem],
    category: &str,
    search_term: &str,
) -> Vec<&'a MenuItem> {
    let filter_by_search = !search_term.trim().is_empty();
    let needle = search_term.to_lowercase();

    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .filter(|item| {
            !filter_by_search
                || item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn get_popular_items() -> Vec<&'static MenuItem> {
    popular_items(menu_items())
}

pub fn popular_items(items: &[MenuItem]) -> Vec<&MenuItem> {
    items.iter().filter(|item| item.is_popular).collect()
}

pub fn find_menu_item(id: &str) -> Option<&'static MenuItem> {
    menu_items().iter().find(|item| item.id == id)
}

pub fn format_price(price: Decimal) -> String {
    format!("{:.2}€", price.round_dp(2))
}

impl MenuItem {
    pub fn display_price(&self) -> String {
        self.price_formatted
            .clone()
            .unwrap_or_else(|| format_price(self.price))
    }
}

impl TryFrom<&MenuItem> for NewCartItem {
    type Error = AppError;

    fn try_from(item: &MenuItem) -> Result<Self> {
        let id = item
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidMenuItemId(item.id.clone()))?;

        Ok(NewCartItem {
            id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            description: item.description.clone(),
        })
    }
}
