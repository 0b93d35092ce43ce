use crate::models::{CartItem, CartState, NewCartItem};
use rust_decimal::Decimal;

/// Everything that can happen to a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add(NewCartItem),
    Remove(i64),
    UpdateQuantity { id: i64, quantity: i64 },
    Increase(i64),
    Decrease(i64),
    Clear,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and recomputes the total from the resulting lines.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(item) => {
                match self.items.iter_mut().find(|line| line.id == item.id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(1),
                    None => self.items.push(item.with_quantity(1)),
                }
            }
            CartAction::Remove(id) => {
                self.items.retain(|line| line.id != id);
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if !self.contains(id) {
                    return;
                }
                if quantity <= 0 {
                    self.items.retain(|line| line.id != id);
                } else if let Some(line) = self.line_mut(id) {
                    line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                }
            }
            CartAction::Increase(id) => {
                if let Some(line) = self.line_mut(id) {
                    line.quantity = line.quantity.saturating_add(1);
                }
            }
            CartAction::Decrease(id) => {
                // Stops at one; dropping a line is an explicit remove.
                if let Some(line) = self.line_mut(id) {
                    if line.quantity > 1 {
                        line.quantity -= 1;
                    }
                }
            }
            CartAction::Clear => {
                self.items.clear();
            }
        }

        self.total = Self::sum(&self.items);
    }

    pub fn add_to_cart(&mut self, item: NewCartItem) {
        self.apply(CartAction::Add(item));
    }

    pub fn remove_from_cart(&mut self, id: i64) {
        self.apply(CartAction::Remove(id));
    }

    pub fn update_quantity(&mut self, id: i64, quantity: i64) {
        self.apply(CartAction::UpdateQuantity { id, quantity });
    }

    pub fn increase_quantity(&mut self, id: i64) {
        self.apply(CartAction::Increase(id));
    }

    pub fn decrease_quantity(&mut self, id: i64) {
        self.apply(CartAction::Decrease(id));
    }

    pub fn clear_cart(&mut self) {
        self.apply(CartAction::Clear);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn formatted_total(&self) -> String {
        crate::menu::format_price(self.total)
    }

    fn line_mut(&mut self, id: i64) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|line| line.id == id)
    }

    // Saturates instead of overflowing; prices arrive from the webview.
    fn sum(items: &[CartItem]) -> Decimal {
        items.iter().fold(Decimal::ZERO, |total, line| {
            total.saturating_add(line.price.saturating_mul(Decimal::from(line.quantity)))
        })
    }
}
