//! Display structs and terminal rendering.
//!
//! Converts basket state into formatted strings. This is the only layer
//! that rounds amounts to two decimal places.

use uplift_basket::{Basket, BasketEvent, KeyValueStore, LineItem, catalog};
use uplift_core::format_gbp;

/// One rendered basket line.
pub struct LineView {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl LineView {
    fn new(index: usize, item: &LineItem) -> Self {
        Self {
            index,
            name: item.name.clone(),
            description: catalog::description(&item.name).to_owned(),
            quantity: item.quantity,
            unit_price: item.price.to_string(),
            line_total: format_gbp(item.line_total()),
        }
    }
}

/// Rendered basket contents and totals.
pub struct BasketView {
    pub lines: Vec<LineView>,
    pub unit_count: u32,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl BasketView {
    /// Build a view of the basket's current state.
    #[must_use]
    pub fn from_basket<S: KeyValueStore>(basket: &Basket<S>) -> Self {
        let totals = basket.totals();
        Self {
            lines: basket
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| LineView::new(index, item))
                .collect(),
            unit_count: basket.unit_count(),
            subtotal: format_gbp(totals.subtotal),
            shipping: format_gbp(totals.shipping),
            tax: format_gbp(totals.tax),
            total: format_gbp(totals.total),
        }
    }
}

/// Print a transient user notification.
pub fn notify(message: &str) {
    println!("• {message}");
}

/// The notification text for a basket event.
pub fn notification(event: &BasketEvent) -> String {
    match event {
        BasketEvent::ItemAdded { name, .. } => format!("{name} added to basket!"),
        BasketEvent::ItemRemoved { name } => format!("{name} removed from basket"),
        BasketEvent::QuantityUpdated { name, quantity } => {
            format!("{name} quantity updated to {quantity}")
        }
        BasketEvent::CheckedOut { total } => format!(
            "Order placed! Total: {}\nThank you for your purchase!",
            format_gbp(*total)
        ),
    }
}

/// Render the basket table and totals block.
pub fn render(view: &BasketView) {
    if view.lines.is_empty() {
        println!("Your basket is empty.");
        return;
    }

    println!(
        "{:<3} {:<24} {:<42} {:>4} {:>10} {:>10}",
        "#", "Product", "Description", "Qty", "Unit", "Line"
    );
    for line in &view.lines {
        println!(
            "{:<3} {:<24} {:<42} {:>4} {:>10} {:>10}",
            line.index, line.name, line.description, line.quantity, line.unit_price,
            line.line_total
        );
    }

    println!();
    println!("{:<10} {:>10}", "Subtotal", view.subtotal);
    println!("{:<10} {:>10}", "Shipping", view.shipping);
    println!("{:<10} {:>10}", "VAT (20%)", view.tax);
    println!("{:<10} {:>10}", "Total", view.total);
    println!();
    println!("{} item(s) in basket", view.unit_count);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use uplift_basket::{Basket, MemoryStore};
    use uplift_core::Price;

    use super::*;

    #[test]
    fn test_view_formats_amounts() {
        let mut basket = Basket::open(MemoryStore::new());
        basket.add_item("Monitor Arm", Price::parse("50").unwrap());

        let view = BasketView::from_basket(&basket);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].unit_price, "£50.00");
        assert_eq!(view.lines[0].line_total, "£50.00");
        assert_eq!(view.lines[0].description, "Adjustable for optimal viewing height");
        assert_eq!(view.subtotal, "£50.00");
        assert_eq!(view.shipping, "£15.00");
        assert_eq!(view.tax, "£10.00");
        assert_eq!(view.total, "£75.00");
        assert_eq!(view.unit_count, 1);
    }

    #[test]
    fn test_notifications_match_storefront_texts() {
        let added = BasketEvent::ItemAdded {
            name: "Essential Desk".to_owned(),
            quantity: 2,
        };
        assert_eq!(notification(&added), "Essential Desk added to basket!");

        let done = BasketEvent::CheckedOut {
            total: rust_decimal::Decimal::from(720),
        };
        assert!(notification(&done).starts_with("Order placed! Total: £720.00"));
    }
}
