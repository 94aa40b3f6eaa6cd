//! Derived order totals: subtotal, shipping, and VAT.

use rust_decimal::Decimal;

use crate::item::LineItem;

/// Orders with a subtotal strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Flat shipping fee charged at or below the free-shipping threshold.
pub const STANDARD_SHIPPING: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// VAT rate applied to the subtotal. Shipping is not taxed.
pub const VAT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Order totals for a set of line items.
///
/// Amounts are exact decimals; rounding to two decimal places happens at
/// presentation time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Decimal,
    /// Zero above [`FREE_SHIPPING_THRESHOLD`], otherwise [`STANDARD_SHIPPING`].
    pub shipping: Decimal,
    /// [`VAT_RATE`] applied to the subtotal.
    pub tax: Decimal,
    /// Subtotal plus shipping plus tax.
    pub total: Decimal,
}

impl Totals {
    /// Compute totals for `items`. Pure; mutates nothing.
    #[must_use]
    pub fn compute(items: &[LineItem]) -> Self {
        let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            STANDARD_SHIPPING
        };
        let tax = subtotal * VAT_RATE;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uplift_core::Price;

    fn line(name: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            name: name.to_owned(),
            price: Price::parse(price).unwrap(),
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn test_free_shipping_above_threshold() {
        let items = [line("Essential Desk", "300", 2)];
        let totals = Totals::compute(&items);
        assert_eq!(totals.subtotal, Decimal::from(600));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::from(120));
        assert_eq!(totals.total, Decimal::from(720));
    }

    #[test]
    fn test_flat_shipping_below_threshold() {
        let items = [line("Monitor Arm", "50", 1)];
        let totals = Totals::compute(&items);
        assert_eq!(totals.subtotal, Decimal::from(50));
        assert_eq!(totals.shipping, Decimal::from(15));
        assert_eq!(totals.tax, Decimal::from(10));
        assert_eq!(totals.total, Decimal::from(75));
    }

    #[test]
    fn test_shipping_charged_at_exact_threshold() {
        // free shipping only strictly above 200
        let items = [line("Bamboo Desktop", "200", 1)];
        let totals = Totals::compute(&items);
        assert_eq!(totals.shipping, STANDARD_SHIPPING);
    }

    #[test]
    fn test_shipping_free_just_above_threshold() {
        let items = [line("Bamboo Desktop", "200.01", 1)];
        let totals = Totals::compute(&items);
        assert_eq!(totals.shipping, Decimal::ZERO);
    }

    #[test]
    fn test_tax_excludes_shipping() {
        let items = [line("Monitor Arm", "100", 1)];
        let totals = Totals::compute(&items);
        // 20% of 100, not of 115
        assert_eq!(totals.tax, Decimal::from(20));
    }

    #[test]
    fn test_fractional_prices_stay_exact() {
        let items = [line("Anti-Fatigue Mat", "39.99", 3)];
        let totals = Totals::compute(&items);
        assert_eq!(totals.subtotal, Decimal::new(11997, 2));
        assert_eq!(totals.tax, Decimal::new(239_940, 4));
    }
}
