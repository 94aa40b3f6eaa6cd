//! Basket change events for observers.

use rust_decimal::Decimal;

/// Emitted after every successful basket mutation.
///
/// The store never renders; presentation code subscribes via
/// [`crate::Basket::subscribe`] and turns these into user-visible
/// notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketEvent {
    /// A unit of `name` was added; `quantity` is the line's new quantity.
    ItemAdded {
        /// Product name.
        name: String,
        /// New quantity of the line.
        quantity: u32,
    },
    /// The line for `name` was removed.
    ItemRemoved {
        /// Product name.
        name: String,
    },
    /// The line for `name` now has `quantity` units.
    QuantityUpdated {
        /// Product name.
        name: String,
        /// New quantity of the line.
        quantity: u32,
    },
    /// The order was placed for `total` and the basket cleared.
    CheckedOut {
        /// Final order total.
        total: Decimal,
    },
}
