//! Basket error taxonomy.

use thiserror::Error;

/// Errors produced by basket operations.
///
/// Nothing here is fatal: an invalid index is a refused no-op the caller
/// may ignore, and an empty-basket checkout leaves state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BasketError {
    /// Remove or update called with an out-of-range index.
    #[error("no basket line at index {index} (basket has {len})")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of lines in the basket at the time of the call.
        len: usize,
    },

    /// Checkout attempted with no items.
    #[error("basket is empty")]
    EmptyBasket,
}
