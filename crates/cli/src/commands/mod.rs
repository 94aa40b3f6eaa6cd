//! CLI command implementations.

pub mod basket;
pub mod contact;
