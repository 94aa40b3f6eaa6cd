//! Core types for Uplift.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod price;

pub use email::{Email, EmailError};
pub use price::{Price, PriceError, format_gbp};
