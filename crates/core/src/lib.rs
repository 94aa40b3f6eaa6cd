//! Uplift Core - Shared types library.
//!
//! This crate provides common types used across all Uplift components:
//! - `basket` - Basket store, totals, and persistence
//! - `cli` - The `uplift` command-line storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
