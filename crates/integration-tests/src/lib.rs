//! Integration tests for Uplift.
//!
//! These tests drive a [`uplift_basket::Basket`] over a real file-backed
//! store in a temporary directory, covering what the in-memory unit tests
//! stub out: reloads across "page loads", the on-disk storage layout, and
//! degradation on corrupt files.
//!
//! # Test Categories
//!
//! - `basket_persistence` - Round-trips, storage layout, corrupt data
//! - `checkout_flow` - Totals scenarios and order placement

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use tempfile::TempDir;

use uplift_basket::{Basket, JsonFileStore};

/// A scratch shop: a basket file in its own temporary directory.
pub struct TestShop {
    dir: TempDir,
}

impl TestShop {
    /// Create a fresh scratch directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Path of the basket storage file.
    #[must_use]
    pub fn basket_file(&self) -> PathBuf {
        self.dir.path().join("basket.json")
    }

    /// Open the shop's basket, as a fresh process would.
    #[must_use]
    pub fn open_basket(&self) -> Basket<JsonFileStore> {
        Basket::open(JsonFileStore::new(self.basket_file()))
    }

    /// Overwrite the raw storage file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, contents: &str) {
        std::fs::write(self.basket_file(), contents).expect("write storage file");
    }

    /// Read the raw storage file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read_raw(&self) -> String {
        std::fs::read_to_string(self.basket_file()).expect("read storage file")
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}
