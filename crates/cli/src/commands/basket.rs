//! Basket subcommands.
//!
//! Each invocation opens the stored basket, performs one operation, and
//! re-renders. The store pushes nothing; rendering always pulls fresh
//! state after the call. Notifications come from a subscribed observer.

use thiserror::Error;

use uplift_basket::{Basket, BasketError, JsonFileStore};
use uplift_core::{Price, PriceError};

use crate::config::CliConfig;
use crate::views::{self, BasketView};

/// Errors from basket subcommands.
#[derive(Debug, Error)]
pub enum BasketCommandError {
    #[error(transparent)]
    Basket(#[from] BasketError),

    #[error(transparent)]
    Price(#[from] PriceError),
}

fn open(config: &CliConfig) -> Basket<JsonFileStore> {
    let mut basket = Basket::open(JsonFileStore::new(&config.basket_file));
    basket.subscribe(|event| views::notify(&views::notification(event)));
    basket
}

/// Add one unit of `name` at `price` (decimal pounds).
#[tracing::instrument(skip(config))]
pub fn add(config: &CliConfig, name: &str, price: &str) -> Result<(), BasketCommandError> {
    let price = Price::parse(price)?;
    let mut basket = open(config);
    basket.add_item(name, price);
    views::render(&BasketView::from_basket(&basket));
    Ok(())
}

/// Remove the line at `index`.
#[tracing::instrument(skip(config))]
pub fn remove(config: &CliConfig, index: usize) -> Result<(), BasketCommandError> {
    let mut basket = open(config);
    basket.remove_item(index)?;
    views::render(&BasketView::from_basket(&basket));
    Ok(())
}

/// Change the quantity of the line at `index` by `delta`.
#[tracing::instrument(skip(config))]
pub fn update(config: &CliConfig, index: usize, delta: i32) -> Result<(), BasketCommandError> {
    let mut basket = open(config);
    basket.update_quantity(index, delta)?;
    views::render(&BasketView::from_basket(&basket));
    Ok(())
}

/// Show basket contents and totals.
pub fn show(config: &CliConfig) {
    let basket = open(config);
    views::render(&BasketView::from_basket(&basket));
}

/// Place the order and clear the basket.
///
/// An empty basket is reported as a notification, not a failure, to
/// match the storefront behavior.
#[tracing::instrument(skip(config))]
pub fn checkout(config: &CliConfig) -> Result<(), BasketCommandError> {
    let mut basket = open(config);
    match basket.checkout() {
        Ok(receipt) => {
            tracing::info!(placed_at = %receipt.placed_at, "checkout complete");
            views::render(&BasketView::from_basket(&basket));
            Ok(())
        }
        Err(BasketError::EmptyBasket) => {
            views::notify("Your basket is empty!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
