//! Totals scenarios and the full checkout flow over file-backed storage.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;
use serde_json::Value;

use uplift_basket::BasketError;
use uplift_core::Price;
use uplift_integration_tests::TestShop;

#[test]
fn essential_desk_scenario_across_page_loads() {
    let shop = TestShop::new();

    // two separate "page events", each a fresh load of the stored basket
    {
        let mut basket = shop.open_basket();
        basket.add_item("Essential Desk", Price::parse("300").unwrap());
    }
    let mut basket = shop.open_basket();
    basket.add_item("Essential Desk", Price::parse("300").unwrap());

    assert_eq!(basket.len(), 1);
    assert_eq!(basket.items()[0].quantity, 2);
    assert_eq!(basket.unit_count(), 2);

    let totals = basket.totals();
    assert_eq!(totals.subtotal, Decimal::from(600));
    assert_eq!(totals.shipping, Decimal::ZERO);
    assert_eq!(totals.tax, Decimal::from(120));
    assert_eq!(totals.total, Decimal::from(720));
}

#[test]
fn small_order_pays_flat_shipping() {
    let shop = TestShop::new();

    let mut basket = shop.open_basket();
    basket.add_item("Monitor Arm", Price::parse("50").unwrap());

    let totals = basket.totals();
    assert_eq!(totals.subtotal, Decimal::from(50));
    assert_eq!(totals.shipping, Decimal::from(15));
    assert_eq!(totals.tax, Decimal::from(10));
    assert_eq!(totals.total, Decimal::from(75));
}

#[test]
fn checkout_clears_basket_and_round_trips() {
    let shop = TestShop::new();

    let mut basket = shop.open_basket();
    basket.add_item("Essential Desk", Price::parse("300").unwrap());
    basket.add_item("Essential Desk", Price::parse("300").unwrap());

    let receipt = basket.checkout().unwrap();
    assert_eq!(receipt.totals.total, Decimal::from(720));
    assert!(basket.is_empty());
    assert_eq!(basket.unit_count(), 0);

    // the cleared state survives a reload
    let reopened = shop.open_basket();
    assert!(reopened.is_empty());
    assert_eq!(reopened.unit_count(), 0);

    let namespace: Value = serde_json::from_str(&shop.read_raw()).unwrap();
    assert_eq!(namespace["basketItems"], "[]");
    assert_eq!(namespace["basketCount"], "0");
}

#[test]
fn checkout_on_empty_basket_changes_nothing() {
    let shop = TestShop::new();

    let mut basket = shop.open_basket();
    assert_eq!(basket.checkout(), Err(BasketError::EmptyBasket));
    assert_eq!(basket.unit_count(), 0);

    // no storage file was ever written
    assert!(!shop.basket_file().exists());
}

#[test]
fn receipt_totals_match_basket_totals_at_checkout() {
    let shop = TestShop::new();

    let mut basket = shop.open_basket();
    basket.add_item("Anti-Fatigue Mat", Price::parse("39.99").unwrap());
    basket.update_quantity(0, 1).unwrap();

    let expected = basket.totals();
    let receipt = basket.checkout().unwrap();
    assert_eq!(receipt.totals, expected);
}
