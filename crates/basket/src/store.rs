//! The basket store object.
//!
//! [`Basket`] owns the line items and an injected storage backend. Every
//! mutation writes through to storage synchronously, then notifies
//! subscribers. Rendering is pull-based: callers re-read [`Basket::items`]
//! and [`Basket::totals`] after each call.

use chrono::{DateTime, Utc};

use uplift_core::Price;

use crate::catalog;
use crate::error::BasketError;
use crate::event::BasketEvent;
use crate::item::LineItem;
use crate::persist::{self, KeyValueStore};
use crate::totals::Totals;

type Subscriber = Box<dyn Fn(&BasketEvent)>;

/// Confirmation returned by a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Final order totals at the moment the order was placed.
    pub totals: Totals,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// The shopping basket: ordered line items over a durable store.
pub struct Basket<S> {
    items: Vec<LineItem>,
    storage: S,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> Basket<S> {
    /// Open the basket persisted in `storage`.
    ///
    /// Missing or malformed data yields an empty basket, never an error.
    /// A stored unit count that disagrees with the line items is logged
    /// and discarded; the derived count wins.
    pub fn open(storage: S) -> Self {
        let items = persist::load_items(&storage);
        let basket = Self {
            items,
            storage,
            subscribers: Vec::new(),
        };
        if let Some(stored) = persist::load_count(&basket.storage) {
            let derived = basket.unit_count();
            if stored != derived {
                tracing::warn!(
                    stored,
                    derived,
                    "stored unit count disagrees with line items; using derived value"
                );
            }
        }
        basket
    }

    /// Register an observer called after every successful mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&BasketEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the basket has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines, derived on demand.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Current order totals. Pure; mutates nothing.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.items)
    }

    /// Add one unit of a product.
    ///
    /// An existing line for `name` gains a unit; otherwise a new line is
    /// appended with the catalog image tag for `name`.
    pub fn add_item(&mut self, name: &str, price: Price) {
        let quantity = match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.quantity += 1;
                item.quantity
            }
            None => {
                self.items.push(LineItem {
                    name: name.to_owned(),
                    price,
                    quantity: 1,
                    image: catalog::image_tag(name).to_owned(),
                });
                1
            }
        };
        self.persist();
        self.notify(&BasketEvent::ItemAdded {
            name: name.to_owned(),
            quantity,
        });
    }

    /// Remove the line at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::InvalidIndex`] if `index` is out of range;
    /// the basket is left untouched.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, BasketError> {
        if index >= self.items.len() {
            return Err(BasketError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        self.persist();
        self.notify(&BasketEvent::ItemRemoved {
            name: item.name.clone(),
        });
        Ok(item)
    }

    /// Change the quantity of the line at `index` by `delta`.
    ///
    /// A change that would drop the quantity below one removes the line
    /// entirely rather than clamping it to zero.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::InvalidIndex`] if `index` is out of range;
    /// the basket is left untouched.
    pub fn update_quantity(&mut self, index: usize, delta: i32) -> Result<(), BasketError> {
        let len = self.items.len();
        let Some(item) = self.items.get_mut(index) else {
            return Err(BasketError::InvalidIndex { index, len });
        };
        let new_quantity = i64::from(item.quantity) + i64::from(delta);
        if new_quantity < 1 {
            self.remove_item(index).map(drop)
        } else {
            item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            let name = item.name.clone();
            let quantity = item.quantity;
            self.persist();
            self.notify(&BasketEvent::QuantityUpdated { name, quantity });
            Ok(())
        }
    }

    /// Place the order: compute final totals, clear the basket, persist
    /// the cleared state, and return a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::EmptyBasket`] if there is nothing to buy;
    /// no state changes.
    pub fn checkout(&mut self) -> Result<Receipt, BasketError> {
        if self.items.is_empty() {
            return Err(BasketError::EmptyBasket);
        }
        let totals = self.totals();
        self.items.clear();
        self.persist();
        tracing::info!(total = %totals.total, "order placed");
        self.notify(&BasketEvent::CheckedOut {
            total: totals.total,
        });
        Ok(Receipt {
            totals,
            placed_at: Utc::now(),
        })
    }

    /// Write current state through the storage backend.
    ///
    /// Failures are logged and otherwise ignored; the in-memory basket
    /// stays authoritative for the rest of the process.
    fn persist(&self) {
        if let Err(e) = persist::save(&self.storage, &self.items, self.unit_count()) {
            tracing::warn!("failed to persist basket: {e}");
        }
    }

    fn notify(&self, event: &BasketEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}
