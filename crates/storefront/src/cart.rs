//! The service cart.
//!
//! The cart is the staging area for a booking: flat lines, no quantities,
//! no dedup. Every mutation writes the whole collection through to the
//! store and then tells observers the new line count so badges stay honest.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use unlock_style_core::{ItemId, gst, with_gst};
use unlock_style_storage::{StorageError, Store};

use crate::db::CartRepository;
use crate::models::CartItem;

/// Errors that can occur while editing the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The removal index points past the end of the cart.
    #[error("no cart line at index {index} (cart has {len} lines)")]
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Number of lines actually in the cart.
        len: usize,
    },

    /// The store rejected the write-through.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Gets told whenever the cart's line count changes.
///
/// This is the badge-refresh contract: observers receive the count after
/// every successful mutation, including `clear`.
pub trait CartObserver {
    /// Called with the new number of lines.
    fn cart_changed(&self, count: usize);
}

/// Totals for the current cart contents.
///
/// Recomputed from the lines on every call; nothing here is cached or
/// persisted, so a stale total cannot survive a price edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    /// 18% GST on the subtotal, rounded to two decimal places.
    pub tax: Decimal,
    pub total: Decimal,
}

/// The cart manager.
pub struct CartManager<'a> {
    repo: CartRepository<'a>,
    items: Vec<CartItem>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<'a> CartManager<'a> {
    /// Open the cart over a store, loading whatever lines are persisted.
    #[must_use]
    pub fn open(store: &'a dyn Store) -> Self {
        let repo = CartRepository::new(store);
        let items = repo.load();
        Self {
            repo,
            items,
            observers: Vec::new(),
        }
    }

    /// Register an observer for line-count changes.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a service line. Always succeeds apart from storage failures.
    ///
    /// Ids come from the clock in epoch milliseconds; when two adds land
    /// in the same millisecond the new id is bumped past the current
    /// maximum so lines stay individually removable.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-through fails.
    pub fn add_item(
        &mut self,
        name: &str,
        price: Decimal,
        now: DateTime<Utc>,
    ) -> Result<ItemId, CartError> {
        let mut id = ItemId::from_timestamp(now);
        if let Some(max) = self.items.iter().map(|item| item.id).max()
            && id <= max
        {
            id = ItemId::new(max.as_i64() + 1);
        }

        self.items.push(CartItem {
            id,
            name: name.to_owned(),
            price,
            timestamp: now,
        });
        self.persist()?;
        tracing::debug!(item = name, count = self.items.len(), "cart line added");
        Ok(id)
    }

    /// Remove the line at `index`, compacting the rest.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfBounds`] if `index` is past the end,
    /// or [`CartError::Storage`] if the write-through fails.
    pub fn remove_item(&mut self, index: usize) -> Result<CartItem, CartError> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Drop every line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-through fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        self.persist()?;
        Ok(())
    }

    /// Totals for the current contents, computed fresh on every call.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let subtotal: Decimal = self.items.iter().map(|item| item.price).sum();
        CartSummary {
            subtotal,
            tax: gst(subtotal),
            total: with_gst(subtotal),
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.repo.save(&self.items)?;
        for observer in &self.observers {
            observer.cart_changed(self.items.len());
        }
        Ok(())
    }
}
