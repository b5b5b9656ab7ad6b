use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::domain::{MenuItem, MenuItemId};
use storage::KeyValueStore;
use tracing::{debug, warn};

use crate::{error::CartError, price::unit_price};

/// Storage slot the storefront has always used for the cart.
pub const CART_STORAGE_KEY: &str = "aromaCafeCart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub menu_item: MenuItem,
    pub quantity: u32,
}

/// Ordered cart lines plus totals derived from them.
///
/// Totals are recomputed after every change and on deserialization, so a
/// stored `totalItems`/`totalPrice` is never trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredCart")]
pub struct Cart {
    items: Vec<CartLine>,
    total_items: u64,
    total_price: f64,
}

#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartLine>,
}

impl From<StoredCart> for Cart {
    fn from(stored: StoredCart) -> Self {
        Cart::from_lines(stored.items)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}

impl Cart {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: 0.0,
        }
    }

    /// Builds a cart from arbitrary lines: zero quantities are dropped and
    /// repeated ids are merged into the first line carrying that id.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut items: Vec<CartLine> = Vec::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match items
                .iter_mut()
                .find(|existing| existing.menu_item.id == line.menu_item.id)
            {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => items.push(line),
            }
        }
        let mut cart = Self {
            items,
            total_items: 0,
            total_price: 0.0,
        };
        cart.recompute();
        cart
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, item_id: MenuItemId) -> u32 {
        self.line(item_id).map_or(0, |line| line.quantity)
    }

    fn line(&self, item_id: MenuItemId) -> Option<&CartLine> {
        self.items.iter().find(|line| line.menu_item.id == item_id)
    }

    fn add(&mut self, item: &MenuItem) {
        match self
            .items
            .iter_mut()
            .find(|line| line.menu_item.id == item.id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLine {
                menu_item: item.clone(),
                quantity: 1,
            }),
        }
        self.recompute();
    }

    fn set_quantity(&mut self, item_id: MenuItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove(item_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.menu_item.id == item_id)
        {
            line.quantity = quantity;
        }
        self.recompute();
    }

    fn remove(&mut self, item_id: MenuItemId) {
        self.items.retain(|line| line.menu_item.id != item_id);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.total_items = self
            .items
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum();
        self.total_price = self.items.iter().fold(0.0, |sum, line| {
            sum + unit_price(&line.menu_item) * f64::from(line.quantity)
        });
    }
}

/// Whether the cart panel is showing. Presentation state, kept apart from
/// [`Cart`] so totals stay a pure function of the lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartPanel {
    open: bool,
}

impl CartPanel {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Cart owner that writes the whole cart to its store after every mutation.
///
/// A failed write leaves the in-memory change applied and is reported as
/// [`CartError::Persist`].
pub struct CartContainer {
    store: Arc<dyn KeyValueStore>,
    cart: Cart,
}

impl CartContainer {
    /// Reads the persisted cart, falling back to an empty one when the slot is
    /// missing, unreadable or corrupt.
    pub async fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let cart = match store.get(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => cart,
                Err(error) => {
                    warn!(key = CART_STORAGE_KEY, %error, "failed to parse saved cart; starting empty");
                    Cart::empty()
                }
            },
            Ok(None) => Cart::empty(),
            Err(error) => {
                warn!(key = CART_STORAGE_KEY, %error, "failed to read saved cart; starting empty");
                Cart::empty()
            }
        };
        debug!(lines = cart.items().len(), "cart restored");
        Self { store, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub async fn add_item(&mut self, item: &MenuItem) -> Result<&Cart, CartError> {
        self.cart.add(item);
        self.persist().await?;
        Ok(&self.cart)
    }

    /// A quantity of zero or less removes the line; an unknown id is ignored.
    pub async fn set_quantity(
        &mut self,
        item_id: MenuItemId,
        quantity: i64,
    ) -> Result<&Cart, CartError> {
        self.cart.set_quantity(item_id, quantity);
        self.persist().await?;
        Ok(&self.cart)
    }

    pub async fn remove_item(&mut self, item_id: MenuItemId) -> Result<&Cart, CartError> {
        self.cart.remove(item_id);
        self.persist().await?;
        Ok(&self.cart)
    }

    pub async fn clear(&mut self) -> Result<&Cart, CartError> {
        self.cart = Cart::empty();
        self.persist().await?;
        Ok(&self.cart)
    }

    async fn persist(&self) -> Result<(), CartError> {
        let raw = serde_json::to_string(&self.cart)?;
        self.store
            .set(CART_STORAGE_KEY, &raw)
            .await
            .map_err(|source| CartError::Persist {
                key: CART_STORAGE_KEY,
                source,
            })
    }
}

#[cfg(test)]
#[path = "tests/cart_tests.rs"]
mod tests;
