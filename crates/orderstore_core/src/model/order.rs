//! Order aggregate and item value object.
//!
//! # Responsibility
//! - Define the in-memory shape of one `orders` row.
//!
//! # Invariants
//! - `Order::items` keeps the position order of the stored array.
//! - `Item` serializes with exactly the keys `id`, `name`, `price`.

use serde::{Deserialize, Serialize};

/// Identifier of one order row (`orders.id`).
pub type OrderId = i64;

/// One line of an order. Immutable value object with no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u8,
    pub name: String,
    pub price: u8,
}

impl Item {
    pub fn new(id: u8, name: impl Into<String>, price: u8) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Aggregate of an identifier and an ordered sequence of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned; the store echoes it back on insert.
    pub id: OrderId,
    pub items: Vec<Item>,
}

impl Order {
    /// Creates an order with a caller-provided id.
    pub fn new(id: OrderId, items: Vec<Item>) -> Self {
        Self { id, items }
    }
}
