//! In-memory order repository.
//!
//! Stores the same per-item JSON texts the SQLite table holds, so the
//! serialization contract is exercised without a database. Rows keep
//! insertion order.

use crate::codec::{decode_items, encode_items};
use crate::db::DbError;
use crate::model::order::{Order, OrderId};
use crate::repo::order_repo::{OrderRepository, RepoError, RepoOperation, RepoResult};
use std::sync::{PoisonError, RwLock};

/// Substitute store for tests and tooling that have no SQLite handle.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    rows: RwLock<Vec<(OrderId, Vec<String>)>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores item texts verbatim, bypassing encoding. Used to seed rows
    /// written by other writers, including malformed ones.
    pub fn insert_raw(&self, id: OrderId, item_texts: Vec<String>) -> RepoResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        if rows.iter().any(|(row_id, _)| *row_id == id) {
            return Err(RepoError::persistence(
                RepoOperation::Insert,
                DbError::DuplicateId(id),
            ));
        }
        rows.push((id, item_texts));
        Ok(())
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn insert_order(&self, order: &Order) -> RepoResult<OrderId> {
        let texts = encode_items(&order.items)?;
        self.insert_raw(order.id, texts)?;
        Ok(order.id)
    }

    fn get_order_by_id(&self, id: OrderId) -> RepoResult<Order> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        let (order_id, texts) = rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .ok_or_else(|| {
                RepoError::persistence(RepoOperation::Retrieve, DbError::NotFound(id))
            })?;
        Ok(Order::new(*order_id, decode_items(texts)?))
    }

    fn get_all_orders(&self) -> RepoResult<Vec<Order>> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.iter()
            .map(|(id, texts)| -> RepoResult<Order> {
                Ok(Order::new(*id, decode_items(texts)?))
            })
            .collect()
    }
}
