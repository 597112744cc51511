//! Order persistence over a relational store.
//!
//! Orders are stored one row each; their items live in an array-of-text
//! column where every element is the JSON text of one item.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use codec::{
    decode_item, decode_items, decode_order, encode_item, encode_items, encode_order, CodecError,
    CodecResult,
};
pub use db::{open_db, open_db_in_memory, provision_schema, DbError, DbResult, TextArray};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::order::{Item, Order, OrderId};
pub use repo::memory::InMemoryOrderRepository;
pub use repo::order_repo::{
    OrderRepository, RepoError, RepoOperation, RepoResult, SqliteOrderRepository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
