//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the order data access contract.
//! - Isolate SQLite query details from callers.
//!
//! # Invariants
//! - Repositories never cache; every call reads from the backing store.
//! - Errors carry the failed operation as context.

pub mod memory;
pub mod order_repo;
