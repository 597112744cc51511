//! Order/item domain model.
//!
//! # Responsibility
//! - Define the plain data holders persisted by the repository layer.
//!
//! # Invariants
//! - Model types carry no persistence behavior; encoding lives in `codec`.

pub mod order;
