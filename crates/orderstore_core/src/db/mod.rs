//! SQLite handle bootstrap and storage column types.
//!
//! # Responsibility
//! - Open and configure SQLite connections used by the order repository.
//! - Provide the array-of-text column type for `orders.items`.
//! - Provision the `orders` table for embedded databases.
//!
//! # Invariants
//! - Opening a file database never creates or alters tables.
//! - Connections are owned by the caller and released when dropped.

use crate::model::order::OrderId;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
pub mod text_array;

pub use open::{open_db, open_db_in_memory};
pub use schema::{orders_table_exists, provision_schema};
pub use text_array::TextArray;

pub type DbResult<T> = Result<T, DbError>;

/// Backing-store failure underneath a repository operation.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    MissingTable(&'static str),
    /// Primary-key conflict reported by a store without SQL constraints.
    DuplicateId(OrderId),
    /// No row for the requested id in a store without SQL cursors.
    NotFound(OrderId),
}

impl DbError {
    /// Whether this error means "no matching row".
    pub fn is_no_rows(&self) -> bool {
        matches!(
            self,
            Self::Sqlite(rusqlite::Error::QueryReturnedNoRows) | Self::NotFound(_)
        )
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingTable(table) => write!(f, "required table `{table}` does not exist"),
            Self::DuplicateId(id) => write!(f, "duplicate key: order {id} already exists"),
            Self::NotFound(id) => write!(f, "no rows in result set for order {id}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingTable(_) | Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
