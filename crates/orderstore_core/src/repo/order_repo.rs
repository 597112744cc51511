//! Order repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map `Order`/`Item` values to rows of the `orders` table and back.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Items are encoded before any SQL is issued; an encoding failure never
//!   reaches the store.
//! - Read paths reject undecodable item texts instead of skipping them.
//! - Every operation issues exactly one statement and is all-or-nothing.
//! - A missing row is reported as a generic retrieval failure.

use crate::codec::{decode_items, encode_items, CodecError};
use crate::db::schema::orders_table_exists;
use crate::db::{DbError, TextArray};
use crate::model::order::{Order, OrderId};
use log::{debug, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const INSERT_ORDER_SQL: &str = "INSERT INTO orders (id, items) VALUES (?1, ?2) RETURNING id;";
const SELECT_ORDER_BY_ID_SQL: &str = "SELECT id, items FROM orders WHERE id = ?1;";
const SELECT_ALL_ORDERS_SQL: &str = "SELECT id, items FROM orders;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository step that failed against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoOperation {
    Prepare,
    Insert,
    Retrieve,
    QueryAll,
}

impl Display for RepoOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Prepare => "failed to prepare order repository",
            Self::Insert => "failed to insert order",
            Self::Retrieve => "failed to retrieve order",
            Self::QueryAll => "failed to query orders",
        };
        f.write_str(text)
    }
}

/// Error returned by every order repository operation.
#[derive(Debug)]
pub enum RepoError {
    /// An item could not be turned into JSON. Raised before any SQL runs.
    Encoding(CodecError),
    /// A stored item text is not valid JSON for the `Item` shape.
    Decoding(CodecError),
    /// The store rejected or could not run the statement, or found no row.
    Persistence {
        operation: RepoOperation,
        source: DbError,
    },
}

impl RepoError {
    pub fn persistence(operation: RepoOperation, source: impl Into<DbError>) -> Self {
        Self::Persistence {
            operation,
            source: source.into(),
        }
    }

    /// Whether a persistence failure was caused by a missing row.
    ///
    /// Missing rows share the `Persistence` kind with every other store
    /// failure; this only inspects the cause.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Persistence { source, .. } if source.is_no_rows())
    }

    pub fn operation(&self) -> Option<RepoOperation> {
        match self {
            Self::Persistence { operation, .. } => Some(*operation),
            Self::Encoding(_) | Self::Decoding(_) => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding(err) | Self::Decoding(err) => write!(f, "{err}"),
            Self::Persistence { operation, source } => write!(f, "{operation}: {source}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encoding(err) | Self::Decoding(err) => err.source(),
            Self::Persistence { source, .. } => Some(source),
        }
    }
}

impl From<CodecError> for RepoError {
    fn from(value: CodecError) -> Self {
        if value.is_encode() {
            Self::Encoding(value)
        } else {
            Self::Decoding(value)
        }
    }
}

/// Repository interface for order persistence.
pub trait OrderRepository {
    /// Persists one order and returns the id the store confirmed.
    fn insert_order(&self, order: &Order) -> RepoResult<OrderId>;
    /// Loads one order with its items in stored array order.
    fn get_order_by_id(&self, id: OrderId) -> RepoResult<Order>;
    /// Loads every order in store-defined row order.
    fn get_all_orders(&self) -> RepoResult<Vec<Order>>;
}

/// SQLite-backed order repository borrowing a caller-owned connection.
pub struct SqliteOrderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOrderRepository<'conn> {
    /// Constructs a repository after checking that `orders` exists.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let exists = orders_table_exists(conn)
            .map_err(|err| RepoError::persistence(RepoOperation::Prepare, err))?;
        if !exists {
            return Err(RepoError::persistence(
                RepoOperation::Prepare,
                DbError::MissingTable("orders"),
            ));
        }
        Ok(Self { conn })
    }
}

impl OrderRepository for SqliteOrderRepository<'_> {
    fn insert_order(&self, order: &Order) -> RepoResult<OrderId> {
        let items = TextArray(encode_items(&order.items)?);

        let confirmed_id = self
            .conn
            .query_row(INSERT_ORDER_SQL, params![order.id, items], |row| {
                row.get::<_, OrderId>(0)
            })
            .map_err(|err| failed(RepoOperation::Insert, err))?;

        debug!(
            "event=order_insert module=repo status=ok order_id={} item_count={}",
            confirmed_id,
            order.items.len()
        );
        Ok(confirmed_id)
    }

    fn get_order_by_id(&self, id: OrderId) -> RepoResult<Order> {
        let (order_id, texts) = self
            .conn
            .query_row(SELECT_ORDER_BY_ID_SQL, [id], scan_order_row)
            .map_err(|err| failed(RepoOperation::Retrieve, err))?;

        let order = Order::new(order_id, decode_items(&texts.0)?);
        debug!(
            "event=order_get module=repo status=ok order_id={} item_count={}",
            order.id,
            order.items.len()
        );
        Ok(order)
    }

    fn get_all_orders(&self) -> RepoResult<Vec<Order>> {
        let mut stmt = self
            .conn
            .prepare(SELECT_ALL_ORDERS_SQL)
            .map_err(|err| failed(RepoOperation::QueryAll, err))?;
        let mut rows = stmt
            .query([])
            .map_err(|err| failed(RepoOperation::QueryAll, err))?;

        let mut orders = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|err| failed(RepoOperation::Retrieve, err))?
        {
            let (order_id, texts) =
                scan_order_row(row).map_err(|err| failed(RepoOperation::Retrieve, err))?;
            orders.push(Order::new(order_id, decode_items(&texts.0)?));
        }

        debug!(
            "event=order_list module=repo status=ok order_count={}",
            orders.len()
        );
        Ok(orders)
    }
}

fn scan_order_row(row: &Row<'_>) -> rusqlite::Result<(OrderId, TextArray)> {
    Ok((row.get("id")?, row.get("items")?))
}

fn failed(operation: RepoOperation, err: rusqlite::Error) -> RepoError {
    warn!("event=order_repo module=repo status=error operation={operation:?} error={err}");
    RepoError::persistence(operation, err)
}
