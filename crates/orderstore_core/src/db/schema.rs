//! `orders` table definition.
//!
//! The table is normally owned by whoever operates the database. These helpers
//! exist for embedded and in-memory databases; there is no versioning.

use super::DbResult;
use rusqlite::Connection;

pub const ORDERS_TABLE: &str = "orders";

const ORDERS_DDL: &str = "CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY,
    items TEXT NOT NULL
);";

/// Creates the `orders` table when it is absent. Existing data is untouched.
pub fn provision_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(ORDERS_DDL)?;
    Ok(())
}

/// Returns whether the `orders` table is present on this connection.
pub fn orders_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [ORDERS_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
