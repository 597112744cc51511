//! Reference driver for the order store.
//!
//! # Responsibility
//! - Acquire one database handle, run insert/get/list once, print results.
//! - Release the handle on every exit path and report failures via exit code.

mod config;

use config::CliConfig;
use log::{error, info};
use orderstore_core::{
    core_version, init_logging, open_db, open_db_in_memory, provision_schema, Item, Order,
    OrderRepository, SqliteOrderRepository,
};
use rusqlite::Connection;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("orderstore: invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some((level, log_dir)) = config.file_logging() {
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("orderstore: {err}");
            return ExitCode::FAILURE;
        }
    }
    info!(
        "event=driver_start module=cli status=ok core_version={}",
        core_version()
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=driver_run module=cli status=error error={err}");
            eprintln!("orderstore: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn Error>> {
    // Dropped when `run` returns, on success and on every `?` exit.
    let conn = connect(config)?;
    let repo = SqliteOrderRepository::try_new(&conn)?;

    let order = Order::new(
        4,
        vec![Item::new(1, "milk", 50), Item::new(2, "sugar", 20)],
    );
    let order_id = repo.insert_order(&order)?;
    println!("Inserted order with ID: {order_id}");

    let fetched = repo.get_order_by_id(order_id)?;
    println!("Retrieved Order: {fetched:?}");

    let orders = repo.get_all_orders()?;
    println!("Retrieved Orders: {orders:?}");

    info!(
        "event=driver_run module=cli status=ok order_count={}",
        orders.len()
    );
    Ok(())
}

fn connect(config: &CliConfig) -> Result<Connection, Box<dyn Error>> {
    let conn = match &config.db_path {
        Some(path) => {
            let conn = open_db(path)?;
            if config.provision_schema {
                provision_schema(&conn)?;
            }
            conn
        }
        None => open_db_in_memory()?,
    };
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::{connect, run};
    use crate::config::CliConfig;
    use orderstore_core::db::orders_table_exists;

    fn file_config(path: std::path::PathBuf, provision_schema: bool) -> CliConfig {
        CliConfig {
            db_path: Some(path),
            log_level: "info".to_string(),
            log_dir: None,
            provision_schema,
        }
    }

    #[test]
    fn in_memory_default_runs_to_completion() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert!(config.file_logging().is_none());
        run(&config).unwrap();
    }

    #[test]
    fn file_database_without_orders_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(dir.path().join("orders.db"), false);

        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("orders"));
    }

    #[test]
    fn provision_flag_creates_table_and_run_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(dir.path().join("orders.db"), true);

        run(&config).unwrap();
        let conn = connect(&file_config(dir.path().join("orders.db"), false)).unwrap();
        assert!(orders_table_exists(&conn).unwrap());
    }
}
