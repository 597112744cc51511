use orderstore_core::db::{open_db, open_db_in_memory, orders_table_exists, provision_schema};
use orderstore_core::{Item, Order, OrderRepository, RepoError, SqliteOrderRepository};

#[test]
fn in_memory_database_has_orders_table() {
    let conn = open_db_in_memory().unwrap();
    assert!(orders_table_exists(&conn).unwrap());

    let foreign_keys: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(foreign_keys, 1);
}

#[test]
fn file_database_is_not_provisioned_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("orders.db")).unwrap();

    assert!(!orders_table_exists(&conn).unwrap());
    assert!(matches!(
        SqliteOrderRepository::try_new(&conn),
        Err(RepoError::Persistence { .. })
    ));
}

#[test]
fn orders_survive_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.db");
    let order = Order::new(
        4,
        vec![Item::new(1, "milk", 50), Item::new(2, "sugar", 20)],
    );

    {
        let conn = open_db(&path).unwrap();
        provision_schema(&conn).unwrap();
        let repo = SqliteOrderRepository::try_new(&conn).unwrap();
        repo.insert_order(&order).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteOrderRepository::try_new(&conn).unwrap();
    assert_eq!(repo.get_all_orders().unwrap(), vec![order]);
}

#[test]
fn open_db_reports_unopenable_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing_parent = dir.path().join("missing").join("orders.db");

    assert!(open_db(missing_parent).is_err());
}
