// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashboard::{cli, commands::importer, db, models::Direction};
use rusqlite::Connection;
use std::io::Write;
use tempfile::NamedTempFile;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn with_account(conn: &Connection) {
    conn.execute(
        "INSERT INTO accounts(id,name,institution,balance) VALUES ('1','A1','Bank','0')",
        [],
    )
    .unwrap();
    conn.execute("INSERT INTO categories(id,name) VALUES ('1','Food')", [])
        .unwrap();
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

fn run_import(conn: &mut Connection, kind: &str, path: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(["cashboard", "import", kind, "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(conn, import_m)
    } else {
        panic!("no import subcommand");
    }
}

fn count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn importer_trims_cli_path_argument() {
    let mut conn = base_conn();
    with_account(&conn);
    let file = write_temp("date,type,amount,account,category,description\n2025-02-03,OUTFLOW,5.00,A1,,\n");

    let padded = format!("  {}  ", file.path().to_str().unwrap());
    run_import(&mut conn, "transactions", &padded).unwrap();
    assert_eq!(count(&conn), 1);
}

#[test]
fn importer_resolves_names_and_normalises_fields() {
    let mut conn = base_conn();
    with_account(&conn);
    let file = write_temp(
        "date,type,amount,account,category,description\n 2025-02-03 , inflow , 20 , A1 , Food ,  Salary  \n2025-02-04,OUTFLOW,3.5,A1,,\n",
    );
    run_import(&mut conn, "transactions", file.path().to_str().unwrap()).unwrap();

    let snapshot = db::load_snapshot(&conn).unwrap();
    assert_eq!(snapshot.transactions.len(), 2);
    let first = snapshot
        .transactions
        .iter()
        .find(|t| t.date == "2025-02-03")
        .unwrap();
    assert_eq!(first.direction, Direction::Inflow);
    assert_eq!(first.amount, "20.00");
    assert_eq!(first.account_id, "1");
    assert_eq!(first.category_id.as_deref(), Some("1"));
    assert_eq!(first.description.as_deref(), Some("Salary"));

    let second = snapshot
        .transactions
        .iter()
        .find(|t| t.date == "2025-02-04")
        .unwrap();
    assert_eq!(second.category_id, None);
    assert_eq!(second.description, None);
}

#[test]
fn importer_rejects_invalid_date() {
    let mut conn = base_conn();
    with_account(&conn);
    let file = write_temp("date,type,amount,account,category,description\n2025-13-03,OUTFLOW,1,A1,,\n");

    let err = run_import(&mut conn, "transactions", file.path().to_str().unwrap()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("CSV row 2"));
    assert!(msg.contains("Invalid date '2025-13-03'"));
    assert_eq!(count(&conn), 0);
}

#[test]
fn importer_rejects_negative_amount() {
    let mut conn = base_conn();
    with_account(&conn);
    let file = write_temp("date,type,amount,account,category,description\n2025-01-03,OUTFLOW,-5,A1,,\n");

    let err = run_import(&mut conn, "transactions", file.path().to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid amount '-5'"));
    assert_eq!(count(&conn), 0);
}

#[test]
fn importer_rolls_back_when_row_fails() {
    let mut conn = base_conn();
    with_account(&conn);
    let file = write_temp(
        "date,type,amount,account,category,description\n2025-02-03,OUTFLOW,5.00,A1,,\n2025-02-04,OUTFLOW,7.00,Nowhere,,\n",
    );

    let err = run_import(&mut conn, "transactions", file.path().to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("Account 'Nowhere' not found"));
    assert_eq!(count(&conn), 0);
}

#[test]
fn snapshot_import_replaces_store_with_backend_dtos() {
    let mut conn = base_conn();
    with_account(&conn);
    let file = write_temp(
        r#"{
            "accounts": [
                {"id": "10", "accountName": "Nubank", "institution": "Nu", "balance": "820.10", "userId": "7"}
            ],
            "categories": [{"id": "3", "name": "Groceries", "userId": "7"}],
            "transactions": [
                {"id": "1", "amount": "45.90", "type": "OUTFLOW", "transactionDate": "2025-03-02",
                 "accountId": "10", "categoryId": "3", "description": "Market"},
                {"id": "2", "amount": "3000.00", "type": "INFLOW", "transactionDate": "2025-03-05",
                 "accountId": "10"}
            ]
        }"#,
    );
    run_import(&mut conn, "snapshot", file.path().to_str().unwrap()).unwrap();

    let snapshot = db::load_snapshot(&conn).unwrap();
    assert_eq!(snapshot.accounts.len(), 1);
    assert_eq!(snapshot.accounts[0].name, "Nubank");
    assert_eq!(snapshot.categories[0].name, "Groceries");
    let ids: Vec<&str> = snapshot.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(snapshot.transactions[1].category_id.as_deref(), Some("3"));
}

#[test]
fn snapshot_import_keeps_malformed_amounts_for_doctor() {
    let mut conn = base_conn();
    let file = write_temp(
        r#"{"transactions": [{"id": "1", "amount": "n/a", "type": "OUTFLOW",
            "transactionDate": "2025-03-02", "accountId": "10"}]}"#,
    );
    run_import(&mut conn, "snapshot", file.path().to_str().unwrap()).unwrap();
    assert_eq!(db::load_snapshot(&conn).unwrap().transactions[0].amount, "n/a");
}

#[test]
fn snapshot_import_rejects_unknown_direction() {
    let mut conn = base_conn();
    let file = write_temp(
        r#"{"transactions": [{"id": "1", "amount": "1", "type": "SIDEWAYS",
            "transactionDate": "2025-03-02", "accountId": "10"}]}"#,
    );
    assert!(run_import(&mut conn, "snapshot", file.path().to_str().unwrap()).is_err());
    assert_eq!(count(&conn), 0);
}

#[test]
fn snapshot_keeps_same_day_order_across_round_trips() {
    use cashboard::models::{Snapshot, TransactionRecord};

    let record = |id: &str, date: &str| TransactionRecord {
        id: id.into(),
        amount: "1.00".into(),
        direction: Direction::Outflow,
        date: date.into(),
        account_id: "1".into(),
        category_id: None,
        description: None,
        source: None,
        destination: None,
    };
    let given = Snapshot {
        transactions: vec![
            record("7", "2024-02-01"),
            record("6", "2024-02-01"),
            record("5", "2024-01-01"),
        ],
        ..Snapshot::default()
    };

    let mut conn = base_conn();
    db::replace_snapshot(&mut conn, &given).unwrap();
    let first = db::load_snapshot(&conn).unwrap();
    let ids: Vec<&str> = first.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "6", "5"]);

    db::replace_snapshot(&mut conn, &first).unwrap();
    let second = db::load_snapshot(&conn).unwrap();
    assert_eq!(second.transactions, first.transactions);
}
