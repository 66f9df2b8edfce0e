// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashboard::{cli, commands::transactions, db};
use rusqlite::{Connection, params};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO accounts(id,name,institution,balance) VALUES ('1','A1','Bank','0')",
        [],
    )
    .unwrap();
    conn.execute("INSERT INTO categories(id,name) VALUES ('1','Cat1')", [])
        .unwrap();
    for i in 1..=3 {
        conn.execute(
            "INSERT INTO transactions(id,amount,type,transaction_date,account_id,category_id) VALUES (?1,'10.00',?2,?3,'1','1')",
            params![
                i.to_string(),
                if i == 2 { "INFLOW" } else { "OUTFLOW" },
                format!("2025-01-0{}", i)
            ],
        )
        .unwrap();
    }
    conn
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["cashboard", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    let rows = transactions::query_rows(&conn, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
    assert_eq!(rows[0].category, "Cat1");
}

#[test]
fn list_filters_by_type() {
    let conn = setup();
    let rows = transactions::query_rows(&conn, &list_matches(&["--type", "inflow"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "2");
    assert_eq!(rows[0].direction, "INFLOW");
}

#[test]
fn add_records_a_validated_transaction() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "cashboard", "tx", "add", "--date", "2025-01-09", "--account", "A1", "--amount", "12.5",
        "--type", "OUTFLOW", "--category", "Cat1",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&conn, tx_m).unwrap();

    let snapshot = db::load_snapshot(&conn).unwrap();
    let newest = &snapshot.transactions[0];
    assert_eq!(newest.id, "4");
    assert_eq!(newest.amount, "12.50");
    assert_eq!(newest.date, "2025-01-09");
    assert_eq!(newest.category_id.as_deref(), Some("1"));
}

#[test]
fn add_rejects_negative_amount_and_unknown_account() {
    let conn = setup();
    for (account, amount) in [("A1", "--amount=-3"), ("Nope", "--amount=3")] {
        let matches = cli::build_cli().get_matches_from([
            "cashboard", "tx", "add", "--date", "2025-01-09", "--account", account, amount,
            "--type", "INFLOW",
        ]);
        let Some(("tx", tx_m)) = matches.subcommand() else {
            panic!("no tx subcommand");
        };
        assert!(transactions::handle(&conn, tx_m).is_err());
    }
    assert_eq!(db::load_snapshot(&conn).unwrap().transactions.len(), 3);
}
