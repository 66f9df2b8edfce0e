// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashboard::commands::{charts, config};
use cashboard::{db, utils};
use chrono::NaiveDate;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn defaults_apply_when_nothing_is_stored() {
    let conn = setup();
    assert_eq!(utils::get_recent_limit(&conn).unwrap(), 5);
    assert_eq!(utils::get_currency(&conn).unwrap(), "BRL");
    assert_eq!(config::effective_value(&conn, "recent_limit").unwrap(), "5");
}

#[test]
fn set_setting_validates_keys_and_values() {
    let conn = setup();
    assert!(utils::set_setting(&conn, "theme", "dark").is_err());
    assert!(utils::set_setting(&conn, "recent_limit", "many").is_err());

    utils::set_setting(&conn, "recent_limit", "2").unwrap();
    utils::set_setting(&conn, "currency", "EUR").unwrap();
    utils::set_setting(&conn, "recent_limit", "3").unwrap();
    assert_eq!(utils::get_recent_limit(&conn).unwrap(), 3);
    assert_eq!(config::effective_value(&conn, "currency").unwrap(), "EUR");
}

#[test]
fn dashboard_honours_stored_recent_limit() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO accounts(id,name,balance) VALUES ('1','Checking','0');
        INSERT INTO transactions(id,amount,type,transaction_date,account_id) VALUES ('1','1','OUTFLOW','2024-01-01','1');
        INSERT INTO transactions(id,amount,type,transaction_date,account_id) VALUES ('2','1','OUTFLOW','2024-01-02','1');
        INSERT INTO transactions(id,amount,type,transaction_date,account_id) VALUES ('3','1','OUTFLOW','2024-01-03','1');
        "#,
    )
    .unwrap();
    utils::set_setting(&conn, "recent_limit", "1").unwrap();

    let data = charts::build_dashboard(&conn, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()).unwrap();
    assert_eq!(data.recent.len(), 1);
    assert_eq!(data.recent[0].id, "3");
}
