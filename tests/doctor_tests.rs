// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use storelens::commands::doctor;
use storelens::dataset::Dataset;
use tempfile::TempDir;

#[test]
fn clean_dataset_reports_no_issues() {
    let dir = TempDir::new().unwrap();
    common::write_orders(
        dir.path(),
        &["CA-1001,2017-01-05,2017-01-08,100,20,2,Stapler,Office Supplies,Fasteners,Consumer,East,New York"],
    );
    common::write_returns(dir.path(), &["CA-1001,Yes"]);

    let ds = Dataset::load(dir.path()).unwrap();
    assert!(doctor::issues(&ds).is_empty());
}

#[test]
fn ship_date_before_order_date_is_flagged() {
    let dir = TempDir::new().unwrap();
    common::write_orders(
        dir.path(),
        &["CA-1001,2017-01-05,2017-01-02,100,20,2,Stapler,Office Supplies,Fasteners,Consumer,East,New York"],
    );

    let ds = Dataset::load(dir.path()).unwrap();
    let rows = doctor::issues(&ds);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "ship_before_order");
}

#[test]
fn negative_sales_and_zero_quantity_are_flagged() {
    let dir = TempDir::new().unwrap();
    common::write_orders(
        dir.path(),
        &["CA-1001,2017-01-05,2017-01-08,-5,20,0,Stapler,Office Supplies,Fasteners,Consumer,East,New York"],
    );

    let ds = Dataset::load(dir.path()).unwrap();
    let rows = doctor::issues(&ds);
    let kinds: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert!(kinds.contains(&"negative_sales"));
    assert!(kinds.contains(&"zero_quantity"));
}

#[test]
fn return_for_unknown_order_is_flagged() {
    let dir = TempDir::new().unwrap();
    common::write_orders(
        dir.path(),
        &["CA-1001,2017-01-05,2017-01-08,100,20,2,Stapler,Office Supplies,Fasteners,Consumer,East,New York"],
    );
    common::write_returns(dir.path(), &["CA-9999,Yes"]);

    let ds = Dataset::load(dir.path()).unwrap();
    let rows = doctor::issues(&ds);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "return_unknown_order");
    assert_eq!(rows[0][1], "CA-9999");
}
