// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use storelens::{cli, commands::export, dataset::Dataset};
use tempfile::TempDir;

fn sample_dataset(dir: &TempDir) -> Dataset {
    common::write_orders(
        dir.path(),
        &[
            "CA-1001,2017-01-05,2017-01-08,100,20,2,Stapler,Office Supplies,Fasteners,Consumer,East,New York",
            "CA-1002,2017-01-10,2017-01-12,200,50,1,Desk,Furniture,Tables,Corporate,West,California",
            "CA-1003,2017-01-15,2017-01-18,300,60,1,Chair,Furniture,Chairs,Consumer,East,New York",
        ],
    );
    common::write_returns(dir.path(), &["CA-1001,Yes"]);
    Dataset::load(dir.path()).unwrap()
}

#[test]
fn export_writes_filtered_csv() {
    let dir = TempDir::new().unwrap();
    let ds = sample_dataset(&dir);
    let out = dir.path().join("subset.csv");
    let out_arg = out.to_str().unwrap().to_string();

    let matches = cli::build_cli().get_matches_from([
        "storelens",
        "export",
        "--region",
        "East",
        "--format",
        "csv",
        "--out",
        &out_arg,
    ]);
    if let Some(("export", sub)) = matches.subcommand() {
        export::handle(&ds, sub).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let body = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = body.trim().lines().collect();
    assert_eq!(lines.len(), 3); // header + two East rows
    assert!(lines[0].starts_with("Order ID,Order Date,Ship Date"));
    assert!(lines[0].ends_with("Returned"));
    assert!(body.contains("CA-1001"));
    assert!(body.contains("CA-1003"));
    assert!(!body.contains("CA-1002"));
}

#[test]
fn export_json_carries_the_returned_flag() {
    let dir = TempDir::new().unwrap();
    let ds = sample_dataset(&dir);
    let out = dir.path().join("subset.json");
    let out_arg = out.to_str().unwrap().to_string();

    let matches = cli::build_cli().get_matches_from([
        "storelens",
        "export",
        "--format",
        "json",
        "--out",
        &out_arg,
    ]);
    if let Some(("export", sub)) = matches.subcommand() {
        export::handle(&ds, sub).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let body = std::fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&body).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["order_id"], "CA-1001");
    assert_eq!(rows[0]["returned"], true);
    assert_eq!(rows[1]["returned"], false);
}
