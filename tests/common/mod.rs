// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const ORDERS_HEADER: &str = "Order ID,Order Date,Ship Date,Sales,Profit,Quantity,Product Name,Category,Sub-Category,Segment,Region,State";

pub fn write_orders(dir: &Path, rows: &[&str]) {
    let mut body = String::from(ORDERS_HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(dir.join("orders.csv"), body).unwrap();
}

pub fn write_returns(dir: &Path, rows: &[&str]) {
    let mut body = String::from("Order ID,Returned");
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(dir.join("returns.csv"), body).unwrap();
}
