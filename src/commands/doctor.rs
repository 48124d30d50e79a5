// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::dataset::Dataset;
use crate::utils::pretty_table;

pub fn handle(ds: &Dataset) -> Result<()> {
    let rows = issues(ds);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn issues(ds: &Dataset) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for order in &ds.orders {
        if let Some(ship) = order.ship_date {
            if ship < order.order_date {
                rows.push(vec![
                    "ship_before_order".into(),
                    format!(
                        "{} shipped {} before order date {}",
                        order.order_id, ship, order.order_date
                    ),
                ]);
            }
        }
        if order.sales < Decimal::ZERO {
            rows.push(vec![
                "negative_sales".into(),
                format!("{} sales {}", order.order_id, order.sales),
            ]);
        }
        if order.quantity < 1 {
            rows.push(vec!["zero_quantity".into(), order.order_id.clone()]);
        }
    }

    // Return records pointing at order ids the orders file never mentions
    let order_ids: HashSet<&str> = ds.orders.iter().map(|o| o.order_id.as_str()).collect();
    for id in &ds.returned_ids {
        if !order_ids.contains(id.as_str()) {
            rows.push(vec!["return_unknown_order".into(), id.clone()]);
        }
    }
    rows
}
