// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::dataset::Dataset;
use crate::filter::{self, FilterSelection};
use crate::models::Order;

pub fn handle(ds: &Dataset, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap().trim();
    let sel = FilterSelection::from_matches(m)?;

    let rows = filter::apply(&ds.orders, &sel);

    match fmt.as_str() {
        "csv" => write_csv(&rows, out)?,
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} rows to {}", rows.len(), out);
    Ok(())
}

fn write_csv(rows: &[&Order], out: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Write {}", out))?;
    wtr.write_record([
        "Order ID",
        "Order Date",
        "Ship Date",
        "Sales",
        "Profit",
        "Quantity",
        "Product Name",
        "Category",
        "Sub-Category",
        "Segment",
        "Region",
        "State",
        "Returned",
    ])?;
    for order in rows {
        wtr.write_record([
            order.order_id.clone(),
            order.order_date.to_string(),
            order.ship_date.map(|d| d.to_string()).unwrap_or_default(),
            order.sales.to_string(),
            order.profit.to_string(),
            order.quantity.to_string(),
            order.product_name.clone(),
            order.category.clone(),
            order.sub_category.clone(),
            order.segment.clone(),
            order.region.clone(),
            order.state.clone(),
            if order.returned { "Yes" } else { "No" }.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
