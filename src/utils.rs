// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::kpi::Metric;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Compact display for card values: 1234567 -> "1.2M", 5400 -> "5.4K".
pub fn fmt_compact(value: Decimal, decimals: u32) -> String {
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);
    let abs = value.abs();
    if abs >= million {
        format!("{}M", (value / million).round_dp(decimals))
    } else if abs >= thousand {
        format!("{}K", (value / thousand).round_dp(decimals))
    } else {
        format!("{}", value.round_dp(decimals))
    }
}

pub fn fmt_metric(metric: Metric, value: Decimal) -> String {
    match metric {
        Metric::Quantity => format!("{}", value),
        Metric::Margin => format!("{:.1}%", value),
        Metric::Sales | Metric::Profit => format!("{:.2}", value),
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
