// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Order;

pub const ORDERS_FILE: &str = "orders.csv";
pub const RETURNS_FILE: &str = "returns.csv";

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Storelens", "storelens"));

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.to_path_buf())
}

/// A load failure is terminal: no partial dataset is ever produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{file}: missing required column '{column}'")]
    MissingColumn {
        file: &'static str,
        column: &'static str,
    },
    #[error("{file} row {row}: missing value in column '{column}'")]
    MissingField {
        file: &'static str,
        row: usize,
        column: &'static str,
    },
    #[error("{file} row {row}: invalid date '{value}' in column '{column}', expected YYYY-MM-DD")]
    BadDate {
        file: &'static str,
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("{file} row {row}: invalid number '{value}' in column '{column}'")]
    BadNumber {
        file: &'static str,
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("{file} row {row}: invalid returned flag '{value}', expected Yes or No")]
    BadFlag {
        file: &'static str,
        row: usize,
        value: String,
    },
}

/// The full order set, materialized in memory once per invocation.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub orders: Vec<Order>,
    /// Order ids flagged as returned in the returns file, matched or not.
    pub returned_ids: BTreeSet<String>,
}

impl Dataset {
    /// Load `orders.csv` (required) and `returns.csv` (optional) from `dir`.
    pub fn load(dir: &Path) -> Result<Dataset> {
        let returns_path = dir.join(RETURNS_FILE);
        let returned_ids = if returns_path.exists() {
            load_returns(&returns_path)?
        } else {
            BTreeSet::new()
        };

        let mut orders = load_orders(&dir.join(ORDERS_FILE))?;
        for order in &mut orders {
            order.returned = returned_ids.contains(&order.order_id);
        }
        Ok(Dataset {
            orders,
            returned_ids,
        })
    }

    /// Earliest and latest order date, `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.orders.iter().map(|o| o.order_date).min()?;
        let max = self.orders.iter().map(|o| o.order_date).max()?;
        Some((min, max))
    }
}

struct OrderColumns {
    order_id: usize,
    order_date: usize,
    ship_date: usize,
    sales: usize,
    profit: usize,
    quantity: usize,
    product_name: usize,
    category: usize,
    sub_category: usize,
    segment: usize,
    region: usize,
    state: usize,
}

fn column(headers: &StringRecord, file: &'static str, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| LoadError::MissingColumn { file, column: name }.into())
}

fn field<'r>(rec: &'r StringRecord, idx: usize) -> &'r str {
    rec.get(idx).unwrap_or("").trim()
}

fn parse_record_date(
    file: &'static str,
    row: usize,
    col: &'static str,
    value: &str,
) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        LoadError::BadDate {
            file,
            row,
            column: col,
            value: value.to_string(),
        }
        .into()
    })
}

fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open orders CSV {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let cols = OrderColumns {
        order_id: column(&headers, ORDERS_FILE, "Order ID")?,
        order_date: column(&headers, ORDERS_FILE, "Order Date")?,
        ship_date: column(&headers, ORDERS_FILE, "Ship Date")?,
        sales: column(&headers, ORDERS_FILE, "Sales")?,
        profit: column(&headers, ORDERS_FILE, "Profit")?,
        quantity: column(&headers, ORDERS_FILE, "Quantity")?,
        product_name: column(&headers, ORDERS_FILE, "Product Name")?,
        category: column(&headers, ORDERS_FILE, "Category")?,
        sub_category: column(&headers, ORDERS_FILE, "Sub-Category")?,
        segment: column(&headers, ORDERS_FILE, "Segment")?,
        region: column(&headers, ORDERS_FILE, "Region")?,
        state: column(&headers, ORDERS_FILE, "State")?,
    };

    let mut orders = Vec::new();
    // Row numbers are 1-based with the header on row 1.
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2;

        let order_id = field(&rec, cols.order_id).to_string();
        if order_id.is_empty() {
            return Err(LoadError::MissingField {
                file: ORDERS_FILE,
                row,
                column: "Order ID",
            }
            .into());
        }

        let order_date =
            parse_record_date(ORDERS_FILE, row, "Order Date", field(&rec, cols.order_date))?;
        // An order not yet shipped has an empty ship date.
        let ship_raw = field(&rec, cols.ship_date);
        let ship_date = if ship_raw.is_empty() {
            None
        } else {
            Some(parse_record_date(ORDERS_FILE, row, "Ship Date", ship_raw)?)
        };

        let sales = parse_record_decimal(row, "Sales", field(&rec, cols.sales))?;
        let profit = parse_record_decimal(row, "Profit", field(&rec, cols.profit))?;
        let quantity_raw = field(&rec, cols.quantity);
        let quantity: u32 = quantity_raw.parse().map_err(|_| LoadError::BadNumber {
            file: ORDERS_FILE,
            row,
            column: "Quantity",
            value: quantity_raw.to_string(),
        })?;

        orders.push(Order {
            order_id,
            order_date,
            ship_date,
            sales,
            profit,
            quantity,
            product_name: field(&rec, cols.product_name).to_string(),
            category: field(&rec, cols.category).to_string(),
            sub_category: field(&rec, cols.sub_category).to_string(),
            segment: field(&rec, cols.segment).to_string(),
            region: field(&rec, cols.region).to_string(),
            state: field(&rec, cols.state).to_string(),
            returned: false,
        });
    }
    Ok(orders)
}

fn parse_record_decimal(row: usize, col: &'static str, value: &str) -> Result<Decimal> {
    value.parse::<Decimal>().map_err(|_| {
        LoadError::BadNumber {
            file: ORDERS_FILE,
            row,
            column: col,
            value: value.to_string(),
        }
        .into()
    })
}

fn load_returns(path: &Path) -> Result<BTreeSet<String>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open returns CSV {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let id_col = column(&headers, RETURNS_FILE, "Order ID")?;
    let flag_col = column(&headers, RETURNS_FILE, "Returned")?;

    let mut returned = BTreeSet::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2;
        let flag_raw = field(&rec, flag_col);
        let flag = match flag_raw.to_lowercase().as_str() {
            "yes" | "true" | "1" => true,
            "no" | "false" | "0" => false,
            _ => {
                return Err(LoadError::BadFlag {
                    file: RETURNS_FILE,
                    row,
                    value: flag_raw.to_string(),
                }
                .into());
            }
        };
        if flag {
            returned.insert(field(&rec, id_col).to_string());
        }
    }
    Ok(returned)
}
