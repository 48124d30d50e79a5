// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One order line as loaded from the orders file. Immutable after load;
/// `returned` is derived from the returns file while loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub ship_date: Option<NaiveDate>,
    pub sales: Decimal,
    pub profit: Decimal,
    pub quantity: u32,
    pub product_name: String,
    pub category: String,
    pub sub_category: String,
    pub segment: String,
    pub region: String,
    pub state: String,
    pub returned: bool,
}
