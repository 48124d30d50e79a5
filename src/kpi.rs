// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::models::Order;

/// The six summary metrics over a row subset. A pure function of its input;
/// every division guards its denominator, so a degenerate or empty period
/// yields zeros rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KpiSnapshot {
    pub total_sales: Decimal,
    pub avg_order_value: Decimal,
    pub total_orders: u64,
    pub total_profit: Decimal,
    pub profit_margin: Decimal,
    pub avg_shipment_days: Decimal,
}

pub fn snapshot(rows: &[&Order]) -> KpiSnapshot {
    let mut total_sales = Decimal::ZERO;
    let mut total_profit = Decimal::ZERO;
    let mut order_ids: HashSet<&str> = HashSet::new();
    let mut ship_days = 0i64;
    let mut shipped = 0i64;

    for order in rows {
        total_sales += order.sales;
        total_profit += order.profit;
        order_ids.insert(order.order_id.as_str());
        if let Some(ship) = order.ship_date {
            ship_days += (ship - order.order_date).num_days();
            shipped += 1;
        }
    }

    let total_orders = order_ids.len() as u64;
    let avg_order_value = if total_orders == 0 {
        Decimal::ZERO
    } else {
        total_sales / Decimal::from(total_orders)
    };
    let profit_margin = if total_sales.is_zero() {
        Decimal::ZERO
    } else {
        total_profit / total_sales * Decimal::ONE_HUNDRED
    };
    let avg_shipment_days = if shipped == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(ship_days) / Decimal::from(shipped)
    };

    KpiSnapshot {
        total_sales,
        avg_order_value,
        total_orders,
        total_profit,
        profit_margin,
        avg_shipment_days,
    }
}

/// Change against the prior period. A zero prior baseline is marked rather
/// than reported as a percentage, so renderers can show a neutral banner
/// instead of an infinity artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "pct", rename_all = "snake_case")]
pub enum Delta {
    NoChange,
    New,
    Pct(Decimal),
}

impl Delta {
    pub fn label(&self) -> String {
        match self {
            Delta::NoChange => "—".to_string(),
            Delta::New => "new".to_string(),
            Delta::Pct(p) if p.is_zero() => "➖ 0.0%".to_string(),
            Delta::Pct(p) if p.is_sign_positive() => format!("▲ {:.1}%", p),
            Delta::Pct(p) => format!("▼ {:.1}%", p.abs()),
        }
    }
}

pub fn delta(current: Decimal, prior: Decimal) -> Delta {
    if prior.is_zero() {
        if current.is_zero() {
            Delta::NoChange
        } else {
            Delta::New
        }
    } else {
        Delta::Pct((current - prior) / prior.abs() * Decimal::ONE_HUNDRED)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Currency,
    Count,
    Percent,
    Days,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiComparison {
    pub name: &'static str,
    pub unit: Unit,
    pub current: Decimal,
    pub prior: Decimal,
    pub delta: Delta,
}

/// One comparison row per KPI card, in display order.
pub fn compare(current: &KpiSnapshot, prior: &KpiSnapshot) -> Vec<KpiComparison> {
    let cards: [(&'static str, Unit, Decimal, Decimal); 6] = [
        (
            "Total Sales Revenue",
            Unit::Currency,
            current.total_sales,
            prior.total_sales,
        ),
        (
            "Average Order Value",
            Unit::Currency,
            current.avg_order_value,
            prior.avg_order_value,
        ),
        (
            "Total Orders Placed",
            Unit::Count,
            Decimal::from(current.total_orders),
            Decimal::from(prior.total_orders),
        ),
        (
            "Total Profit",
            Unit::Currency,
            current.total_profit,
            prior.total_profit,
        ),
        (
            "Profit Margin (%)",
            Unit::Percent,
            current.profit_margin,
            prior.profit_margin,
        ),
        (
            "Average Shipment Time",
            Unit::Days,
            current.avg_shipment_days,
            prior.avg_shipment_days,
        ),
    ];
    cards
        .into_iter()
        .map(|(name, unit, c, p)| KpiComparison {
            name,
            unit,
            current: c,
            prior: p,
            delta: delta(c, p),
        })
        .collect()
}

/// The value a trend/products/geo aggregation sums per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Sales,
    Profit,
    Quantity,
    Margin,
}

impl Metric {
    pub fn parse(s: &str) -> Result<Metric> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(Metric::Sales),
            "profit" => Ok(Metric::Profit),
            "quantity" => Ok(Metric::Quantity),
            "margin" => Ok(Metric::Margin),
            other => Err(anyhow!(
                "Unknown metric '{}' (use sales|profit|quantity|margin)",
                other
            )),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Profit => "Profit",
            Metric::Quantity => "Quantity",
            Metric::Margin => "Margin Rate",
        }
    }
}

/// Running sums backing a single bucket of a grouped aggregation. Margin is
/// derived from the sums, not averaged across rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricAccum {
    pub sales: Decimal,
    pub profit: Decimal,
    pub quantity: u64,
}

impl MetricAccum {
    pub fn add(&mut self, order: &Order) {
        self.sales += order.sales;
        self.profit += order.profit;
        self.quantity += u64::from(order.quantity);
    }

    pub fn value(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::Sales => self.sales,
            Metric::Profit => self.profit,
            Metric::Quantity => Decimal::from(self.quantity),
            Metric::Margin => {
                if self.sales.is_zero() {
                    Decimal::ZERO
                } else {
                    self.profit / self.sales * Decimal::ONE_HUNDRED
                }
            }
        }
    }
}
