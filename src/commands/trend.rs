// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::filter::{self, FilterSelection};
use crate::kpi::{Metric, MetricAccum};
use crate::models::Order;
use crate::utils::{fmt_metric, maybe_print_json, pretty_table};

pub const MOVING_AVG_WINDOW: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub month: String,
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_avg: Option<Decimal>,
}

pub fn handle(ds: &Dataset, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let moving = m.get_flag("moving-avg");
    let metric = Metric::parse(m.get_one::<String>("metric").unwrap())?;
    let sel = FilterSelection::from_matches(m)?;

    let rows = filter::apply(&ds.orders, &sel);
    let points = monthly_series(&rows, metric, moving.then_some(MOVING_AVG_WINDOW));

    if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        if moving {
            let data = points
                .iter()
                .map(|p| {
                    vec![
                        p.month.clone(),
                        fmt_metric(metric, p.value),
                        p.moving_avg
                            .map(|v| fmt_metric(metric, v))
                            .unwrap_or_default(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Month", metric.label(), "3-Mo Avg"], data)
            );
        } else {
            let data = points
                .iter()
                .map(|p| vec![p.month.clone(), fmt_metric(metric, p.value)])
                .collect();
            println!("{}", pretty_table(&["Month", metric.label()], data));
        }
    }
    Ok(())
}

/// Bucket rows by calendar month of order date, ascending; months with no
/// rows are absent. The rolling mean is trailing, so the first window-1
/// buckets carry no average.
pub fn monthly_series(rows: &[&Order], metric: Metric, window: Option<usize>) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<String, MetricAccum> = BTreeMap::new();
    for order in rows {
        buckets
            .entry(order.order_date.format("%Y-%m").to_string())
            .or_default()
            .add(order);
    }

    let mut points: Vec<TrendPoint> = buckets
        .into_iter()
        .map(|(month, acc)| TrendPoint {
            month,
            value: acc.value(metric),
            moving_avg: None,
        })
        .collect();

    if let Some(w) = window.filter(|w| *w > 0) {
        let values: Vec<Decimal> = points.iter().map(|p| p.value).collect();
        for (i, point) in points.iter_mut().enumerate() {
            if i + 1 >= w {
                let sum: Decimal = values[i + 1 - w..=i].iter().copied().sum();
                point.moving_avg = Some(sum / Decimal::from(w as u64));
            }
        }
    }
    points
}
