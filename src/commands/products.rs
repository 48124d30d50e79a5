// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::filter::{self, FilterSelection};
use crate::kpi::{Metric, MetricAccum};
use crate::models::Order;
use crate::utils::{fmt_metric, maybe_print_json, pretty_table};

#[derive(Debug, Clone, Serialize)]
pub struct ProductRank {
    pub product: String,
    pub value: Decimal,
}

pub fn handle(ds: &Dataset, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let metric = Metric::parse(m.get_one::<String>("metric").unwrap())?;
    let top: usize = *m.get_one::<usize>("top").unwrap();
    let sel = FilterSelection::from_matches(m)?;

    let rows = filter::apply(&ds.orders, &sel);
    let ranking = top_products(&rows, metric, top);

    if !maybe_print_json(json_flag, jsonl_flag, &ranking)? {
        let data = ranking
            .iter()
            .map(|r| vec![r.product.clone(), fmt_metric(metric, r.value)])
            .collect();
        println!("{}", pretty_table(&["Product", metric.label()], data));
    }
    Ok(())
}

/// Descending by metric value, name-ascending on ties, bounded to `n`.
pub fn top_products(rows: &[&Order], metric: Metric, n: usize) -> Vec<ProductRank> {
    let mut agg: HashMap<&str, MetricAccum> = HashMap::new();
    for order in rows {
        agg.entry(order.product_name.as_str())
            .or_default()
            .add(order);
    }
    let mut ranking: Vec<ProductRank> = agg
        .into_iter()
        .map(|(product, acc)| ProductRank {
            product: product.to_string(),
            value: acc.value(metric),
        })
        .collect();
    ranking.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.product.cmp(&b.product)));
    ranking.truncate(n);
    ranking
}
