// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::dataset::Dataset;
use crate::filter::{self, FilterSelection};
use crate::kpi::{Metric, MetricAccum};
use crate::models::Order;
use crate::utils::{fmt_metric, maybe_print_json, pretty_table};

/// USPS two-letter codes, keyed by full state name as it appears in the
/// dataset. Choropleth renderers want the code, not the name.
static STATE_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Alabama", "AL"),
        ("Alaska", "AK"),
        ("Arizona", "AZ"),
        ("Arkansas", "AR"),
        ("California", "CA"),
        ("Colorado", "CO"),
        ("Connecticut", "CT"),
        ("Delaware", "DE"),
        ("District of Columbia", "DC"),
        ("Florida", "FL"),
        ("Georgia", "GA"),
        ("Hawaii", "HI"),
        ("Idaho", "ID"),
        ("Illinois", "IL"),
        ("Indiana", "IN"),
        ("Iowa", "IA"),
        ("Kansas", "KS"),
        ("Kentucky", "KY"),
        ("Louisiana", "LA"),
        ("Maine", "ME"),
        ("Maryland", "MD"),
        ("Massachusetts", "MA"),
        ("Michigan", "MI"),
        ("Minnesota", "MN"),
        ("Mississippi", "MS"),
        ("Missouri", "MO"),
        ("Montana", "MT"),
        ("Nebraska", "NE"),
        ("Nevada", "NV"),
        ("New Hampshire", "NH"),
        ("New Jersey", "NJ"),
        ("New Mexico", "NM"),
        ("New York", "NY"),
        ("North Carolina", "NC"),
        ("North Dakota", "ND"),
        ("Ohio", "OH"),
        ("Oklahoma", "OK"),
        ("Oregon", "OR"),
        ("Pennsylvania", "PA"),
        ("Rhode Island", "RI"),
        ("South Carolina", "SC"),
        ("South Dakota", "SD"),
        ("Tennessee", "TN"),
        ("Texas", "TX"),
        ("Utah", "UT"),
        ("Vermont", "VT"),
        ("Virginia", "VA"),
        ("Washington", "WA"),
        ("West Virginia", "WV"),
        ("Wisconsin", "WI"),
        ("Wyoming", "WY"),
    ])
});

#[derive(Debug, Clone, Serialize)]
pub struct StateTotal {
    pub state: String,
    pub code: String,
    pub value: Decimal,
}

pub fn handle(ds: &Dataset, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let metric = Metric::parse(m.get_one::<String>("metric").unwrap())?;
    let sel = FilterSelection::from_matches(m)?;

    let rows = filter::apply(&ds.orders, &sel);
    let totals = by_state(&rows, metric);

    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let data = totals
            .iter()
            .map(|t| {
                vec![
                    t.state.clone(),
                    t.code.clone(),
                    fmt_metric(metric, t.value),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["State", "Code", metric.label()], data)
        );
    }
    Ok(())
}

/// Per-state totals, descending by value. States without a code mapping are
/// listed with an empty code rather than dropped.
pub fn by_state(rows: &[&Order], metric: Metric) -> Vec<StateTotal> {
    let mut agg: BTreeMap<&str, MetricAccum> = BTreeMap::new();
    for order in rows {
        agg.entry(order.state.as_str()).or_default().add(order);
    }
    let mut totals: Vec<StateTotal> = agg
        .into_iter()
        .map(|(state, acc)| StateTotal {
            state: state.to_string(),
            code: STATE_CODES.get(state).copied().unwrap_or("").to_string(),
            value: acc.value(metric),
        })
        .collect();
    totals.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.state.cmp(&b.state)));
    totals
}
