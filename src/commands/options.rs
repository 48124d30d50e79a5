// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::utils::{maybe_print_json, pretty_table};

/// The feed for filter widgets: distinct values per dimension, plus the
/// dataset's order-date bounds for the date pickers.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionOptions {
    pub regions: Vec<String>,
    pub states: Vec<String>,
    pub categories: Vec<String>,
    pub sub_categories: Vec<String>,
    pub segments: Vec<String>,
    pub min_order_date: Option<NaiveDate>,
    pub max_order_date: Option<NaiveDate>,
}

pub fn handle(ds: &Dataset, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let opts = collect(ds);
    if !maybe_print_json(json_flag, jsonl_flag, &opts)? {
        let mut data = Vec::new();
        push_dimension(&mut data, "Region", &opts.regions);
        push_dimension(&mut data, "State", &opts.states);
        push_dimension(&mut data, "Category", &opts.categories);
        push_dimension(&mut data, "Sub-Category", &opts.sub_categories);
        push_dimension(&mut data, "Segment", &opts.segments);
        if let (Some(min), Some(max)) = (opts.min_order_date, opts.max_order_date) {
            data.push(vec!["Order Date".into(), format!("{} .. {}", min, max)]);
        }
        println!("{}", pretty_table(&["Dimension", "Value"], data));
    }
    Ok(())
}

fn push_dimension(data: &mut Vec<Vec<String>>, name: &str, values: &[String]) {
    for v in values {
        data.push(vec![name.to_string(), v.clone()]);
    }
}

pub fn collect(ds: &Dataset) -> DimensionOptions {
    let mut regions = BTreeSet::new();
    let mut states = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut sub_categories = BTreeSet::new();
    let mut segments = BTreeSet::new();
    for order in &ds.orders {
        regions.insert(order.region.clone());
        states.insert(order.state.clone());
        categories.insert(order.category.clone());
        sub_categories.insert(order.sub_category.clone());
        segments.insert(order.segment.clone());
    }
    let bounds = ds.date_bounds();
    DimensionOptions {
        regions: regions.into_iter().collect(),
        states: states.into_iter().collect(),
        categories: categories.into_iter().collect(),
        sub_categories: sub_categories.into_iter().collect(),
        segments: segments.into_iter().collect(),
        min_order_date: bounds.map(|(min, _)| min),
        max_order_date: bounds.map(|(_, max)| max),
    }
}
