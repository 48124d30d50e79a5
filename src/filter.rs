// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{Duration, NaiveDate};
use clap::ArgMatches;

use crate::models::Order;
use crate::utils::parse_date;

/// User-selected dimension values and date range. Empty sets and an unset
/// range place no restriction.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub regions: Vec<String>,
    pub states: Vec<String>,
    pub categories: Vec<String>,
    pub sub_categories: Vec<String>,
    pub segments: Vec<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl FilterSelection {
    pub fn from_matches(m: &ArgMatches) -> Result<FilterSelection> {
        let from = m
            .get_one::<String>("from")
            .map(|s| parse_date(s))
            .transpose()?;
        let to = m
            .get_one::<String>("to")
            .map(|s| parse_date(s))
            .transpose()?;
        let date_range = match (from, to) {
            (None, None) => None,
            (Some(f), Some(t)) => {
                if f > t {
                    return Err(anyhow!("Invalid date range: {} is after {}", f, t));
                }
                Some((f, t))
            }
            _ => {
                return Err(anyhow!("Both --from and --to are required to filter by date"));
            }
        };

        Ok(FilterSelection {
            regions: collect_values(m, "region"),
            states: collect_values(m, "state"),
            categories: collect_values(m, "category"),
            sub_categories: collect_values(m, "subcategory"),
            segments: collect_values(m, "segment"),
            date_range,
        })
    }

    pub fn with_date_range(&self, from: NaiveDate, to: NaiveDate) -> FilterSelection {
        let mut sel = self.clone();
        sel.date_range = Some((from, to));
        sel
    }

    pub fn matches(&self, order: &Order) -> bool {
        if let Some((from, to)) = self.date_range {
            if order.order_date < from || order.order_date > to {
                return false;
            }
        }
        keeps(&self.regions, &order.region)
            && keeps(&self.states, &order.state)
            && keeps(&self.categories, &order.category)
            && keeps(&self.sub_categories, &order.sub_category)
            && keeps(&self.segments, &order.segment)
    }
}

fn keeps(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|v| v == value)
}

fn collect_values(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}

/// Rows satisfying every non-empty constraint; an empty result is a normal
/// state, not an error.
pub fn apply<'a>(orders: &'a [Order], sel: &FilterSelection) -> Vec<&'a Order> {
    orders.iter().filter(|o| sel.matches(o)).collect()
}

/// The immediately preceding window of equal length, not overlapping the
/// current one: for [start, end] with D = end - start, [start-D-1, start-1].
pub fn prior_window(from: NaiveDate, to: NaiveDate) -> (NaiveDate, NaiveDate) {
    let span = (to - from).num_days();
    (from - Duration::days(span + 1), from - Duration::days(1))
}
