// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::dataset::Dataset;
use crate::filter::{self, FilterSelection};
use crate::kpi::{self, KpiComparison, KpiSnapshot, Unit};
use crate::utils::{fmt_compact, maybe_print_json, pretty_table};

pub fn handle(ds: &Dataset, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let mut sel = FilterSelection::from_matches(m)?;
    // Without an explicit range the cards cover the whole dataset, so the
    // prior window falls entirely before the first order.
    if sel.date_range.is_none() {
        sel.date_range = ds.date_bounds();
    }

    let current = kpi::snapshot(&filter::apply(&ds.orders, &sel));
    let prior = match sel.date_range {
        Some((from, to)) => {
            let (prior_from, prior_to) = filter::prior_window(from, to);
            let prior_sel = sel.with_date_range(prior_from, prior_to);
            kpi::snapshot(&filter::apply(&ds.orders, &prior_sel))
        }
        None => KpiSnapshot::default(),
    };

    let cards = kpi::compare(&current, &prior);
    if !maybe_print_json(json_flag, jsonl_flag, &cards)? {
        let rows = cards.iter().map(card_row).collect();
        println!(
            "{}",
            pretty_table(&["KPI", "Current", "Prior", "Change"], rows)
        );
    }
    Ok(())
}

fn card_row(card: &KpiComparison) -> Vec<String> {
    vec![
        card.name.to_string(),
        card_value(card.unit, card.current),
        card_value(card.unit, card.prior),
        card.delta.label(),
    ]
}

fn card_value(unit: Unit, value: Decimal) -> String {
    match unit {
        Unit::Currency => format!("${}", fmt_compact(value, 1)),
        Unit::Count => fmt_compact(value, 1),
        Unit::Percent => format!("{:.1}%", value),
        Unit::Days => format!("{:.1} days", value),
    }
}
