// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("storelens")
        .about("Retail sales KPIs, period-over-period comparison, and trend/product/geo analytics")
        .version(clap::crate_version!())
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("DIR")
                .global(true)
                .help("Data directory containing orders.csv and optional returns.csv"),
        )
        .subcommand(with_output_flags(with_filter_args(
            Command::new("overview")
                .about("Six KPI cards with change against the preceding period of equal length"),
        )))
        .subcommand(with_output_flags(with_filter_args(
            Command::new("trend")
                .about("Monthly series of a metric over the filtered rows")
                .arg(metric_arg())
                .arg(
                    Arg::new("moving-avg")
                        .long("moving-avg")
                        .action(ArgAction::SetTrue)
                        .help("Overlay a 3-month rolling mean"),
                ),
        )))
        .subcommand(with_output_flags(with_filter_args(
            Command::new("products")
                .about("Top products ranked by a metric")
                .arg(metric_arg())
                .arg(
                    Arg::new("top")
                        .long("top")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .default_value("10")
                        .help("How many products to list"),
                ),
        )))
        .subcommand(with_output_flags(with_filter_args(
            Command::new("geo")
                .about("State-level totals of a metric, with USPS state codes")
                .arg(metric_arg()),
        )))
        .subcommand(with_output_flags(Command::new("options").about(
            "Distinct values per filter dimension and the dataset's date bounds",
        )))
        .subcommand(
            with_filter_args(Command::new("export").about("Write the filtered rows to a file"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("PATH")
                        .required(true)
                        .help("Output file path"),
                ),
        )
        .subcommand(Command::new("doctor").about("Report dataset hygiene issues"))
}

fn metric_arg() -> Arg {
    Arg::new("metric")
        .long("metric")
        .value_parser(["sales", "profit", "quantity", "margin"])
        .default_value("sales")
        .help("Which metric to aggregate")
}

fn with_filter_args(cmd: Command) -> Command {
    cmd.arg(dimension_arg("region", "Restrict to a region (repeatable)"))
        .arg(dimension_arg("state", "Restrict to a state (repeatable)"))
        .arg(dimension_arg("category", "Restrict to a category (repeatable)"))
        .arg(dimension_arg(
            "subcategory",
            "Restrict to a sub-category (repeatable)",
        ))
        .arg(dimension_arg(
            "segment",
            "Restrict to a customer segment (repeatable)",
        ))
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("DATE")
                .help("Inclusive start of the order-date range (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("DATE")
                .help("Inclusive end of the order-date range (YYYY-MM-DD)"),
        )
}

fn dimension_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("NAME")
        .action(ArgAction::Append)
        .help(help)
}

fn with_output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON value per line"),
    )
}
