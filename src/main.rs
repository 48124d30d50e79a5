// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use storelens::{cli, commands, dataset};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    };

    let data_dir = match matches.get_one::<String>("data") {
        Some(dir) => PathBuf::from(dir),
        None => dataset::default_data_dir()?,
    };
    let ds = dataset::Dataset::load(&data_dir)?;

    match name {
        "overview" => commands::overview::handle(&ds, sub)?,
        "trend" => commands::trend::handle(&ds, sub)?,
        "products" => commands::products::handle(&ds, sub)?,
        "geo" => commands::geo::handle(&ds, sub)?,
        "options" => commands::options::handle(&ds, sub)?,
        "export" => commands::export::handle(&ds, sub)?,
        "doctor" => commands::doctor::handle(&ds)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
