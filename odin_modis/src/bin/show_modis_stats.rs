/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odin_modis::stats::{ColumnReport, ColumnStats, FireConfidenceCounts};
use odin_modis::table_io::read_table_file;

#[derive(Parser, Debug)]
#[command(version, about = "show summary statistics of harmonized MODIS tables")]
pub struct Args {
    /// the table is a fire mask - show counts per confidence class
    #[arg(long)]
    pub fire: bool,

    /// report names (file stem if not given)
    #[arg(short,long)]
    pub name: Option<String>,

    #[arg(num_args=1..)]
    pub tables: Vec<String>,
}

fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();

    for filename in &args.tables {
        let table = read_table_file( filename)?;
        let values = table.values();

        if args.fire {
            println!("{}", FireConfidenceCounts::of( values.iter()));
        } else {
            let stem = std::path::Path::new(filename).file_stem().and_then( |s| s.to_str()).unwrap_or( filename.as_str());
            let name = args.name.as_deref().unwrap_or( stem);
            println!("{}", ColumnReport { name, stats: ColumnStats::of( values.iter()) });
        }
    }

    Ok(())
}
