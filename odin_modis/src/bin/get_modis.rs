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
use tracing::info;
use tracing_subscriber::EnvFilter;

use odin_modis::{load_config, ModisConfig, ModisService, ProductSpec, Stage};
use odin_modis::catalog::table_path;
use odin_modis::table_io::{dates_path, write_dates_file, write_table_file};

#[derive(Parser, Debug)]
#[command(version, about = "retrieve MODIS product time series from the ORNL DAAC subset service")]
pub struct Args {
    #[arg(short,long, default_value = "modis_nilivara.ron")]
    pub config: String,

    /// product keys to retrieve (all configured products if none given)
    pub products: Vec<String>,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config: ModisConfig = load_config( &args.config)?;

    let specs: Vec<ProductSpec> = if args.products.is_empty() {
        config.products.clone()
    } else {
        args.products.iter()
            .map( |key| config.product(key).cloned().ok_or_else( || anyhow::anyhow!("unknown product: {key}")))
            .collect::<Result<_>>()?
    };

    let service = ModisService::new( config.clone());

    for spec in &specs {
        let acquired = service.retrieve_band( spec).await?;
        let path = table_path( &config, spec, Stage::Procurement);

        write_table_file( &path, &acquired.table)?;
        write_dates_file( dates_path(&path), &acquired.requested)?;

        if acquired.n_missing() > 0 {
            println!("{}: {} of {} dates missing", spec.key, acquired.n_missing(), acquired.requested.len());
        }
        info!("saved {} rows of {} to {:?}", acquired.table.n_rows(), spec.key, path);
    }

    Ok(())
}
