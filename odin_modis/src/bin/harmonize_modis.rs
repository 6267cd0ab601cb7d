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

use std::fs::{self, File};
use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use odin_modis::{load_config, ModisConfig, PixelSeriesTable, ProductSeries, Stage};
use odin_modis::catalog::table_path;
use odin_modis::features::{ndmi_series, FeatureTable};
use odin_modis::table_io::{dates_path, read_dates_file, read_table_file, write_table_file};

#[derive(Parser, Debug)]
#[command(version, about = "harmonize retrieved MODIS tables to a common interval and grid")]
pub struct Args {
    #[arg(short,long, default_value = "modis_nilivara.ron")]
    pub config: String,

    /// also write the long format feature table of all harmonized products
    #[arg(short,long)]
    pub features: bool,
}

fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config: ModisConfig = load_config( &args.config)?;

    let mut products: Vec<ProductSeries> = Vec::with_capacity( config.products.len());
    for spec in &config.products {
        let path = table_path( &config, spec, Stage::Procurement);
        let table = read_table_file( &path)?;

        let dates_file = dates_path( &path);
        let series = if dates_file.is_file() {
            ProductSeries::new( spec.clone(), table, read_dates_file( &dates_file)?)
        } else {
            ProductSeries::from_table( spec.clone(), table)
        };
        products.push( series);
    }

    // NDMI is derived at the native reflectance grid and harmonized like any other product
    let nir = products.iter().find( |p| p.spec.key == "nir");
    let swir = products.iter().find( |p| p.spec.key == "swir");
    let ndmi = match (nir, swir) {
        (Some(nir), Some(swir)) => Some( ndmi_series( nir, swir)),
        _ => None
    };
    match ndmi {
        Some(Ok(ndmi)) => products.push( ndmi),
        Some(Err(e)) => warn!("no NDMI: {e}"),
        None => {}
    }

    let harmonized = config.harmonizer().harmonize( products)?;

    for p in &harmonized {
        let path = table_path( &config, &p.spec, Stage::Aggregation);
        write_table_file( &path, &p.table)?;
        info!("saved harmonized {} ({} rows, {} pixels) to {:?}", p.spec.key, p.table.n_rows(), p.table.n_pixels(), path);
    }

    let columns: Vec<(&str, &PixelSeriesTable)> = harmonized.iter().map( |p| (p.spec.key.as_str(), &p.table)).collect();

    if args.features {
        match FeatureTable::from_products( &columns) {
            Ok(features) => {
                let dir = config.data_dir.join( Stage::Aggregation.dir_name());
                fs::create_dir_all( &dir)?;
                let path = dir.join( format!("features_{}-{}_{}.csv", config.start_year, config.end_year, config.description));
                features.write_csv( File::create( &path)?)?;
                info!("saved {} feature rows to {:?}", features.n_rows(), path);
            }
            Err(e) => warn!("no feature table: {e}")
        }
    }

    Ok(())
}
