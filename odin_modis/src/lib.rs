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

//! odin_modis retrieves MODIS land product time series (land surface temperature, surface reflectance,
//! vegetation index and fire mask) for a square window around a location from the ORNL DAAC web service,
//! and harmonizes them onto a common temporal interval and spatial grid so that they can be combined
//! into feature tables for fire risk analysis.
//!
//! The processing chain for each product is
//! ```text
//!   ModisService::retrieve_band  ->  temporal::{halve,double}  ->  spatial::reduce_resolution  ->  FeatureTable
//! ```
//! with [`Harmonizer`] orchestrating the resampling of a whole product set.

use std::{env, fs, path::{Path,PathBuf}};
use serde::{Serialize,Deserialize};

pub mod errors;
pub use errors::{OdinModisError, Result};

pub mod grid;

mod table;
pub use table::PixelSeriesTable;

pub mod temporal;
pub use temporal::{ReductionStatistic, TemporalInterval, TemporalSteps};

pub mod spatial;

pub mod harmonize;
pub use harmonize::{Harmonizer, HarmonizedProduct, ProductSeries};

pub mod catalog;
pub use catalog::{ProductSpec, Stage};

pub mod modis_service;
pub use modis_service::{ModisService, ModisDate, AcquiredSeries};

pub mod table_io;
pub mod features;
pub mod stats;
pub mod evaluation;

const CRATE_NAME: &str = "odin_modis";
const CONFIGS: &str = "configs";

/// center of the observation window
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// the configuration of a retrieval/harmonization run: where, when and which products
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ModisConfig {
    /// base URL of the ORNL DAAC MODIS web service (e.g. "https://modis.ornl.gov/rst/api/v1/")
    pub url: String,

    pub location: Location,

    /// short name of the location, used in file names
    pub description: String,

    /// km above/below and left/right of the center
    pub extent_km: f64,

    pub start_year: i32,
    pub end_year: i32,

    /// calendar months outside of the observation season
    #[serde(default="default_excluded_months")]
    pub excluded_months: Vec<u32>,

    /// the common interval of harmonized products
    pub target_interval: TemporalInterval,

    /// root dir for procurement and aggregation tables
    pub data_dir: PathBuf,

    #[serde(default="catalog::default_catalog")]
    pub products: Vec<ProductSpec>,
}

fn default_excluded_months ()->Vec<u32> { vec![1, 11, 12] }

impl ModisConfig {
    pub fn product (&self, key: &str)->Option<&ProductSpec> {
        self.products.iter().find( |p| p.key == key)
    }

    /// grid side length of `spec` for our window extent
    pub fn side_length (&self, spec: &ProductSpec)->usize {
        spec.side_length( self.extent_km)
    }

    pub fn harmonizer (&self)->Harmonizer {
        Harmonizer::new( self.target_interval)
    }
}

/// load a RON config. If `filename` is not an existing file it is looked up in
/// `$ODIN_HOME/configs/odin_modis/`, `~/.odin/configs/odin_modis/` and the crate's own `configs/` dir
pub fn load_config<C> (filename: &str)->Result<C> where C: for<'a> Deserialize<'a> {
    let path = find_config_file( filename).ok_or_else( || errors::config_error( format!("config file not found: {filename}")))?;
    let contents = fs::read_to_string( &path)?;
    Ok( ron::from_str( &contents)? )
}

pub fn find_config_file (filename: &str)->Option<PathBuf> {
    let path = Path::new(filename);
    if path.is_file() { return Some(path.to_path_buf()) }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(odin_home) = env::var("ODIN_HOME") {
        candidates.push( Path::new(&odin_home).join(CONFIGS).join(CRATE_NAME).join(filename));
    }
    if let Ok(usr_home) = env::var("HOME") {
        candidates.push( Path::new(&usr_home).join(".odin").join(CONFIGS).join(CRATE_NAME).join(filename));
    }
    candidates.push( Path::new( env!("CARGO_MANIFEST_DIR")).join(CONFIGS).join(filename));

    candidates.into_iter().find( |p| p.is_file())
}
