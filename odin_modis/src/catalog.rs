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

use std::path::PathBuf;
use serde::{Serialize,Deserialize};

use crate::{ModisConfig, ReductionStatistic, TemporalInterval, grid};

/// a single MODIS product band we retrieve and harmonize.
/// The `key` is our short name for the series (e.g. "lst" or "nir") and is used for file and column names
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ProductSpec {
    pub key: String,
    /// MODIS product code (e.g. "MOD11A2")
    pub product: String,
    /// band name as used by the ORNL subset service (e.g. "LST_Day_1km")
    pub band: String,
    pub interval: TemporalInterval,
    /// pixel width in km
    pub resolution_km: f64,
    pub statistic: ReductionStatistic,
}

impl ProductSpec {
    pub fn new (key: &str, product: &str, band: &str, interval: TemporalInterval, resolution_km: f64, statistic: ReductionStatistic)->Self {
        ProductSpec {
            key: key.to_string(),
            product: product.to_string(),
            band: band.to_string(),
            interval, resolution_km, statistic
        }
    }

    /// grid side length of a window extending `extent_km` from the center in each direction
    pub fn side_length (&self, extent_km: f64)->usize {
        grid::side_length( extent_km, self.resolution_km)
    }
}

/// the products we use for fire risk analysis: land surface temperature, NIR/SWIR surface
/// reflectance (for moisture index), enhanced vegetation index and the fire mask
pub fn default_catalog ()->Vec<ProductSpec> {
    use ReductionStatistic::*;
    use TemporalInterval::*;

    vec![
        ProductSpec::new( "lst",  "MOD11A2", "LST_Day_1km",      Days8,  1.0,  Mean),
        ProductSpec::new( "nir",  "MOD09A1", "sur_refl_b02",     Days8,  0.5,  Mean),
        ProductSpec::new( "swir", "MOD09A1", "sur_refl_b06",     Days8,  0.5,  Mean),
        ProductSpec::new( "evi",  "MOD13Q1", "250m_16_days_EVI", Days16, 0.25, Mean),
        ProductSpec::new( "fire", "MOD14A2", "FireMask",         Days8,  1.0,  Max),
    ]
}

/// processing stage of a persisted table
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Stage {
    Procurement,
    Aggregation
}

impl Stage {
    pub fn dir_name (&self)->&'static str {
        match self {
            Stage::Procurement => "procurement",
            Stage::Aggregation => "aggregation"
        }
    }
}

/// `{data_dir}/{stage}/{key}/{product}_{band}_{start}-{end}_{description}.csv`
pub fn table_path (config: &ModisConfig, spec: &ProductSpec, stage: Stage)->PathBuf {
    let fname = format!("{}_{}_{}-{}_{}.csv", spec.product, spec.band, config.start_year, config.end_year, config.description);
    config.data_dir.join( stage.dir_name()).join( &spec.key).join( fname)
}
