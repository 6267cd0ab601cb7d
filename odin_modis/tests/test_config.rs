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
#![allow(unused)]

use odin_modis::{load_config, ModisConfig, ReductionStatistic, TemporalInterval, Stage};
use odin_modis::catalog::{default_catalog, table_path};

#[test]
fn test_load_config () {
    let config: ModisConfig = load_config("modis_nilivara.ron").unwrap();

    assert_eq!( config.description, "nilivara");
    assert_eq!( config.target_interval, TemporalInterval::Days16);
    assert_eq!( config.excluded_months, vec![1, 11, 12]);
    assert_eq!( config.products, default_catalog());

    let nir = config.product("nir").unwrap();
    assert_eq!( config.side_length( nir), 401);
    assert_eq!( config.side_length( config.product("evi").unwrap()), 801);
    assert_eq!( config.product("fire").unwrap().statistic, ReductionStatistic::Max);
    assert!( config.product("ndvi").is_none());

    assert_eq!( config.harmonizer().target_interval(), TemporalInterval::Days16);

    let path = table_path( &config, nir, Stage::Procurement);
    assert_eq!( path.to_string_lossy(), "data/procurement/nir/MOD09A1_sur_refl_b02_2018-2022_nilivara.csv");
}

#[test]
fn test_config_defaults () {
    let ron = r#"(
        url: "https://modis.ornl.gov/rst/api/v1/",
        location: ( lat: 67.0, lon: 22.0 ),
        description: "test",
        extent_km: 10.0,
        start_year: 2020,
        end_year: 2020,
        target_interval: Days8,
        data_dir: "/tmp/modis",
    )"#;
    let config: ModisConfig = ron::from_str( ron).unwrap();

    assert_eq!( config.excluded_months, vec![1, 11, 12]);
    assert_eq!( config.products.len(), 5);
}

#[test]
fn test_invalid_statistic () {
    let ron = r#"[ ( key: "lst", product: "MOD11A2", band: "LST_Day_1km", interval: Days8, resolution_km: 1.0, statistic: "median" ) ]"#;
    let res: Result<Vec<odin_modis::ProductSpec>, _> = ron::from_str( ron);
    let msg = res.unwrap_err().to_string();
    println!("{msg}");
    assert!( msg.contains("invalid statistic"));

    let res = ReductionStatistic::try_from( "median".to_string());
    assert!( matches!( res, Err(odin_modis::OdinModisError::InvalidStatisticError(_))));
}

#[test]
fn test_missing_config () {
    let res: odin_modis::Result<ModisConfig> = load_config("no_such_config.ron");
    assert!( matches!( res, Err(odin_modis::OdinModisError::ConfigError(_))));
}
