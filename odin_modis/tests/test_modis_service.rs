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

use chrono::NaiveDate;
use odin_modis::{load_config, ModisConfig, ModisDate, ModisService, OdinModisError};
use odin_modis::modis_service::{is_in_season, parse_dates_response, parse_modis_date, parse_subset_response, select_dates};

/// the composite ids of an 8 day product for the given years
fn available_8d (years: std::ops::RangeInclusive<i32>)->Vec<String> {
    years.flat_map( |y| (0..46).map( move |i| format!("A{}{:03}", y, 1 + 8*i))).collect()
}

#[test]
fn test_parse_modis_date () {
    assert_eq!( parse_modis_date("A2018001").unwrap(), NaiveDate::from_ymd_opt( 2018, 1, 1).unwrap());
    assert_eq!( parse_modis_date("A2018032").unwrap(), NaiveDate::from_ymd_opt( 2018, 2, 1).unwrap());
    assert_eq!( parse_modis_date("A2020366").unwrap(), NaiveDate::from_ymd_opt( 2020, 12, 31).unwrap());

    assert!( matches!( parse_modis_date("A2018400"), Err(OdinModisError::ParseError(_))));
    assert!( matches!( parse_modis_date("2018001"), Err(OdinModisError::ParseError(_))));

    let md = ModisDate::parse("A2018153").unwrap();
    assert_eq!( md.label(), "2018-06-02");
}

#[test]
fn test_season () {
    let excluded = [1, 11, 12];
    assert!( is_in_season( &NaiveDate::from_ymd_opt( 2018, 6, 2).unwrap(), &excluded));
    assert!( !is_in_season( &NaiveDate::from_ymd_opt( 2018, 11, 1).unwrap(), &excluded));
    assert!( !is_in_season( &NaiveDate::from_ymd_opt( 2018, 1, 31).unwrap(), &excluded));
}

#[test]
fn test_select_dates () {
    let available = available_8d( 2017..=2019);
    let dates = select_dates( &available, 2018, 2018, 46, &[1, 11, 12]).unwrap();

    assert_eq!( dates.len(), 34);
    assert_eq!( dates.first().unwrap().modis_id, "A2018033");
    assert_eq!( dates.first().unwrap().label(), "2018-02-02");
    assert_eq!( dates.last().unwrap().modis_id, "A2018297");

    // two years, without season filter
    let dates = select_dates( &available, 2018, 2019, 46, &[]).unwrap();
    assert_eq!( dates.len(), 92);

    // more years than available
    let dates = select_dates( &available, 2019, 2021, 46, &[]).unwrap();
    assert_eq!( dates.len(), 46);

    let res = select_dates( &available, 2016, 2018, 46, &[]);
    assert!( matches!( res, Err(OdinModisError::OpFailedError(_))));
}

#[test]
fn test_parse_responses () {
    let json = r#"{"dates": [
        {"modis_date": "A2018145", "calendar_date": "2018-05-25"},
        {"modis_date": "A2018153", "calendar_date": "2018-06-02"}
    ]}"#;
    assert_eq!( parse_dates_response( json).unwrap(), vec!["A2018145".to_string(), "A2018153".to_string()]);

    let json = r#"{"xllcorner": "1065303.89", "nrows": 3, "ncols": 3, "band": "LST_Day_1km", "subset": [
        {"modis_date": "A2018153", "calendar_date": "2018-06-02", "band": "LST_Day_1km", "tile": "h19v02",
         "proc_date": "2020054151011", "data": [14521, 14530, 0, 14498, 14502, 14511, 14487, 14490, 14495]}
    ]}"#;
    let data = parse_subset_response( json).unwrap();
    assert_eq!( data.len(), 9);
    assert_eq!( data[0], 14521.0);

    assert!( matches!( parse_subset_response(r#"{"subset": []}"#), Err(OdinModisError::ParseError(_))));
    assert!( matches!( parse_dates_response("<html>"), Err(OdinModisError::JsonError(_))));
}

#[test]
fn test_service_urls () {
    let config: ModisConfig = load_config("modis_nilivara.ron").unwrap();
    let spec = config.product("lst").unwrap().clone();
    let service = ModisService::new( config);

    assert_eq!( service.dates_url( &spec), "https://modis.ornl.gov/rst/api/v1/MOD11A2/dates?latitude=67.236412&longitude=21.956056");
    assert_eq!( service.subset_url( &spec, "A2018153"),
        "https://modis.ornl.gov/rst/api/v1/MOD11A2/subset?latitude=67.236412&longitude=21.956056&band=LST_Day_1km&startDate=A2018153&endDate=A2018153&kmAboveBelow=100&kmLeftRight=100");
}
