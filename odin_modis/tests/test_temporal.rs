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

use std::str::FromStr;
use odin_modis::{OdinModisError, PixelSeriesTable, ReductionStatistic, TemporalInterval, TemporalSteps};
use odin_modis::temporal::{halve, double};

fn labels (ds: &[&str])->Vec<String> { ds.iter().map( |d| d.to_string()).collect() }

/// single pixel table with given row values
fn series (dates: &[&str], vs: &[f64])->PixelSeriesTable {
    let rows: Vec<Vec<f64>> = vs.iter().map( |v| vec![*v]).collect();
    PixelSeriesTable::from_rows( 1, labels(dates), &rows).unwrap()
}

#[test]
fn test_statistic_parsing () {
    assert_eq!( ReductionStatistic::from_str("mean").unwrap(), ReductionStatistic::Mean);
    assert_eq!( ReductionStatistic::from_str("max").unwrap(), ReductionStatistic::Max);
    assert!( matches!( ReductionStatistic::from_str("median"), Err(OdinModisError::InvalidStatisticError(_))));
    assert!( matches!( ReductionStatistic::from_str("Mean"), Err(OdinModisError::InvalidStatisticError(_))));
    assert_eq!( ReductionStatistic::Max.to_string(), "max");
}

#[test]
fn test_statistic_reduce () {
    assert_eq!( ReductionStatistic::Mean.reduce( &[1.0, 2.0, 3.0, 6.0]), 3.0);
    assert_eq!( ReductionStatistic::Max.reduce( &[1.0, 2.0, 3.0, 0.0]), 3.0);
    assert_eq!( ReductionStatistic::Mean.reduce( &[1.0, f64::NAN, 3.0]), 2.0);
    assert!( ReductionStatistic::Mean.reduce( &[f64::NAN, f64::NAN]).is_nan());

    assert_eq!( ReductionStatistic::Mean.combine( 2.0, f64::NAN), 2.0);
    assert_eq!( ReductionStatistic::Max.combine( f64::NAN, 1.0), 1.0);
}

#[test]
fn test_interval_steps () {
    use TemporalInterval::*;
    assert_eq!( Days8.steps_to( Days16).unwrap(), TemporalSteps::Halve(1));
    assert_eq!( Days16.steps_to( Days8).unwrap(), TemporalSteps::Double(1));
    assert_eq!( Days16.steps_to( Days16).unwrap(), TemporalSteps::Keep);
    assert_eq!( Days8.points_per_year(), 2 * Days16.points_per_year());
}

#[test]
fn test_halve_mean () {
    let t = series( &["d0","d1","d2","d3"], &[1.0, 3.0, 10.0, 20.0]);
    let h = halve( &t, ReductionStatistic::Mean).unwrap();

    assert_eq!( h.n_rows(), 2);
    assert_eq!( h.dates(), labels( &["d0","d2"]).as_slice());
    assert_eq!( h.pixel(0).to_vec(), vec![2.0, 15.0]);
}

#[test]
fn test_halve_max () {
    let t = series( &["d0","d1","d2","d3"], &[0.0, 3.0, 1.0, 0.0]);
    let h = halve( &t, ReductionStatistic::Max).unwrap();
    assert_eq!( h.pixel(0).to_vec(), vec![3.0, 1.0]);
}

#[test]
fn test_halve_odd_rows () {
    let t = series( &["d0","d1","d2","d3","d4"], &[1.0, 1.0, 2.0, 2.0, 9.0]);
    let h = halve( &t, ReductionStatistic::Mean).unwrap();

    assert_eq!( h.n_rows(), 2);
    assert_eq!( h.pixel(0).to_vec(), vec![1.0, 2.0]);

    let t = series( &["d0"], &[1.0]);
    assert!( halve( &t, ReductionStatistic::Mean).unwrap().is_empty());
}

#[test]
fn test_halve_multi_pixel () {
    let rows = vec![ vec![0.0, 1.0, 2.0, 3.0], vec![2.0, 3.0, 4.0, 5.0] ];
    let t = PixelSeriesTable::from_rows( 2, labels( &["a","b"]), &rows).unwrap();
    let h = halve( &t, ReductionStatistic::Mean).unwrap();

    assert_eq!( h.side_length(), 2);
    assert_eq!( h.row(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_double () {
    let t = series( &["d0","d2"], &[5.0, 7.0]);
    let d = double( &t, &labels( &["x0","d1","x2","d3"])).unwrap();

    assert_eq!( d.n_rows(), 4);
    assert_eq!( d.dates(), labels( &["d0","d1","d2","d3"]).as_slice());
    assert_eq!( d.pixel(0).to_vec(), vec![5.0, 5.0, 7.0, 7.0]);
}

#[test]
fn test_double_missing_labels () {
    let t = series( &["d0","d2"], &[5.0, 7.0]);
    let res = double( &t, &labels( &["d0","d1","d2"]));
    assert!( matches!( res, Err(OdinModisError::RowCountMismatchError(_))));
}

#[test]
fn test_double_then_halve () {
    let t = series( &["d0","d2","d4"], &[1.0, 4.0, 9.0]);
    let d = double( &t, &labels( &["d0","d1","d2","d3","d4","d5"])).unwrap();

    for stat in [ReductionStatistic::Mean, ReductionStatistic::Max] {
        let h = halve( &d, stat).unwrap();
        assert_eq!( h, t);
    }
}
