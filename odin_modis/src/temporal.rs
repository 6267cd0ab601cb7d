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

//! change the temporal granularity of pixel time series by merging or splitting adjacent time steps

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};
use ndarray::{Array2, Zip};

use crate::PixelSeriesTable;
use crate::errors::{OdinModisError, Result, invalid_reduction, row_count_mismatch};

/// how multiple source values are collapsed into one destination value.
/// Continuous measurements (temperature, reflectance, vegetation index) use `Mean`, categorical
/// severity measurements (fire mask) use `Max` so that a detection in any merged time step is kept
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(try_from="String", into="String")]
pub enum ReductionStatistic {
    Mean,
    Max
}

impl ReductionStatistic {
    pub fn as_str (&self)->&'static str {
        match self {
            ReductionStatistic::Mean => "mean",
            ReductionStatistic::Max => "max"
        }
    }

    /// combine two values, skipping a missing (NaN) one
    #[inline]
    pub fn combine (&self, a: f64, b: f64)->f64 {
        match self {
            ReductionStatistic::Mean => {
                if a.is_nan() { b } else if b.is_nan() { a } else { (a + b) / 2.0 }
            }
            ReductionStatistic::Max => a.max(b) // f64::max ignores NaN
        }
    }

    /// reduce a set of values, skipping missing (NaN) ones. Returns NaN if there are no valid values
    pub fn reduce (&self, values: &[f64])->f64 {
        let mut n = 0usize;
        let mut acc = match self {
            ReductionStatistic::Mean => 0.0,
            ReductionStatistic::Max => f64::NEG_INFINITY
        };

        for v in values.iter().filter( |v| !v.is_nan()) {
            n += 1;
            match self {
                ReductionStatistic::Mean => acc += *v,
                ReductionStatistic::Max => acc = acc.max(*v)
            }
        }

        if n == 0 {
            f64::NAN
        } else if *self == ReductionStatistic::Mean {
            acc / n as f64
        } else {
            acc
        }
    }
}

impl FromStr for ReductionStatistic {
    type Err = OdinModisError;

    fn from_str (s: &str)->Result<Self> {
        match s {
            "mean" => Ok(ReductionStatistic::Mean),
            "max" => Ok(ReductionStatistic::Max),
            other => Err( OdinModisError::InvalidStatisticError( format!("{other:?}, choose between \"mean\" and \"max\"")))
        }
    }
}

impl TryFrom<String> for ReductionStatistic {
    type Error = OdinModisError;
    fn try_from (s: String)->Result<Self> { s.parse() }
}

impl From<ReductionStatistic> for String {
    fn from (stat: ReductionStatistic)->String { stat.as_str().to_string() }
}

impl fmt::Display for ReductionStatistic {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// native sensing cadence of a MODIS composite product
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum TemporalInterval {
    Days8,
    Days16
}

impl TemporalInterval {
    pub fn days (&self)->u32 {
        match self {
            TemporalInterval::Days8 => 8,
            TemporalInterval::Days16 => 16
        }
    }

    /// number of composites per calendar year
    pub fn points_per_year (&self)->usize {
        match self {
            TemporalInterval::Days8 => 46,
            TemporalInterval::Days16 => 23
        }
    }

    /// the shortest sequence of whole halvings or doublings that turns a series of this interval
    /// into a series of the `target` interval
    pub fn steps_to (&self, target: TemporalInterval)->Result<TemporalSteps> {
        let from = self.days();
        let to = target.days();

        if from == to { return Ok(TemporalSteps::Keep) }

        let (hi,lo) = if to > from { (to,from) } else { (from,to) };
        if hi % lo != 0 || !(hi / lo).is_power_of_two() {
            return Err( invalid_reduction!("{} day interval can't be reached from {} day interval", to, from))
        }
        let n = (hi / lo).trailing_zeros() as usize;

        if to > from { Ok(TemporalSteps::Halve(n)) } else { Ok(TemporalSteps::Double(n)) }
    }
}

impl fmt::Display for TemporalInterval {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}d", self.days())
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum TemporalSteps {
    Keep,
    Halve(usize),
    Double(usize)
}

/// merge each pair of adjacent time steps `2k`,`2k+1` into one, using `statistic` for each pixel.
/// The merged step is labeled with the date of the earlier one. A trailing unpaired row is dropped
pub fn halve (table: &PixelSeriesTable, statistic: ReductionStatistic)->Result<PixelSeriesTable> {
    let n_out = table.n_rows() / 2;
    let src = table.values();

    let mut values = Array2::<f64>::zeros( (n_out, table.n_pixels()));
    let mut dates: Vec<String> = Vec::with_capacity( n_out);

    for k in 0..n_out {
        Zip::from( values.row_mut(k))
            .and( src.row(2*k))
            .and( src.row(2*k + 1))
            .for_each( |v, a, b| *v = statistic.combine( *a, *b));

        dates.push( table.date(2*k).to_string());
    }

    PixelSeriesTable::new( table.side_length(), dates, values)
}

/// split each time step `i` into two identical steps `2i` and `2i+1`. This is repetition, not
/// interpolation - consumers have to treat both rows as the same observation.
/// Row `2i` keeps the date of source row `i`, row `2i+1` gets `new_dates[2i+1]`.
/// `new_dates` has to contain at least twice as many labels as the table has rows
pub fn double (table: &PixelSeriesTable, new_dates: &[String])->Result<PixelSeriesTable> {
    let n = table.n_rows();
    if new_dates.len() < 2*n {
        return Err( row_count_mismatch!("doubling {} rows requires {} date labels, got {}", n, 2*n, new_dates.len()))
    }

    let mut values = Array2::<f64>::zeros( (2*n, table.n_pixels()));
    let mut dates: Vec<String> = Vec::with_capacity( 2*n);

    for i in 0..n {
        let src = table.row(i);
        values.row_mut(2*i).assign( &src);
        values.row_mut(2*i + 1).assign( &src);

        dates.push( table.date(i).to_string());
        dates.push( new_dates[2*i + 1].clone());
    }

    PixelSeriesTable::new( table.side_length(), dates, values)
}
