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

//! summary statistics for exploratory analysis of harmonized columns

use std::fmt;

/// mean, sample standard deviation, min and max of a column. NaN values are ignored
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct ColumnStats {
    pub n: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnStats {
    pub fn of<'a> (values: impl IntoIterator<Item=&'a f64>)->Self {
        let mut n = 0usize;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::NAN;
        let mut max = f64::NAN;

        // Welford
        for v in values.into_iter().copied().filter( |v| !v.is_nan()) {
            n += 1;
            let delta = v - mean;
            mean += delta / n as f64;
            m2 += delta * (v - mean);

            min = min.min(v);
            max = max.max(v);
        }

        let mean = if n > 0 { mean } else { f64::NAN };
        let std = if n > 1 { (m2 / (n - 1) as f64).sqrt() } else { f64::NAN };

        ColumnStats { n, mean, std, min, max }
    }
}

/// a titled report block for a named column
pub struct ColumnReport<'a> {
    pub name: &'a str,
    pub stats: ColumnStats,
}

impl fmt::Display for ColumnReport<'_> {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let s = &self.stats;
        writeln!(f, "{} STATISTICS", self.name.to_uppercase())?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "Mean:                   {}", s.mean)?;
        writeln!(f, "Standard deviation:     {}", s.std)?;
        writeln!(f, "Minimal value:          {}", s.min)?;
        writeln!(f, "Maximal value:          {}", s.max)
    }
}

/// number of fire mask values per confidence class. Values that are not exactly 0..3 are not counted
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct FireConfidenceCounts {
    pub none: usize,
    pub low: usize,
    pub nominal: usize,
    pub high: usize,
}

impl FireConfidenceCounts {
    pub fn of<'a> (values: impl IntoIterator<Item=&'a f64>)->Self {
        let mut counts = FireConfidenceCounts::default();
        for v in values {
            let v = *v;
            if v == 0.0 { counts.none += 1 }
            else if v == 1.0 { counts.low += 1 }
            else if v == 2.0 { counts.nominal += 1 }
            else if v == 3.0 { counts.high += 1 }
        }
        counts
    }

    pub fn n_fire (&self)->usize { self.low + self.nominal + self.high }
}

impl fmt::Display for FireConfidenceCounts {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        writeln!(f, "FIRE STATISTICS")?;
        writeln!(f, "---------------------------------")?;
        writeln!(f, "No fire:                   {}", self.none)?;
        writeln!(f, "Fire (low confidence):     {}", self.low)?;
        writeln!(f, "Fire (nominal confidence): {}", self.nominal)?;
        writeln!(f, "Fire (high confidence):    {}", self.high)
    }
}
