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

//! bring the tables of several products onto a common temporal interval and a common spatial grid

use tracing::{debug, info, warn};

use crate::{PixelSeriesTable, ProductSpec, TemporalInterval, TemporalSteps};
use crate::temporal::{halve, double};
use crate::spatial::reduce_resolution;
use crate::errors::{Result, row_count_mismatch};

/// input of the harmonization - a product table together with the dates we requested for it.
/// Acquisition skips dates it could not retrieve, i.e. the table can have fewer rows than `expected_dates`
#[derive(Debug,Clone)]
pub struct ProductSeries {
    pub spec: ProductSpec,
    pub table: PixelSeriesTable,
    pub expected_dates: Vec<String>,
}

impl ProductSeries {
    pub fn new (spec: ProductSpec, table: PixelSeriesTable, expected_dates: Vec<String>)->Self {
        ProductSeries { spec, table, expected_dates }
    }

    /// use the table's own dates as the expected ones
    pub fn from_table (spec: ProductSpec, table: PixelSeriesTable)->Self {
        let expected_dates = table.dates().to_vec();
        ProductSeries { spec, table, expected_dates }
    }
}

#[derive(Debug,Clone)]
pub struct HarmonizedProduct {
    pub spec: ProductSpec,
    pub table: PixelSeriesTable,
}

/// the orchestrator that aligns a set of product tables.
///
/// Each product first gets resampled to the target interval (by repeated [`halve`] or [`double`]),
/// then all tables are truncated to a common row count and finally reduced to the grid side of the
/// coarsest product with [`reduce_resolution`]. Harmonization fails as a whole on the first error
#[derive(Debug,Clone)]
pub struct Harmonizer {
    target_interval: TemporalInterval,

    /// labels to use when doubling. If not set we take the requested dates of the first product that
    /// is already at the target interval
    target_dates: Option<Vec<String>>,
}

impl Harmonizer {
    pub fn new (target_interval: TemporalInterval)->Self {
        Harmonizer { target_interval, target_dates: None }
    }

    pub fn with_target_dates (mut self, dates: Vec<String>)->Self {
        self.target_dates = Some(dates);
        self
    }

    pub fn target_interval (&self)->TemporalInterval { self.target_interval }

    pub fn harmonize (&self, products: Vec<ProductSeries>)->Result<Vec<HarmonizedProduct>> {
        if products.is_empty() { return Ok(Vec::new()) }

        // doubling labels come from the full request, a missing tail row of the target interval
        // product must not shorten the labels of others
        let target_dates: Option<Vec<String>> = self.target_dates.clone().or_else( || {
            products.iter()
                .find( |p| p.spec.interval == self.target_interval)
                .map( |p| p.expected_dates.clone())
        });

        let mut reconciled: Vec<ProductSeries> = Vec::with_capacity( products.len());
        for p in products {
            reconciled.push( reconcile_row_count(p)?);
        }

        let mut aligned: Vec<HarmonizedProduct> = Vec::with_capacity( reconciled.len());
        for p in reconciled {
            let table = align_interval( p.table, &p.spec, self.target_interval, target_dates.as_deref())?;
            debug!("{} at {} interval: {} rows", p.spec.key, self.target_interval, table.n_rows());
            aligned.push( HarmonizedProduct { spec: p.spec, table });
        }

        align_row_counts( &mut aligned);

        let target_side = aligned.iter().map( |p| p.table.side_length()).min().unwrap_or(0);
        let mut harmonized: Vec<HarmonizedProduct> = Vec::with_capacity( aligned.len());

        for p in aligned {
            let side = p.table.side_length();
            let table = if side > target_side {
                info!("reducing {} from {}x{} to {}x{} pixels", p.spec.key, side, side, target_side, target_side);
                reduce_resolution( &p.table, side, target_side)?
            } else {
                p.table
            };
            harmonized.push( HarmonizedProduct { spec: p.spec, table });
        }

        Ok(harmonized)
    }
}

/// a table can have fewer rows than requested dates (failed retrievals are skipped), but never more
fn reconcile_row_count (mut p: ProductSeries)->Result<ProductSeries> {
    let n_rows = p.table.n_rows();
    let n_expected = p.expected_dates.len();

    if n_rows > n_expected {
        return Err( row_count_mismatch!("{} table has {} rows but only {} dates were requested", p.spec.key, n_rows, n_expected))
    }
    if n_rows < n_expected {
        warn!("{} table is missing {} of {} requested dates", p.spec.key, n_expected - n_rows, n_expected);
        p.expected_dates.truncate( n_rows);
    }

    Ok(p)
}

/// resample `table` from the native interval of `spec` to `target`.
/// Intermediate doubling stages use every `2^k`-th target date as their labels
fn align_interval (table: PixelSeriesTable, spec: &ProductSpec, target: TemporalInterval, target_dates: Option<&[String]>)->Result<PixelSeriesTable> {
    match spec.interval.steps_to( target)? {
        TemporalSteps::Keep => Ok(table),

        TemporalSteps::Halve(n) => {
            info!("halving {} interval of {} ({}x, {})", spec.interval, spec.key, n, spec.statistic);
            let mut t = halve( &table, spec.statistic)?;
            for _ in 1..n {
                t = halve( &t, spec.statistic)?;
            }
            Ok(t)
        }

        TemporalSteps::Double(n) => {
            info!("doubling {} interval of {} ({}x)", spec.interval, spec.key, n);
            let dates = target_dates.ok_or_else( || row_count_mismatch!("no {} dates to double {} into", target, spec.key))?;

            let mut t = table;
            for k in (0..n).rev() {
                let stage_dates: Vec<String> = dates.iter().step_by( 1 << k).cloned().collect();
                t = double( &t, &stage_dates)?;
            }
            Ok(t)
        }
    }
}

/// partial acquisitions shorten series at their tail - cut all tables to the shortest one
fn align_row_counts (products: &mut [HarmonizedProduct]) {
    if let Some(n_min) = products.iter().map( |p| p.table.n_rows()).min() {
        for p in products.iter_mut() {
            if p.table.n_rows() > n_min {
                warn!("truncating {} from {} to {} rows", p.spec.key, p.table.n_rows(), n_min);
                p.table = p.table.truncated( n_min);
            }
        }
    }
}
