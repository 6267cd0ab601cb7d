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

use ndarray::{Array2, ArrayView1, ArrayView2, s};

use crate::errors::{Result, table_shape};

/// a time series of square pixel grids.
///
/// Each row holds one time step (chronologically ordered), each column one pixel of a
/// `side_length x side_length` grid in row-major order (see [`crate::grid::flat_index`]).
/// Every row has an associated date label, which is the acquisition date of the time step.
///
/// Tables are not modified by the resampling functions - each stage returns a new table
#[derive(Debug,Clone,PartialEq)]
pub struct PixelSeriesTable {
    side_length: usize,
    dates: Vec<String>,
    values: Array2<f64>,
}

impl PixelSeriesTable {
    pub fn new (side_length: usize, dates: Vec<String>, values: Array2<f64>)->Result<Self> {
        if values.nrows() != dates.len() {
            return Err( table_shape!("{} rows but {} dates", values.nrows(), dates.len()))
        }
        if values.ncols() != side_length * side_length {
            return Err( table_shape!("{} pixel columns for side length {}", values.ncols(), side_length))
        }
        Ok( PixelSeriesTable { side_length, dates, values } )
    }

    /// build table from per-date pixel rows, each of which has to hold `side_length^2` values
    pub fn from_rows (side_length: usize, dates: Vec<String>, rows: &[Vec<f64>])->Result<Self> {
        let n_pixels = side_length * side_length;
        let mut values = Array2::<f64>::zeros( (rows.len(), n_pixels));

        for (i,row) in rows.iter().enumerate() {
            if row.len() != n_pixels {
                return Err( table_shape!("row {} has {} pixels, expected {}", i, row.len(), n_pixels))
            }
            values.row_mut(i).iter_mut().zip( row.iter()).for_each( |(v,x)| *v = *x);
        }

        Self::new( side_length, dates, values)
    }

    pub fn side_length (&self)->usize { self.side_length }

    pub fn n_rows (&self)->usize { self.dates.len() }

    pub fn n_pixels (&self)->usize { self.values.ncols() }

    pub fn is_empty (&self)->bool { self.dates.is_empty() }

    pub fn dates (&self)->&[String] { &self.dates }

    pub fn date (&self, row: usize)->&str { self.dates[row].as_str() }

    pub fn values (&self)->ArrayView2<'_,f64> { self.values.view() }

    pub fn row (&self, row: usize)->ArrayView1<'_,f64> { self.values.row(row) }

    /// the time series of a single pixel
    pub fn pixel (&self, index: usize)->ArrayView1<'_,f64> { self.values.column(index) }

    /// column names as used for persistence - stringified flat pixel indices
    pub fn pixel_names (&self)->Vec<String> {
        (0..self.n_pixels()).map( |i| i.to_string()).collect()
    }

    /// a new table with the first `n_rows` time steps
    pub fn truncated (&self, n_rows: usize)->PixelSeriesTable {
        let n = n_rows.min( self.n_rows());
        PixelSeriesTable {
            side_length: self.side_length,
            dates: self.dates[..n].to_vec(),
            values: self.values.slice( s![..n, ..]).to_owned()
        }
    }

    pub fn into_parts (self)->(usize, Vec<String>, Array2<f64>) {
        (self.side_length, self.dates, self.values)
    }
}
