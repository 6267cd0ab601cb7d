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

use ndarray::{Array2, ArrayView1};

use crate::{PixelSeriesTable, ReductionStatistic};
use crate::grid::{neighbor_offsets, MergeKind};
use crate::errors::{Result, index_inconsistency};

/// reduce the grid side of `table` from `current_side` to `target_side` by averaging neighboring pixels.
///
/// Since grid sides are odd the reduction factor `r = (current_side-1)/(target_side-1)` does not tile
/// the last row and column with full 2x2 blocks. Destination pixels in the last row average two horizontally
/// adjacent source pixels, the ones in the last column average the base pixel with the one `current_side+1`
/// further along the flat index, and the last (corner) pixel is copied unchanged. All other destination pixels
/// average the 2x2 block at their base index `current_side*r*row + r*col`.
///
/// Date labels are carried over unchanged.
pub fn reduce_resolution (table: &PixelSeriesTable, current_side: usize, target_side: usize)->Result<PixelSeriesTable> {
    if table.n_pixels() != current_side * current_side {
        return Err( index_inconsistency!("table has {} pixels, which does not match side length {}", table.n_pixels(), current_side))
    }

    let cells = neighbor_offsets( current_side, target_side)?;
    let src = table.values();
    let mut values = Array2::<f64>::zeros( (table.n_rows(), target_side * target_side));

    for cell in &cells {
        let mut dest = values.column_mut( cell.dest);

        match cell.kind {
            MergeKind::Corner => dest.assign( &src.column( cell.base())),
            _ => {
                let columns: Vec<ArrayView1<f64>> = cell.sources().iter().map( |i| src.column(*i)).collect();
                let mut buf = [0.0f64; 4];
                let n = columns.len();

                for (t, v) in dest.iter_mut().enumerate() {
                    for (j,col) in columns.iter().enumerate() { buf[j] = col[t] }
                    *v = ReductionStatistic::Mean.reduce( &buf[..n]);
                }
            }
        }
    }

    PixelSeriesTable::new( target_side, table.dates().to_vec(), values)
}
