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

//! addressing of square pixel grids that are stored as flat, row-major pixel columns.
//!
//! MODIS subsets are retrieved as a square window around a center point, which gives us
//! grids with an odd side length `2*extent/resolution + 1`. Pixel `(row,col)` is stored
//! in column `row*side + col` of a [`crate::PixelSeriesTable`].

use crate::errors::{Result, invalid_reduction, index_inconsistency};

#[inline]
pub fn flat_index (row: usize, col: usize, side_length: usize)->usize {
    debug_assert!( row < side_length && col < side_length);
    row * side_length + col
}

/// the inverse of [`flat_index`]
#[inline]
pub fn grid_position (index: usize, side_length: usize)->(usize,usize) {
    (index / side_length, index % side_length)
}

/// number of pixels along each side of a window that extends `extent_km` in each direction
/// from its center pixel, for a product with a pixel width of `resolution_km`
pub fn side_length (extent_km: f64, resolution_km: f64)->usize {
    (2.0 * extent_km / resolution_km).floor() as usize + 1
}

/// the integer factor by which a grid of `current_side` is reduced to `target_side`.
/// Grid sides are odd, hence the factor is computed on the number of pixel intervals
pub fn reduction_factor (current_side: usize, target_side: usize)->Result<usize> {
    if target_side < 2 {
        return Err( invalid_reduction!("target side {} too small", target_side))
    }
    if current_side <= target_side {
        return Err( invalid_reduction!("current side {} not larger than target side {}", current_side, target_side))
    }
    if (current_side - 1) % (target_side - 1) != 0 {
        return Err( invalid_reduction!("({} - 1) is not a multiple of ({} - 1)", current_side, target_side))
    }

    Ok( (current_side - 1) / (target_side - 1) )
}

/// the merge pattern for a destination cell
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum MergeKind {
    /// last row and last column - single source pixel, copied as is
    Corner,
    /// last row - two horizontally adjacent source pixels
    LastRow,
    /// last column - base pixel and the one `current_side + 1` further
    LastColumn,
    /// 2x2 block with its top left at the base index
    Block
}

/// one destination pixel of a resolution reduction together with the source pixels it is computed from
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct MergeCell {
    pub dest: usize,
    pub kind: MergeKind,
    sources: [usize;4],
    n_sources: usize,
}

impl MergeCell {
    fn new (dest: usize, kind: MergeKind, src: &[usize])->Self {
        let mut sources = [0usize;4];
        sources[..src.len()].copy_from_slice(src);
        MergeCell { dest, kind, sources, n_sources: src.len() }
    }

    /// flat index of the first (top left) source pixel
    pub fn base (&self)->usize { self.sources[0] }

    pub fn sources (&self)->&[usize] { &self.sources[..self.n_sources] }
}

/// compute the merge plan for reducing a `current_side` grid to a `target_side` grid.
/// The result is ordered by destination index
pub fn neighbor_offsets (current_side: usize, target_side: usize)->Result<Vec<MergeCell>> {
    let r = reduction_factor( current_side, target_side)?;
    let n_src = current_side * current_side;
    let last = target_side - 1;

    let mut cells: Vec<MergeCell> = Vec::with_capacity( target_side * target_side);

    for row in 0..target_side {
        let row_base = current_side * r * row;

        for col in 0..target_side {
            let dest = flat_index( row, col, target_side);
            let base = row_base + r * col;

            let cell = if row == last && col == last {
                MergeCell::new( dest, MergeKind::Corner, &[base])
            } else if row == last {
                MergeCell::new( dest, MergeKind::LastRow, &[base, base+1])
            } else if col == last {
                MergeCell::new( dest, MergeKind::LastColumn, &[base, base + current_side + 1])
            } else {
                MergeCell::new( dest, MergeKind::Block, &[base, base+1, base + current_side, base + current_side + 1])
            };

            if let Some(idx) = cell.sources().iter().find( |idx| **idx >= n_src) {
                return Err( index_inconsistency!("source index {} of destination {} outside of {}x{} grid",
                                                  idx, dest, current_side, current_side))
            }
            cells.push( cell);
        }
    }

    Ok(cells)
}
