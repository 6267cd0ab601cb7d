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

//! derived products and the long format feature table we hand to classifiers

use std::io;
use ndarray::{Array2, ArrayView1, Zip};

use crate::{PixelSeriesTable, ProductSeries, ProductSpec, ReductionStatistic};
use crate::errors::{Result, table_shape};

pub const NDMI_KEY: &str = "ndmi";

fn check_compatible (a: &PixelSeriesTable, b: &PixelSeriesTable)->Result<()> {
    if a.side_length() != b.side_length() {
        return Err( table_shape!("side lengths differ: {} vs {}", a.side_length(), b.side_length()))
    }
    if a.dates() != b.dates() {
        return Err( table_shape!("tables have different dates ({} vs {} rows)", a.n_rows(), b.n_rows()))
    }
    Ok(())
}

/// normalized difference moisture index `(nir - swir) / (nir + swir)` for harmonized NIR and SWIR reflectance tables.
/// Pixels with a zero denominator get 0
pub fn derive_ndmi (nir: &PixelSeriesTable, swir: &PixelSeriesTable)->Result<PixelSeriesTable> {
    check_compatible( nir, swir)?;

    let mut values = Array2::<f64>::zeros( (nir.n_rows(), nir.n_pixels()));
    Zip::from( &mut values)
        .and( &nir.values())
        .and( &swir.values())
        .for_each( |v, n, s| {
            let d = n + s;
            *v = if d == 0.0 { 0.0 } else { (n - s) / d };
        });

    PixelSeriesTable::new( nir.side_length(), nir.dates().to_vec(), values)
}

/// NDMI as a product series of its own, at the native grid and interval of the reflectance bands.
/// Derive this before harmonization so that the ratio is computed per source pixel and then aggregated
pub fn ndmi_series (nir: &ProductSeries, swir: &ProductSeries)->Result<ProductSeries> {
    let table = derive_ndmi( &nir.table, &swir.table)?;
    let spec = ProductSpec::new( NDMI_KEY, &nir.spec.product, NDMI_KEY, nir.spec.interval, nir.spec.resolution_km, ReductionStatistic::Mean);
    Ok( ProductSeries::new( spec, table, nir.expected_dates.clone()) )
}

/// harmonized products in long format: one row per (date,pixel) and one column per product
#[derive(Debug,Clone)]
pub struct FeatureTable {
    keys: Vec<String>,
    dates: Vec<String>,
    pixels: Vec<usize>,
    values: Array2<f64>,
}

impl FeatureTable {
    /// all tables have to share dates and grid side
    pub fn from_products (products: &[(&str, &PixelSeriesTable)])->Result<Self> {
        let (_, first) = products.first().ok_or_else( || table_shape!("no products"))?;
        for (_,t) in &products[1..] {
            check_compatible( first, t)?;
        }

        let n_rows = first.n_rows() * first.n_pixels();
        let keys: Vec<String> = products.iter().map( |(k,_)| k.to_string()).collect();
        let mut dates: Vec<String> = Vec::with_capacity( n_rows);
        let mut pixels: Vec<usize> = Vec::with_capacity( n_rows);
        let mut values = Array2::<f64>::zeros( (n_rows, keys.len()));

        for t in 0..first.n_rows() {
            for p in 0..first.n_pixels() {
                let i = t * first.n_pixels() + p;
                dates.push( first.date(t).to_string());
                pixels.push( p);
                for (j,(_,table)) in products.iter().enumerate() {
                    values[[i,j]] = table.values()[[t,p]];
                }
            }
        }

        Ok( FeatureTable { keys, dates, pixels, values } )
    }

    pub fn n_rows (&self)->usize { self.dates.len() }

    pub fn keys (&self)->&[String] { &self.keys }

    pub fn column (&self, key: &str)->Option<ArrayView1<'_,f64>> {
        self.keys.iter().position( |k| k == key).map( |j| self.values.column(j))
    }

    /// feature matrix of all columns except `label_key`, and the label column itself
    pub fn split_features (&self, label_key: &str)->Result<(Array2<f64>, Vec<f64>)> {
        let label_idx = self.keys.iter().position( |k| k == label_key)
            .ok_or_else( || table_shape!("no {} column", label_key))?;
        let feature_idx: Vec<usize> = (0..self.keys.len()).filter( |j| *j != label_idx).collect();

        let x = self.values.select( ndarray::Axis(1), &feature_idx);
        let y = self.values.column( label_idx).to_vec();
        Ok( (x, y) )
    }

    pub fn write_csv<W: io::Write> (&self, writer: W)->Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header: Vec<&str> = vec!["date", "pixel"];
        header.extend( self.keys.iter().map( |k| k.as_str()));
        wtr.write_record( &header)?;

        for i in 0..self.n_rows() {
            let mut record: Vec<String> = Vec::with_capacity( header.len());
            record.push( self.dates[i].clone());
            record.push( self.pixels[i].to_string());
            record.extend( self.values.row(i).iter().map( |v| v.to_string()));
            wtr.write_record( &record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
