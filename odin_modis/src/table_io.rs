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

//! CSV persistence of pixel tables. The layout is a `date` column followed by one column per
//! pixel, named by its flat grid index: `date,0,1,..,side²-1`

use std::{fs::{self, File}, io, path::Path};
use ndarray::Array2;

use crate::PixelSeriesTable;
use crate::errors::{Result, index_inconsistency, parse_error, table_shape};

pub const DATE_COLUMN: &str = "date";

pub fn write_table<W: io::Write> (writer: W, table: &PixelSeriesTable)->Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = Vec::with_capacity( table.n_pixels() + 1);
    header.push( DATE_COLUMN.to_string());
    header.extend( table.pixel_names());
    wtr.write_record( &header)?;

    let mut record: Vec<String> = Vec::with_capacity( header.len());
    for (i,date) in table.dates().iter().enumerate() {
        record.clear();
        record.push( date.clone());
        record.extend( table.row(i).iter().map( |v| v.to_string()));
        wtr.write_record( &record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// write table to `path`, creating parent dirs as needed
pub fn write_table_file (path: impl AsRef<Path>, table: &PixelSeriesTable)->Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all( dir)?;
    }
    write_table( File::create(path)?, table)
}

/// read a table in `date,0,1,..` layout. An unnamed first column (as written by dataframe
/// libraries for their index) is accepted as date column. Empty cells are read as NaN
pub fn read_table<R: io::Read> (reader: R)->Result<PixelSeriesTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    match headers.get(0) {
        Some(DATE_COLUMN) | Some("") => {}
        other => return Err( parse_error( format!("first column is not a date column: {other:?}")))
    }

    let n_pixels = headers.len() - 1;
    for (i,h) in headers.iter().skip(1).enumerate() {
        if h.trim() != i.to_string() {
            return Err( index_inconsistency!("column {} should be pixel {} but is {:?}", i+1, i, h))
        }
    }

    let side = (n_pixels as f64).sqrt().round() as usize;
    if side * side != n_pixels {
        return Err( index_inconsistency!("{} pixel columns do not form a square grid", n_pixels))
    }

    let mut dates: Vec<String> = Vec::new();
    let mut data: Vec<f64> = Vec::new();

    for res in rdr.records() {
        let rec = res?;
        dates.push( rec[0].to_string());

        for field in rec.iter().skip(1) {
            let field = field.trim();
            let v = if field.is_empty() {
                f64::NAN
            } else {
                field.parse::<f64>().map_err( |_| parse_error( format!("invalid pixel value {field:?} at {}", &rec[0])))?
            };
            data.push(v);
        }
    }

    let values = Array2::from_shape_vec( (dates.len(), n_pixels), data).map_err( |e| table_shape!("{}", e))?;
    PixelSeriesTable::new( side, dates, values)
}

pub fn read_table_file (path: impl AsRef<Path>)->Result<PixelSeriesTable> {
    read_table( File::open( path)?)
}

/// the dates that were requested for a table, stored next to it as JSON array. Acquisition skips
/// failed dates so this can be longer than the table itself
pub fn dates_path (table_path: impl AsRef<Path>)->std::path::PathBuf {
    table_path.as_ref().with_extension("dates.json")
}

pub fn write_dates_file (path: impl AsRef<Path>, dates: &[String])->Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all( dir)?;
    }
    serde_json::to_writer( File::create(path)?, dates)?;
    Ok(())
}

pub fn read_dates_file (path: impl AsRef<Path>)->Result<Vec<String>> {
    Ok( serde_json::from_reader( io::BufReader::new( File::open(path)?))? )
}
