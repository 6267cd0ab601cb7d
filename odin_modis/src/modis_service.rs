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

//! retrieval of MODIS land product subsets from the ORNL DAAC web service.
//! see https://modis.ornl.gov/data/modis_webservice.html for the REST API

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, header::ACCEPT};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{ModisConfig, PixelSeriesTable, ProductSeries, ProductSpec};
use crate::errors::{Result, op_failed, parse_error};

lazy_static! {
    static ref MODIS_DATE_RE: Regex = Regex::new( r"^A(\d{4})(\d{3})$").unwrap();
}

/* #region response formats *************************************************************************************/

#[derive(Debug,Deserialize)]
struct DatesResponse {
    dates: Vec<RawModisDate>
}

#[derive(Debug,Deserialize)]
struct RawModisDate {
    modis_date: String,
    #[allow(unused)]
    calendar_date: String,
}

#[derive(Debug,Deserialize)]
struct SubsetResponse {
    subset: Vec<RawSubset>
}

#[derive(Debug,Deserialize)]
struct RawSubset {
    data: Vec<f64>
}

/// get the available MODIS date ids (e.g. "A2018001") from a `/dates` response
pub fn parse_dates_response (json: &str)->Result<Vec<String>> {
    let response: DatesResponse = serde_json::from_str(json)?;
    Ok( response.dates.into_iter().map( |d| d.modis_date).collect() )
}

/// get the pixel values of the first subset in a `/subset` response
pub fn parse_subset_response (json: &str)->Result<Vec<f64>> {
    let response: SubsetResponse = serde_json::from_str(json)?;
    response.subset.into_iter().next()
        .map( |s| s.data)
        .ok_or_else( || parse_error("response has no subset"))
}

/* #endregion response formats */

/* #region dates ************************************************************************************************/

/// a MODIS composite date - the service id ("A" + year + day of year) and its calendar date
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ModisDate {
    pub modis_id: String,
    pub date: NaiveDate,
}

impl ModisDate {
    pub fn parse (modis_id: &str)->Result<Self> {
        Ok( ModisDate { modis_id: modis_id.to_string(), date: parse_modis_date(modis_id)? } )
    }

    /// the label we use for table rows
    pub fn label (&self)->String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

pub fn parse_modis_date (modis_id: &str)->Result<NaiveDate> {
    let cap = MODIS_DATE_RE.captures( modis_id).ok_or_else( || parse_error( format!("not a MODIS date: {modis_id}")))?;
    let year: i32 = cap[1].parse().map_err( |_| parse_error( format!("invalid year in {modis_id}")))?;
    let doy: u32 = cap[2].parse().map_err( |_| parse_error( format!("invalid day of year in {modis_id}")))?;

    NaiveDate::from_yo_opt( year, doy).ok_or_else( || parse_error( format!("invalid day of year in {modis_id}")))
}

pub fn is_in_season (date: &NaiveDate, excluded_months: &[u32])->bool {
    !excluded_months.contains( &date.month())
}

/// select `points_per_year` composites per year for all years in `start_year..=end_year`, starting with
/// the first composite of `start_year`, and drop the ones outside of the observation season
pub fn select_dates (available: &[String], start_year: i32, end_year: i32, points_per_year: usize, excluded_months: &[u32])->Result<Vec<ModisDate>> {
    let first = format!("A{start_year}001");
    let start = available.iter().position( |d| *d == first).ok_or_else( || op_failed!("no composite for {}", first))?;
    let n_years = (end_year - start_year + 1).max(0) as usize;
    let end = (start + n_years * points_per_year).min( available.len());

    let mut dates: Vec<ModisDate> = Vec::with_capacity( end - start);
    for id in &available[start..end] {
        let md = ModisDate::parse(id)?;
        if is_in_season( &md.date, excluded_months) {
            dates.push(md);
        }
    }

    Ok(dates)
}

/* #endregion dates */

/// the result of retrieving a product band: the dates we asked for and the table of the ones we got
#[derive(Debug,Clone)]
pub struct AcquiredSeries {
    pub spec: ProductSpec,
    pub requested: Vec<String>,
    pub table: PixelSeriesTable,
}

impl AcquiredSeries {
    pub fn n_missing (&self)->usize {
        self.requested.len().saturating_sub( self.table.n_rows())
    }

    pub fn into_product_series (self)->ProductSeries {
        ProductSeries::new( self.spec, self.table, self.requested)
    }
}

/// client for the ORNL DAAC MODIS subset service
pub struct ModisService {
    config: ModisConfig,
    client: Client,
}

impl ModisService {
    pub fn new (config: ModisConfig)->Self {
        ModisService { config, client: Client::new() }
    }

    pub fn config (&self)->&ModisConfig { &self.config }

    pub fn dates_url (&self, spec: &ProductSpec)->String {
        let loc = &self.config.location;
        format!("{}{}/dates?latitude={}&longitude={}", self.config.url, spec.product, loc.lat, loc.lon)
    }

    pub fn subset_url (&self, spec: &ProductSpec, modis_id: &str)->String {
        let loc = &self.config.location;
        let ext = self.config.extent_km;
        format!("{}{}/subset?latitude={}&longitude={}&band={}&startDate={}&endDate={}&kmAboveBelow={}&kmLeftRight={}",
                self.config.url, spec.product, loc.lat, loc.lon, spec.band, modis_id, modis_id, ext, ext)
    }

    async fn get_json_text (&self, url: &str)->Result<String> {
        let response = self.client.get(url)
            .header( ACCEPT, "application/json")
            .send().await?
            .error_for_status()?;
        Ok( response.text().await? )
    }

    /// the in-season composite dates of `spec` within the configured years
    pub async fn get_dates (&self, spec: &ProductSpec)->Result<Vec<ModisDate>> {
        let text = self.get_json_text( &self.dates_url(spec)).await?;
        let available = parse_dates_response( &text)?;
        let c = &self.config;

        select_dates( &available, c.start_year, c.end_year, spec.interval.points_per_year(), &c.excluded_months)
    }

    pub async fn get_subset (&self, spec: &ProductSpec, modis_id: &str)->Result<Vec<f64>> {
        let text = self.get_json_text( &self.subset_url( spec, modis_id)).await?;
        parse_subset_response( &text)
    }

    /// retrieve the band of `spec` for each of the given dates. Dates that fail are skipped (not retried),
    /// which means the resulting table can have fewer rows than requested dates
    pub async fn retrieve_dates (&self, spec: &ProductSpec, dates: &[ModisDate])->Result<AcquiredSeries> {
        let side = self.config.side_length( spec);
        let n_pixels = side * side;

        let mut labels: Vec<String> = Vec::with_capacity( dates.len());
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity( dates.len());

        for md in dates {
            match self.get_subset( spec, &md.modis_id).await {
                Ok(row) if row.len() == n_pixels => {
                    debug!("retrieved {} {} {}", spec.product, spec.band, md.modis_id);
                    labels.push( md.label());
                    rows.push( row);
                }
                Ok(row) => warn!("skipping {} {} {}: {} pixels, expected {}", spec.product, spec.band, md.modis_id, row.len(), n_pixels),
                Err(e) => warn!("skipping {} {} {}: {}", spec.product, spec.band, md.modis_id, e)
            }
        }

        let requested: Vec<String> = dates.iter().map( |md| md.label()).collect();
        info!("retrieved {} of {} dates for {} ({} {})", rows.len(), requested.len(), spec.key, spec.product, spec.band);

        let table = PixelSeriesTable::from_rows( side, labels, &rows)?;
        Ok( AcquiredSeries { spec: spec.clone(), requested, table } )
    }

    pub async fn retrieve_band (&self, spec: &ProductSpec)->Result<AcquiredSeries> {
        let dates = self.get_dates( spec).await?;
        self.retrieve_dates( spec, &dates).await
    }
}
