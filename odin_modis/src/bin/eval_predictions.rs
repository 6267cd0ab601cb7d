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

use std::fs::File;
use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use odin_modis::evaluation::evaluate_predictions;

#[derive(Parser, Debug)]
#[command(version, about = "evaluate fire predictions given as CSV with y_true,y_pred columns")]
pub struct Args {
    #[arg(short,long, default_value = "classifier")]
    pub model: String,

    pub predictions: String,
}

#[derive(Debug,Deserialize)]
struct PredictionRecord {
    y_true: f64,
    y_pred: f64,
}

fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let mut rdr = csv::Reader::from_reader( File::open( &args.predictions)?);
    let mut y_true: Vec<f64> = Vec::new();
    let mut y_pred: Vec<f64> = Vec::new();
    for res in rdr.deserialize::<PredictionRecord>() {
        let rec = res?;
        y_true.push( rec.y_true);
        y_pred.push( rec.y_pred);
    }

    let eval = evaluate_predictions( &args.model, &y_true, &y_pred)?;
    print!("{eval}");

    Ok(())
}
