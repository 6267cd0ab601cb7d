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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinModisError>;

#[derive(Error,Debug)]
pub enum OdinModisError {

    /// reduction statistic is neither "mean" nor "max"
    #[error("invalid statistic {0}")]
    InvalidStatisticError( String ),

    /// spatial or temporal reduction factor is not a whole multiple
    #[error("invalid reduction {0}")]
    InvalidReductionError( String ),

    /// computed source pixel index outside of grid - always fatal
    #[error("index consistency error {0}")]
    IndexConsistencyError( String ),

    /// table rows can't be reconciled with expected dates
    #[error("row count mismatch {0}")]
    RowCountMismatchError( String ),

    #[error("table shape error {0}")]
    TableShapeError( String ),

    #[error("config error {0}")]
    ConfigError( String ),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("parse error {0}")]
    ParseError( String ),

    #[error("operation failed {0}")]
    OpFailedError( String ),
}

macro_rules! invalid_reduction {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinModisError::InvalidReductionError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_reduction;

macro_rules! index_inconsistency {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinModisError::IndexConsistencyError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use index_inconsistency;

macro_rules! row_count_mismatch {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinModisError::RowCountMismatchError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use row_count_mismatch;

macro_rules! table_shape {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinModisError::TableShapeError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use table_shape;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinModisError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;

pub fn config_error (msg: impl ToString)->OdinModisError {
    OdinModisError::ConfigError(msg.to_string())
}

pub fn parse_error (msg: impl ToString)->OdinModisError {
    OdinModisError::ParseError(msg.to_string())
}
