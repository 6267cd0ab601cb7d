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

//! evaluation of binary fire classifiers. Models are external - we only need to fit them and get predictions

use std::fmt;
use ndarray::Array2;

use crate::errors::{Result, row_count_mismatch};

/// predictions at or above this value count as positive
pub const DECISION_THRESHOLD: f64 = 0.5;

/// the seam for external models
pub trait BinaryClassifier {
    fn fit (&mut self, x: &Array2<f64>, y: &[f64])->Result<()>;

    /// one (not necessarily binary) prediction per row of `x`
    fn predict (&self, x: &Array2<f64>)->Result<Vec<f64>>;

    fn name (&self)->String { "classifier".to_string() }
}

#[inline]
pub fn is_positive (v: f64)->bool { v >= DECISION_THRESHOLD }

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct ConfusionMatrix {
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub true_positive: usize,
}

impl ConfusionMatrix {
    pub fn from_predictions (y_true: &[f64], y_pred: &[f64])->Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err( row_count_mismatch!("{} labels but {} predictions", y_true.len(), y_pred.len()))
        }

        let mut cm = ConfusionMatrix::default();
        for (t,p) in y_true.iter().zip( y_pred.iter()) {
            match (is_positive(*t), is_positive(*p)) {
                (false,false) => cm.true_negative += 1,
                (false,true) => cm.false_positive += 1,
                (true,false) => cm.false_negative += 1,
                (true,true) => cm.true_positive += 1,
            }
        }
        Ok(cm)
    }

    pub fn total (&self)->usize {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    pub fn accuracy (&self)->f64 {
        (self.true_negative + self.true_positive) as f64 / self.total() as f64
    }

    pub fn precision (&self)->f64 {
        self.true_positive as f64 / (self.true_positive + self.false_positive) as f64
    }

    pub fn recall (&self)->f64 {
        self.true_positive as f64 / (self.true_positive + self.false_negative) as f64
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct Evaluation {
    pub model: String,
    pub confusion: ConfusionMatrix,
    pub mean_absolute_error: f64,
}

/// evaluate raw predictions against labels
pub fn evaluate_predictions (model: &str, y_true: &[f64], y_pred: &[f64])->Result<Evaluation> {
    let confusion = ConfusionMatrix::from_predictions( y_true, y_pred)?;
    let mean_absolute_error = if y_true.is_empty() {
        f64::NAN
    } else {
        y_true.iter().zip( y_pred.iter()).map( |(t,p)| (p - t).abs()).sum::<f64>() / y_true.len() as f64
    };

    Ok( Evaluation { model: model.to_string(), confusion, mean_absolute_error } )
}

/// fit `model` with the training set and evaluate its predictions for the test set
pub fn evaluate_classifier<M> (model: &mut M, x_train: &Array2<f64>, x_test: &Array2<f64>, y_train: &[f64], y_test: &[f64])->Result<Evaluation>
    where M: BinaryClassifier
{
    if x_train.nrows() != y_train.len() {
        return Err( row_count_mismatch!("{} training rows but {} labels", x_train.nrows(), y_train.len()))
    }

    model.fit( x_train, y_train)?;
    let predicted = model.predict( x_test)?;
    evaluate_predictions( &model.name(), y_test, &predicted)
}

impl fmt::Display for Evaluation {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let cm = &self.confusion;
        writeln!(f, "{}", self.model.to_uppercase())?;
        writeln!(f, "  -> Mean Absolute Error: {:.3}", self.mean_absolute_error)?;
        writeln!(f, "  - True negative:      {}", cm.true_negative)?;
        writeln!(f, "  - False positive:     {}", cm.false_positive)?;
        writeln!(f, "  + False negative:     {}", cm.false_negative)?;
        writeln!(f, "  + True positive:      {}", cm.true_positive)
    }
}
