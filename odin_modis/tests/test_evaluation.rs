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
#![allow(unused)]

use ndarray::Array2;
use odin_modis::{OdinModisError, Result};
use odin_modis::evaluation::{BinaryClassifier, ConfusionMatrix, evaluate_classifier, evaluate_predictions};

/// predicts fire if the first feature exceeds a threshold learned as the mean of the first feature of fire samples
struct ThresholdClassifier {
    threshold: f64
}

impl BinaryClassifier for ThresholdClassifier {
    fn fit (&mut self, x: &Array2<f64>, y: &[f64])->Result<()> {
        let fire: Vec<f64> = x.column(0).iter().zip( y.iter()).filter( |(_,y)| **y >= 0.5).map( |(x,_)| *x).collect();
        self.threshold = fire.iter().sum::<f64>() / fire.len() as f64;
        Ok(())
    }

    fn predict (&self, x: &Array2<f64>)->Result<Vec<f64>> {
        Ok( x.column(0).iter().map( |v| if *v >= self.threshold { 1.0 } else { 0.0 }).collect() )
    }

    fn name (&self)->String { "threshold".to_string() }
}

#[test]
fn test_confusion_matrix () {
    let y_true = [0.0, 0.0, 1.0, 1.0, 1.0, 0.0];
    let y_pred = [0.0, 0.7, 0.2, 1.0, 0.5, 0.1];

    let cm = ConfusionMatrix::from_predictions( &y_true, &y_pred).unwrap();
    assert_eq!( cm, ConfusionMatrix { true_negative: 2, false_positive: 1, false_negative: 1, true_positive: 2 });
    assert_eq!( cm.total(), 6);
    assert_eq!( cm.accuracy(), 4.0/6.0);
    assert_eq!( cm.precision(), 2.0/3.0);
    assert_eq!( cm.recall(), 2.0/3.0);

    let res = ConfusionMatrix::from_predictions( &y_true, &y_pred[..5]);
    assert!( matches!( res, Err(OdinModisError::RowCountMismatchError(_))));
}

#[test]
fn test_mean_absolute_error () {
    let eval = evaluate_predictions( "const", &[0.0, 1.0, 1.0, 0.0], &[0.5, 0.5, 1.0, 0.0]).unwrap();
    assert_eq!( eval.mean_absolute_error, 0.25);
    println!("{eval}");
}

#[test]
fn test_evaluate_classifier () {
    let x_train = Array2::from_shape_vec( (4,2), vec![310.0, 0.1,  280.0, 0.5,  320.0, 0.1,  270.0, 0.6]).unwrap();
    let y_train = [1.0, 0.0, 1.0, 0.0];
    let x_test = Array2::from_shape_vec( (3,2), vec![330.0, 0.0,  290.0, 0.4,  316.0, 0.2]).unwrap();
    let y_test = [1.0, 0.0, 0.0];

    let mut model = ThresholdClassifier { threshold: 0.0 };
    let eval = evaluate_classifier( &mut model, &x_train, &x_test, &y_train, &y_test).unwrap();

    assert_eq!( model.threshold, 315.0);
    assert_eq!( eval.model, "threshold");
    assert_eq!( eval.confusion, ConfusionMatrix { true_negative: 1, false_positive: 1, false_negative: 0, true_positive: 1 });

    let res = evaluate_classifier( &mut model, &x_train, &x_test, &y_train[..3], &y_test);
    assert!( matches!( res, Err(OdinModisError::RowCountMismatchError(_))));
}
