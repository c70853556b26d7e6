/*!
This crate defines the [`Metric`](trait.Metric.html) trait and the binary classification curves that implement it: [`RocCurve`](struct.RocCurve.html), [`PrecisionRecallCurve`](struct.PrecisionRecallCurve.html), [`DetCurve`](struct.DetCurve.html) and [`CalibrationCurve`](struct.CalibrationCurve.html).

Labels are passed as `f64`s. Unless a `pos_label` option is given, the labels must be {0, 1} or {-1, 1} and `1` is the positive class.
*/

#![allow(clippy::tabs_in_doc_comments)]

mod calibration;
mod clf_curve;
mod det;
mod error;
mod precision_recall;
mod roc;

pub use self::calibration::{
	calibration_curve, BinStrategy, CalibrationCurve, CalibrationCurveInput,
	CalibrationCurveOptions, CalibrationCurveOutput,
};
pub use self::clf_curve::{binary_clf_curve, BinaryClfCurve};
pub use self::det::{det_curve, DetCurve, DetCurveInput, DetCurveOptions, DetCurveOutput};
pub use self::error::CurveError;
pub use self::precision_recall::{
	precision_recall_curve, PrecisionRecallCurve, PrecisionRecallCurveInput,
	PrecisionRecallCurveOptions, PrecisionRecallCurveOutput,
};
pub use self::roc::{roc_curve, RocCurve, RocCurveInput, RocCurveOptions, RocCurveOutput};

/**
The `Metric` trait defines a common interface to metrics that can be computed when the entire input is available at once.

The generic lifetime `'a` allows `Input`s to borrow the label and score arrays from their enclosing scope.

# Examples

```
use curvelog_metrics::{Metric, RocCurve, RocCurveInput, RocCurveOptions};
use ndarray::arr1;

let labels = arr1(&[0.0, 1.0]);
let scores = arr1(&[0.25, 0.75]);
let roc = RocCurve::compute(RocCurveInput {
	labels: labels.view(),
	scores: scores.view(),
	options: &RocCurveOptions::default(),
})
.unwrap();
assert_eq!(roc.true_positive_rates.to_vec(), vec![0.0, 1.0, 1.0]);
```
*/
pub trait Metric<'a> {
	type Input;
	type Output;
	fn compute(input: Self::Input) -> Self::Output;
}
