use super::{binary_clf_curve, CurveError, Metric};
use ndarray::prelude::*;

/// Options for [`PrecisionRecallCurve`].
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct PrecisionRecallCurveOptions {
	pub pos_label: Option<f64>,
	pub sample_weight: Option<Vec<f64>>,
	/// Drop thresholds where the true positive count does not change. Defaults to false.
	pub drop_intermediate: Option<bool>,
}

pub struct PrecisionRecallCurve;

pub struct PrecisionRecallCurveInput<'a> {
	pub labels: ArrayView1<'a, f64>,
	pub probabilities: ArrayView1<'a, f64>,
	pub options: &'a PrecisionRecallCurveOptions,
}

/**
Points are ordered by increasing threshold, so recall decreases. `precisions` and `recalls` carry one more value than `thresholds`: the final point (precision 1, recall 0) has no threshold.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionRecallCurveOutput {
	pub precisions: Array1<f64>,
	pub recalls: Array1<f64>,
	pub thresholds: Array1<f64>,
}

impl<'a> Metric<'a> for PrecisionRecallCurve {
	type Input = PrecisionRecallCurveInput<'a>;
	type Output = Result<PrecisionRecallCurveOutput, CurveError>;

	fn compute(input: Self::Input) -> Self::Output {
		let PrecisionRecallCurveInput {
			labels,
			probabilities,
			options,
		} = input;
		let sample_weight = options
			.sample_weight
			.as_ref()
			.map(|w| ArrayView1::from(w.as_slice()));
		let mut curve = binary_clf_curve(labels, probabilities, options.pos_label, sample_weight)?;
		if options.drop_intermediate.unwrap_or(false) && curve.len() > 2 {
			let tps = &curve.true_positives;
			let n = tps.len();
			let indices: Vec<usize> = (0..n)
				.filter(|&i| i == 0 || i == n - 1 || tps[i] != tps[i - 1] || tps[i + 1] != tps[i])
				.collect();
			curve = curve.select(&indices);
		}
		let total_positives = curve.total_positives();
		let mut precisions: Vec<f64> = curve
			.true_positives
			.iter()
			.zip(curve.false_positives.iter())
			.map(|(&tp, &fp)| {
				let predicted_positives = tp + fp;
				if predicted_positives != 0.0 {
					tp / predicted_positives
				} else {
					0.0
				}
			})
			.collect();
		let mut recalls: Vec<f64> = if total_positives == 0.0 {
			log::warn!("no positive class found in y_true, recall is set to one for all thresholds");
			vec![1.0; curve.len()]
		} else {
			curve
				.true_positives
				.iter()
				.map(|tp| tp / total_positives)
				.collect()
		};
		precisions.reverse();
		recalls.reverse();
		precisions.push(1.0);
		recalls.push(0.0);
		let thresholds: Array1<f64> = curve.thresholds.iter().rev().cloned().collect();
		Ok(PrecisionRecallCurveOutput {
			precisions: Array1::from(precisions),
			recalls: Array1::from(recalls),
			thresholds,
		})
	}
}

pub fn precision_recall_curve<'a>(
	labels: ArrayView1<'a, f64>,
	probabilities: ArrayView1<'a, f64>,
	options: &'a PrecisionRecallCurveOptions,
) -> Result<PrecisionRecallCurveOutput, CurveError> {
	PrecisionRecallCurve::compute(PrecisionRecallCurveInput {
		labels,
		probabilities,
		options,
	})
}

#[test]
fn test_precision_recall_curve() {
	let labels = arr1(&[0.0, 0.0, 1.0, 1.0]);
	let probabilities = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let curve = precision_recall_curve(
		labels.view(),
		probabilities.view(),
		&PrecisionRecallCurveOptions::default(),
	)
	.unwrap();
	insta::assert_debug_snapshot!(curve.precisions.to_vec(), @r###"
 [
     0.5,
     0.6666666666666666,
     0.5,
     1.0,
     1.0,
 ]
 "###);
	assert_eq!(curve.recalls, arr1(&[1.0, 1.0, 0.5, 0.5, 0.0]));
	assert_eq!(curve.thresholds, arr1(&[0.125, 0.375, 0.5, 0.75]));
}

#[test]
fn test_precision_recall_curve_drop_intermediate() {
	let labels = arr1(&[1.0, 0.0, 0.0, 0.0, 1.0]);
	let probabilities = arr1(&[0.875, 0.75, 0.5, 0.25, 0.125]);
	let options = PrecisionRecallCurveOptions {
		drop_intermediate: Some(true),
		..Default::default()
	};
	let curve = precision_recall_curve(labels.view(), probabilities.view(), &options).unwrap();
	assert_eq!(curve.thresholds, arr1(&[0.125, 0.25, 0.875]));
	assert_eq!(curve.recalls, arr1(&[1.0, 0.5, 0.5, 0.0]));
}

#[test]
fn test_precision_recall_curve_without_positives() {
	let labels = arr1(&[0.0, 0.0]);
	let probabilities = arr1(&[0.25, 0.75]);
	let curve = precision_recall_curve(
		labels.view(),
		probabilities.view(),
		&PrecisionRecallCurveOptions::default(),
	)
	.unwrap();
	assert_eq!(curve.precisions, arr1(&[0.0, 0.0, 1.0]));
	assert_eq!(curve.recalls, arr1(&[1.0, 1.0, 0.0]));
}

#[test]
fn test_precision_recall_curve_signed_labels() {
	let labels = arr1(&[-1.0, -1.0, 1.0, 1.0]);
	let probabilities = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let curve = precision_recall_curve(
		labels.view(),
		probabilities.view(),
		&PrecisionRecallCurveOptions::default(),
	)
	.unwrap();
	assert_eq!(curve.recalls, arr1(&[1.0, 1.0, 0.5, 0.5, 0.0]));
	assert_eq!(curve.precisions[4], 1.0);
	assert_eq!(curve.precisions[0], 0.5);
}
