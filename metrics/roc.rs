use super::{binary_clf_curve, CurveError, Metric};
use ndarray::prelude::*;

/// Options for [`RocCurve`].
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct RocCurveOptions {
	/// The label of the positive class. Inferred when the labels are {0, 1} or {-1, 1}.
	pub pos_label: Option<f64>,
	pub sample_weight: Option<Vec<f64>>,
	/// Drop thresholds that would not change the shape of the plotted curve. Defaults to true.
	pub drop_intermediate: Option<bool>,
}

/// The receiver operating characteristic curve plots the true positive rate against the false positive rate as the classification threshold decreases.
pub struct RocCurve;

pub struct RocCurveInput<'a> {
	pub labels: ArrayView1<'a, f64>,
	pub scores: ArrayView1<'a, f64>,
	pub options: &'a RocCurveOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocCurveOutput {
	pub false_positive_rates: Array1<f64>,
	pub true_positive_rates: Array1<f64>,
	/// Decreasing thresholds. The first is a dummy threshold above every score, marking the point where nothing is predicted positive.
	pub thresholds: Array1<f64>,
}

impl<'a> Metric<'a> for RocCurve {
	type Input = RocCurveInput<'a>;
	type Output = Result<RocCurveOutput, CurveError>;

	fn compute(input: Self::Input) -> Self::Output {
		let RocCurveInput {
			labels,
			scores,
			options,
		} = input;
		let sample_weight = options
			.sample_weight
			.as_ref()
			.map(|w| ArrayView1::from(w.as_slice()));
		let mut curve = binary_clf_curve(labels, scores, options.pos_label, sample_weight)?;
		if options.drop_intermediate.unwrap_or(true) && curve.len() > 2 {
			curve = curve.select(&corner_indices(
				curve.false_positives.view(),
				curve.true_positives.view(),
			));
		}
		// add a point at (0, 0) with a threshold no example reaches
		let n_points = curve.len() + 1;
		let mut false_positives = Vec::with_capacity(n_points);
		let mut true_positives = Vec::with_capacity(n_points);
		let mut thresholds = Vec::with_capacity(n_points);
		false_positives.push(0.0);
		true_positives.push(0.0);
		thresholds.push(curve.thresholds[0] + 1.0);
		false_positives.extend(curve.false_positives.iter());
		true_positives.extend(curve.true_positives.iter());
		thresholds.extend(curve.thresholds.iter());
		let false_positive_rates = normalize(
			Array1::from(false_positives),
			curve.total_negatives(),
			"no negative samples in y_true, false positive rate is undefined",
		);
		let true_positive_rates = normalize(
			Array1::from(true_positives),
			curve.total_positives(),
			"no positive samples in y_true, true positive rate is undefined",
		);
		Ok(RocCurveOutput {
			false_positive_rates,
			true_positive_rates,
			thresholds: Array1::from(thresholds),
		})
	}
}

pub fn roc_curve<'a>(
	labels: ArrayView1<'a, f64>,
	scores: ArrayView1<'a, f64>,
	options: &'a RocCurveOptions,
) -> Result<RocCurveOutput, CurveError> {
	RocCurve::compute(RocCurveInput {
		labels,
		scores,
		options,
	})
}

/// Indexes of the points where the curve changes direction, plus both endpoints.
fn corner_indices(false_positives: ArrayView1<f64>, true_positives: ArrayView1<f64>) -> Vec<usize> {
	let n = false_positives.len();
	let second_difference =
		|values: &ArrayView1<f64>, i: usize| values[i - 1] - 2.0 * values[i] + values[i + 1];
	(0..n)
		.filter(|&i| {
			i == 0
				|| i == n - 1
				|| second_difference(&false_positives, i) != 0.0
				|| second_difference(&true_positives, i) != 0.0
		})
		.collect()
}

fn normalize(counts: Array1<f64>, total: f64, warning: &str) -> Array1<f64> {
	if total <= 0.0 {
		log::warn!("{}", warning);
		Array1::from_elem(counts.len(), f64::NAN)
	} else {
		counts / total
	}
}

#[test]
fn test_roc_curve() {
	let labels = arr1(&[0.0, 0.0, 1.0, 1.0]);
	let scores = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let roc = roc_curve(labels.view(), scores.view(), &RocCurveOptions::default()).unwrap();
	insta::assert_debug_snapshot!(roc.false_positive_rates.to_vec(), @r###"
 [
     0.0,
     0.0,
     0.5,
     0.5,
     1.0,
 ]
 "###);
	insta::assert_debug_snapshot!(roc.true_positive_rates.to_vec(), @r###"
 [
     0.0,
     0.5,
     0.5,
     1.0,
     1.0,
 ]
 "###);
	insta::assert_debug_snapshot!(roc.thresholds.to_vec(), @r###"
 [
     1.75,
     0.75,
     0.5,
     0.375,
     0.125,
 ]
 "###);
}

#[test]
fn test_roc_curve_drop_intermediate() {
	let labels = arr1(&[1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
	let scores = arr1(&[0.75, 0.625, 0.5, 0.375, 0.25, 0.125]);
	let roc = roc_curve(labels.view(), scores.view(), &RocCurveOptions::default()).unwrap();
	assert_eq!(roc.thresholds, arr1(&[1.75, 0.75, 0.5, 0.125]));
	assert_eq!(roc.false_positive_rates, arr1(&[0.0, 0.0, 0.0, 1.0]));
	assert_eq!(roc.true_positive_rates, arr1(&[0.0, 1.0 / 3.0, 1.0, 1.0]));
	let options = RocCurveOptions {
		drop_intermediate: Some(false),
		..Default::default()
	};
	let roc = roc_curve(labels.view(), scores.view(), &options).unwrap();
	assert_eq!(roc.thresholds.len(), 7);
}

#[test]
fn test_roc_curve_without_negatives() {
	let labels = arr1(&[1.0, 1.0]);
	let scores = arr1(&[0.25, 0.75]);
	let roc = roc_curve(labels.view(), scores.view(), &RocCurveOptions::default()).unwrap();
	assert!(roc.false_positive_rates.iter().all(|rate| rate.is_nan()));
	assert_eq!(roc.true_positive_rates, arr1(&[0.0, 0.5, 1.0]));
}

#[test]
fn test_roc_curve_zero_weight() {
	let labels = arr1(&[0.0, 1.0, 0.0, 1.0]);
	let scores = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let options = RocCurveOptions {
		sample_weight: Some(vec![1.0, 1.0, 0.0, 1.0]),
		drop_intermediate: Some(false),
		..Default::default()
	};
	let roc = roc_curve(labels.view(), scores.view(), &options).unwrap();
	assert_eq!(roc.thresholds, arr1(&[1.75, 0.75, 0.5, 0.125]));
	assert_eq!(roc.false_positive_rates, arr1(&[0.0, 0.0, 0.0, 1.0]));
	assert_eq!(roc.true_positive_rates, arr1(&[0.0, 0.5, 1.0, 1.0]));
}

#[test]
fn test_roc_curve_signed_labels() {
	let scores = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let options = RocCurveOptions::default();
	let signed = roc_curve(arr1(&[-1.0, -1.0, 1.0, 1.0]).view(), scores.view(), &options).unwrap();
	let binary = roc_curve(arr1(&[0.0, 0.0, 1.0, 1.0]).view(), scores.view(), &options).unwrap();
	assert_eq!(signed, binary);
	assert_eq!(signed.true_positive_rates, arr1(&[0.0, 0.5, 0.5, 1.0, 1.0]));
}
