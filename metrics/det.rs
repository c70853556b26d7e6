use super::{binary_clf_curve, clf_curve::unique_labels, CurveError, Metric};
use ndarray::prelude::*;

/// Options for [`DetCurve`].
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct DetCurveOptions {
	pub pos_label: Option<f64>,
	pub sample_weight: Option<Vec<f64>>,
}

/// The detection error tradeoff curve plots the false negative rate against the false positive rate.
pub struct DetCurve;

pub struct DetCurveInput<'a> {
	pub labels: ArrayView1<'a, f64>,
	pub scores: ArrayView1<'a, f64>,
	pub options: &'a DetCurveOptions,
}

/// Points are ordered by increasing threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct DetCurveOutput {
	pub false_positive_rates: Array1<f64>,
	pub false_negative_rates: Array1<f64>,
	pub thresholds: Array1<f64>,
}

impl<'a> Metric<'a> for DetCurve {
	type Input = DetCurveInput<'a>;
	type Output = Result<DetCurveOutput, CurveError>;

	fn compute(input: Self::Input) -> Self::Output {
		let DetCurveInput {
			labels,
			scores,
			options,
		} = input;
		let sample_weight = options
			.sample_weight
			.as_ref()
			.map(|w| ArrayView1::from(w.as_slice()));
		let curve = binary_clf_curve(labels, scores, options.pos_label, sample_weight)?;
		match unique_labels(labels)?.len() {
			2 => {}
			1 => return Err(CurveError::SingleClass),
			n_classes => return Err(CurveError::NotBinary { n_classes }),
		}
		let total_positives = curve.total_positives();
		let total_negatives = curve.total_negatives();
		let fps = &curve.false_positives;
		let tps = &curve.true_positives;
		// start at the last point with the lowest false positive count and stop at the first point with every positive found
		let start = fps.iter().take_while(|&&fp| fp <= fps[0]).count() - 1;
		let end = tps.iter().take_while(|&&tp| tp < total_positives).count() + 1;
		let range = start..end;
		let false_positive_rates = fps
			.slice(s![range.clone()])
			.iter()
			.rev()
			.map(|fp| fp / total_negatives)
			.collect();
		let false_negative_rates = tps
			.slice(s![range.clone()])
			.iter()
			.rev()
			.map(|tp| (total_positives - tp) / total_positives)
			.collect();
		let thresholds = curve
			.thresholds
			.slice(s![range])
			.iter()
			.rev()
			.cloned()
			.collect();
		Ok(DetCurveOutput {
			false_positive_rates,
			false_negative_rates,
			thresholds,
		})
	}
}

pub fn det_curve<'a>(
	labels: ArrayView1<'a, f64>,
	scores: ArrayView1<'a, f64>,
	options: &'a DetCurveOptions,
) -> Result<DetCurveOutput, CurveError> {
	DetCurve::compute(DetCurveInput {
		labels,
		scores,
		options,
	})
}

#[test]
fn test_det_curve() {
	let labels = arr1(&[0.0, 0.0, 1.0, 1.0]);
	let scores = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let det = det_curve(labels.view(), scores.view(), &DetCurveOptions::default()).unwrap();
	assert_eq!(det.false_positive_rates, arr1(&[0.5, 0.5, 0.0]));
	assert_eq!(det.false_negative_rates, arr1(&[0.0, 0.5, 0.5]));
	assert_eq!(det.thresholds, arr1(&[0.375, 0.5, 0.75]));
}

#[test]
fn test_det_curve_single_class() {
	let labels = arr1(&[1.0, 1.0]);
	let scores = arr1(&[0.25, 0.75]);
	assert_eq!(
		det_curve(labels.view(), scores.view(), &DetCurveOptions::default()).unwrap_err(),
		CurveError::SingleClass
	);
}

#[test]
fn test_det_curve_multiclass() {
	let labels = arr1(&[0.0, 1.0, 2.0, 2.0]);
	let scores = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let options = DetCurveOptions {
		pos_label: Some(2.0),
		..Default::default()
	};
	assert_eq!(
		det_curve(labels.view(), scores.view(), &options).unwrap_err(),
		CurveError::NotBinary { n_classes: 3 }
	);
}
