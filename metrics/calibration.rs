use super::{
	clf_curve::{check_consistent_length, check_finite, resolve_pos_label, unique_labels},
	CurveError, Metric,
};
use ndarray::prelude::*;

/// How the probability axis is split into bins.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub enum BinStrategy {
	/// Bins of equal width on [0, 1].
	#[serde(rename = "uniform")]
	Uniform,
	/// Bins holding roughly the same number of predictions.
	#[serde(rename = "quantile")]
	Quantile,
}

impl Default for BinStrategy {
	fn default() -> Self {
		BinStrategy::Uniform
	}
}

/// Options for [`CalibrationCurve`].
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct CalibrationCurveOptions {
	pub pos_label: Option<f64>,
	/// Defaults to 5.
	pub n_bins: Option<usize>,
	pub strategy: Option<BinStrategy>,
}

/// The calibration curve compares the mean predicted probability in each bin to the fraction of positives in that bin.
pub struct CalibrationCurve;

pub struct CalibrationCurveInput<'a> {
	pub labels: ArrayView1<'a, f64>,
	pub probabilities: ArrayView1<'a, f64>,
	pub options: &'a CalibrationCurveOptions,
}

/// One value per non-empty bin, in bin order.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationCurveOutput {
	pub prob_true: Array1<f64>,
	pub prob_pred: Array1<f64>,
}

#[derive(Clone, Default)]
struct Bin {
	n_examples: f64,
	n_positives: f64,
	probability_sum: f64,
}

impl<'a> Metric<'a> for CalibrationCurve {
	type Input = CalibrationCurveInput<'a>;
	type Output = Result<CalibrationCurveOutput, CurveError>;

	fn compute(input: Self::Input) -> Self::Output {
		let CalibrationCurveInput {
			labels,
			probabilities,
			options,
		} = input;
		check_consistent_length(labels, probabilities, "y_prob")?;
		check_finite(probabilities, "y_prob")?;
		let n_bins = options.n_bins.unwrap_or(5);
		if n_bins == 0 {
			return Err(CurveError::InvalidBinCount);
		}
		let classes = unique_labels(labels)?;
		if classes.len() > 2 {
			return Err(CurveError::NotBinary {
				n_classes: classes.len(),
			});
		}
		if probabilities.iter().any(|&p| !(0.0..=1.0).contains(&p)) {
			return Err(CurveError::ProbabilityOutOfRange);
		}
		let pos_label = resolve_pos_label(&classes, options.pos_label)?;
		let edges: Vec<f64> = match options.strategy.unwrap_or_default() {
			BinStrategy::Uniform => linspace(0.0, 1.0, n_bins + 1),
			BinStrategy::Quantile => {
				let mut sorted = probabilities.to_vec();
				sorted.sort_by(|a, b| a.total_cmp(b));
				linspace(0.0, 1.0, n_bins + 1)
					.into_iter()
					.map(|q| quantile(&sorted, q))
					.collect()
			}
		};
		let inner_edges = &edges[1..edges.len() - 1];
		let mut bins = vec![Bin::default(); edges.len()];
		for (&label, &probability) in labels.iter().zip(probabilities.iter()) {
			// a probability equal to an edge belongs to the bin below it
			let bin_index = inner_edges
				.iter()
				.filter(|&&edge| edge < probability)
				.count();
			let bin = &mut bins[bin_index];
			bin.n_examples += 1.0;
			bin.probability_sum += probability;
			if label == pos_label {
				bin.n_positives += 1.0;
			}
		}
		let non_empty = bins.iter().filter(|bin| bin.n_examples != 0.0);
		let prob_true = non_empty
			.clone()
			.map(|bin| bin.n_positives / bin.n_examples)
			.collect();
		let prob_pred = non_empty
			.map(|bin| bin.probability_sum / bin.n_examples)
			.collect();
		Ok(CalibrationCurveOutput {
			prob_true,
			prob_pred,
		})
	}
}

pub fn calibration_curve<'a>(
	labels: ArrayView1<'a, f64>,
	probabilities: ArrayView1<'a, f64>,
	options: &'a CalibrationCurveOptions,
) -> Result<CalibrationCurveOutput, CurveError> {
	CalibrationCurve::compute(CalibrationCurveInput {
		labels,
		probabilities,
		options,
	})
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
	let step = (stop - start) / (n - 1) as f64;
	let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
	if let Some(last) = values.last_mut() {
		*last = stop;
	}
	values
}

/// The `q`-th quantile of `sorted`, linearly interpolating between the closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
	let position = q * (sorted.len() - 1) as f64;
	let lower = position.floor() as usize;
	let upper = position.ceil() as usize;
	let fraction = position - lower as f64;
	sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[test]
fn test_calibration_curve() {
	let labels = arr1(&[0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
	let probabilities = arr1(&[0.0625, 0.25, 0.5, 0.75, 0.875, 0.5]);
	let options = CalibrationCurveOptions {
		n_bins: Some(2),
		..Default::default()
	};
	let curve = calibration_curve(labels.view(), probabilities.view(), &options).unwrap();
	assert_eq!(curve.prob_true, arr1(&[0.25, 1.0]));
	assert_eq!(curve.prob_pred, arr1(&[0.328125, 0.8125]));
}

#[test]
fn test_calibration_curve_skips_empty_bins() {
	let labels = arr1(&[0.0, 1.0]);
	let probabilities = arr1(&[0.0, 1.0]);
	let curve = calibration_curve(
		labels.view(),
		probabilities.view(),
		&CalibrationCurveOptions::default(),
	)
	.unwrap();
	assert_eq!(curve.prob_true, arr1(&[0.0, 1.0]));
	assert_eq!(curve.prob_pred, arr1(&[0.0, 1.0]));
}

#[test]
fn test_calibration_curve_quantile() {
	let labels = arr1(&[0.0, 0.0, 1.0, 1.0, 1.0]);
	let probabilities = arr1(&[0.0, 0.25, 0.5, 0.75, 1.0]);
	let options = CalibrationCurveOptions {
		n_bins: Some(2),
		strategy: Some(BinStrategy::Quantile),
		..Default::default()
	};
	let curve = calibration_curve(labels.view(), probabilities.view(), &options).unwrap();
	insta::assert_debug_snapshot!(curve.prob_true.to_vec(), @r###"
 [
     0.3333333333333333,
     1.0,
 ]
 "###);
	assert_eq!(curve.prob_pred, arr1(&[0.25, 0.875]));
}

#[test]
fn test_calibration_curve_rejects_bad_input() {
	let labels = arr1(&[0.0, 1.0]);
	let probabilities = arr1(&[0.5, 1.5]);
	let options = CalibrationCurveOptions::default();
	assert_eq!(
		calibration_curve(labels.view(), probabilities.view(), &options).unwrap_err(),
		CurveError::ProbabilityOutOfRange
	);
	let labels = arr1(&[0.0, 1.0, 2.0]);
	let probabilities = arr1(&[0.25, 0.5, 0.75]);
	assert_eq!(
		calibration_curve(labels.view(), probabilities.view(), &options).unwrap_err(),
		CurveError::NotBinary { n_classes: 3 }
	);
	let options = CalibrationCurveOptions {
		n_bins: Some(0),
		..Default::default()
	};
	assert_eq!(
		calibration_curve(labels.view(), probabilities.view(), &options).unwrap_err(),
		CurveError::InvalidBinCount
	);
}
