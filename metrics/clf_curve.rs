use super::CurveError;
use ndarray::prelude::*;

/**
The cumulative counts of true positives and false positives at each distinct score, ordered from the highest score to the lowest. Unlike the roc curve, the counts are raw (and weighted if sample weights are given) rather than rates. The roc, precision recall and det curves are all computed from this.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryClfCurve {
	/// The weighted count of negatives with score >= threshold.
	pub false_positives: Array1<f64>,
	/// The weighted count of positives with score >= threshold.
	pub true_positives: Array1<f64>,
	/// The distinct scores in decreasing order.
	pub thresholds: Array1<f64>,
}

impl BinaryClfCurve {
	pub fn len(&self) -> usize {
		self.thresholds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.thresholds.is_empty()
	}

	/// Keep only the points at `indices`.
	pub fn select(&self, indices: &[usize]) -> Self {
		Self {
			false_positives: self.false_positives.select(Axis(0), indices),
			true_positives: self.true_positives.select(Axis(0), indices),
			thresholds: self.thresholds.select(Axis(0), indices),
		}
	}

	/// The total weight of negatives.
	pub fn total_negatives(&self) -> f64 {
		self.false_positives[self.len() - 1]
	}

	/// The total weight of positives.
	pub fn total_positives(&self) -> f64 {
		self.true_positives[self.len() - 1]
	}
}

pub fn binary_clf_curve(
	labels: ArrayView1<f64>,
	scores: ArrayView1<f64>,
	pos_label: Option<f64>,
	sample_weight: Option<ArrayView1<f64>>,
) -> Result<BinaryClfCurve, CurveError> {
	check_consistent_length(labels, scores, "y_score")?;
	if let Some(sample_weight) = sample_weight {
		check_consistent_length(labels, sample_weight, "sample_weight")?;
		check_finite(sample_weight, "sample_weight")?;
	}
	check_finite(scores, "y_score")?;
	let classes = unique_labels(labels)?;
	if classes.len() > 2 && pos_label.is_none() {
		return Err(CurveError::Multiclass {
			n_classes: classes.len(),
		});
	}
	let pos_label = resolve_pos_label(&classes, pos_label)?;
	// zero-weight examples contribute no threshold
	let mut order: Vec<usize> = (0..scores.len())
		.filter(|&index| sample_weight.map(|w| w[index] != 0.0).unwrap_or(true))
		.collect();
	if order.is_empty() {
		return Err(CurveError::Empty);
	}
	order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
	let mut false_positives = Vec::new();
	let mut true_positives = Vec::new();
	let mut thresholds = Vec::new();
	let mut tp = 0.0;
	let mut fp = 0.0;
	for (position, &index) in order.iter().enumerate() {
		let weight = sample_weight.map(|w| w[index]).unwrap_or(1.0);
		if labels[index] == pos_label {
			tp += weight;
		} else {
			fp += weight;
		}
		let score = scores[index];
		// emit a point once every example sharing this score has been counted
		let last_with_score = order
			.get(position + 1)
			.map(|&next| scores[next] != score)
			.unwrap_or(true);
		if last_with_score {
			true_positives.push(tp);
			false_positives.push(fp);
			thresholds.push(score);
		}
	}
	Ok(BinaryClfCurve {
		false_positives: Array1::from(false_positives),
		true_positives: Array1::from(true_positives),
		thresholds: Array1::from(thresholds),
	})
}

pub(crate) fn check_consistent_length(
	labels: ArrayView1<f64>,
	other: ArrayView1<f64>,
	name: &'static str,
) -> Result<(), CurveError> {
	if labels.len() != other.len() {
		return Err(CurveError::LengthMismatch {
			name,
			expected: labels.len(),
			actual: other.len(),
		});
	}
	Ok(())
}

pub(crate) fn check_finite(values: ArrayView1<f64>, name: &'static str) -> Result<(), CurveError> {
	if values.iter().any(|value| !value.is_finite()) {
		return Err(CurveError::NotFinite { name });
	}
	Ok(())
}

/// The sorted distinct values of `labels`.
pub(crate) fn unique_labels(labels: ArrayView1<f64>) -> Result<Vec<f64>, CurveError> {
	if labels.is_empty() {
		return Err(CurveError::Empty);
	}
	check_finite(labels, "y_true")?;
	let mut classes = labels.to_vec();
	classes.sort_by(|a, b| a.total_cmp(b));
	classes.dedup();
	Ok(classes)
}

/**
Without an explicit `pos_label`, the labels must look like {0, 1} or {-1, 1} (or a single one of those values), in which case `1` is the positive class.
*/
pub(crate) fn resolve_pos_label(classes: &[f64], pos_label: Option<f64>) -> Result<f64, CurveError> {
	if let Some(pos_label) = pos_label {
		return Ok(pos_label);
	}
	let is_subset_of = |allowed: &[f64]| classes.iter().all(|class| allowed.contains(class));
	if is_subset_of(&[0.0, 1.0]) || is_subset_of(&[-1.0, 1.0]) {
		Ok(1.0)
	} else {
		Err(CurveError::AmbiguousPosLabel {
			classes: classes.to_vec(),
		})
	}
}

#[test]
fn test_binary_clf_curve() {
	let labels = arr1(&[1.0, 1.0, 0.0, 0.0]);
	let scores = arr1(&[0.75, 0.5, 0.5, 0.25]);
	let curve = binary_clf_curve(labels.view(), scores.view(), None, None).unwrap();
	assert_eq!(
		curve,
		BinaryClfCurve {
			false_positives: arr1(&[0.0, 1.0, 2.0]),
			true_positives: arr1(&[1.0, 2.0, 2.0]),
			thresholds: arr1(&[0.75, 0.5, 0.25]),
		}
	);
}

#[test]
fn test_binary_clf_curve_sample_weight() {
	let labels = arr1(&[1.0, 0.0, 1.0]);
	let scores = arr1(&[0.25, 0.5, 0.75]);
	let weights = arr1(&[2.0, 0.5, 1.0]);
	let curve =
		binary_clf_curve(labels.view(), scores.view(), None, Some(weights.view())).unwrap();
	assert_eq!(curve.true_positives, arr1(&[1.0, 1.0, 3.0]));
	assert_eq!(curve.false_positives, arr1(&[0.0, 0.5, 0.5]));
}

#[test]
fn test_binary_clf_curve_pos_label() {
	let labels = arr1(&[2.0, 3.0, 2.0]);
	let scores = arr1(&[0.25, 0.5, 0.75]);
	let error = binary_clf_curve(labels.view(), scores.view(), None, None).unwrap_err();
	assert_eq!(
		error,
		CurveError::AmbiguousPosLabel {
			classes: vec![2.0, 3.0]
		}
	);
	let curve = binary_clf_curve(labels.view(), scores.view(), Some(2.0), None).unwrap();
	assert_eq!(curve.true_positives, arr1(&[1.0, 1.0, 2.0]));
}

#[test]
fn test_binary_clf_curve_rejects_bad_input() {
	let labels = arr1(&[0.0, 1.0, 2.0]);
	let scores = arr1(&[0.25, 0.5, 0.75]);
	assert_eq!(
		binary_clf_curve(labels.view(), scores.view(), None, None).unwrap_err(),
		CurveError::Multiclass { n_classes: 3 }
	);
	let short = arr1(&[0.25, 0.5]);
	assert_eq!(
		binary_clf_curve(labels.view(), short.view(), None, None).unwrap_err(),
		CurveError::LengthMismatch {
			name: "y_score",
			expected: 3,
			actual: 2,
		}
	);
	let labels = arr1(&[0.0, 1.0]);
	let scores = arr1(&[0.25, f64::NAN]);
	assert_eq!(
		binary_clf_curve(labels.view(), scores.view(), None, None).unwrap_err(),
		CurveError::NotFinite { name: "y_score" }
	);
	let empty = Array1::<f64>::zeros(0);
	assert_eq!(
		binary_clf_curve(empty.view(), empty.view(), None, None).unwrap_err(),
		CurveError::Empty
	);
}

#[test]
fn test_binary_clf_curve_zero_weight() {
	let labels = arr1(&[0.0, 1.0, 0.0, 1.0]);
	let scores = arr1(&[0.125, 0.5, 0.375, 0.75]);
	let weights = arr1(&[1.0, 1.0, 0.0, 1.0]);
	let curve =
		binary_clf_curve(labels.view(), scores.view(), None, Some(weights.view())).unwrap();
	assert_eq!(curve.thresholds, arr1(&[0.75, 0.5, 0.125]));
	assert_eq!(curve.false_positives, arr1(&[0.0, 0.0, 1.0]));
	let weights = arr1(&[0.0, 0.0, 0.0, 0.0]);
	assert_eq!(
		binary_clf_curve(labels.view(), scores.view(), None, Some(weights.view())).unwrap_err(),
		CurveError::Empty
	);
	let weights = arr1(&[1.0, f64::NAN, 1.0, 1.0]);
	assert_eq!(
		binary_clf_curve(labels.view(), scores.view(), None, Some(weights.view())).unwrap_err(),
		CurveError::NotFinite {
			name: "sample_weight"
		}
	);
	let weights = arr1(&[1.0, 1.0, f64::INFINITY, 1.0]);
	assert_eq!(
		binary_clf_curve(labels.view(), scores.view(), None, Some(weights.view())).unwrap_err(),
		CurveError::NotFinite {
			name: "sample_weight"
		}
	);
}
