use thiserror::Error;

/// The ways a curve computation can reject its input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
	#[error("found input with inconsistent lengths: {name} has {actual} values but y_true has {expected}")]
	LengthMismatch {
		name: &'static str,
		expected: usize,
		actual: usize,
	},
	#[error("y_true is empty")]
	Empty,
	#[error("{name} contains NaN or infinite values")]
	NotFinite { name: &'static str },
	#[error("y_true has {n_classes} classes, pass pos_label to choose the positive class")]
	Multiclass { n_classes: usize },
	#[error("y_true takes values in {classes:?}, pos_label must be given unless the labels are {{0, 1}} or {{-1, 1}}")]
	AmbiguousPosLabel { classes: Vec<f64> },
	#[error("only binary classification is supported, y_true has {n_classes} classes")]
	NotBinary { n_classes: usize },
	#[error("only one class present in y_true, the detection error tradeoff curve is not defined")]
	SingleClass,
	#[error("y_prob has values outside [0, 1]")]
	ProbabilityOutOfRange,
	#[error("n_bins must be at least 1")]
	InvalidBinCount,
}
