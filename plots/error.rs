use super::PlotKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
	#[error("data type of {name} is not supported, {kind} plots expect a (labels, predictions) tuple")]
	InvalidDataType { name: String, kind: PlotKind },
	#[error("expected a (labels, predictions) tuple")]
	NotAPair,
	#[error("{name} must be a list or tuple")]
	NotAList { name: &'static str },
	#[error("{name}[{index}] is not numeric: {value}")]
	NotNumeric {
		name: &'static str,
		index: usize,
		value: String,
	},
	#[error("option {option} is not supported by {kind} plots")]
	UnsupportedOption { option: &'static str, kind: PlotKind },
	#[error("unknown plot kind: {0}")]
	UnknownKind(String),
}
