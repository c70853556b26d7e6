/*!
This module defines [`Value`](enum.Value.html), the dynamically typed data handed to a plot, and the conversions from it to the arrays the curves consume.
*/

use super::PlotError;
use ndarray::prelude::*;
use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	List(Vec<Value>),
	Tuple(Vec<Value>),
	Map(BTreeMap<String, Value>),
}

impl Value {
	/// Both elements of a 2-tuple. Lists and tuples of any other length are not pairs.
	pub fn as_pair(&self) -> Option<(&Value, &Value)> {
		match self {
			Value::Tuple(items) if items.len() == 2 => Some((&items[0], &items[1])),
			_ => None,
		}
	}

	/// Booleans count as 0 and 1.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
			Value::Int(value) => Some(*value as f64),
			Value::Float(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) | Value::Tuple(items) => Some(items),
			_ => None,
		}
	}
}

/// True when `value` is a 2-tuple, the only shape a plot accepts.
pub fn could_log(value: &Value) -> bool {
	value.as_pair().is_some()
}

/// Split a (labels, predictions) tuple into two sequences of arbitrary values.
pub fn sequence_pair(value: &Value) -> Result<(&[Value], &[Value]), PlotError> {
	let (labels, predictions) = value.as_pair().ok_or(PlotError::NotAPair)?;
	let labels = labels
		.as_sequence()
		.ok_or(PlotError::NotAList { name: "y_true" })?;
	let predictions = predictions
		.as_sequence()
		.ok_or(PlotError::NotAList { name: "y_pred" })?;
	Ok((labels, predictions))
}

/// Split a (labels, scores) tuple into two numeric arrays.
pub fn numeric_pair(value: &Value) -> Result<(Array1<f64>, Array1<f64>), PlotError> {
	let (labels, scores) = sequence_pair(value)?;
	Ok((to_array(labels, "y_true")?, to_array(scores, "y_score")?))
}

fn to_array(values: &[Value], name: &'static str) -> Result<Array1<f64>, PlotError> {
	values
		.iter()
		.enumerate()
		.map(|(index, value)| {
			value.as_f64().ok_or_else(|| PlotError::NotNumeric {
				name,
				index,
				value: value.to_string(),
			})
		})
		.collect()
}

/**
Booleans print as `True` and `False`, null as `None`, and floats keep their decimal point. A bare string prints as is, while strings nested in a container are quoted, as in `['a', 1]`.
*/
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::String(value) => write!(f, "{}", value),
			_ => write_nested(f, self),
		}
	}
}

fn write_nested(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
	match value {
		Value::Null => write!(f, "None"),
		Value::Bool(true) => write!(f, "True"),
		Value::Bool(false) => write!(f, "False"),
		Value::Int(value) => write!(f, "{}", value),
		Value::Float(value) => write_float(f, *value),
		Value::String(value) => write_quoted(f, value),
		Value::List(items) => {
			write!(f, "[")?;
			write_joined(f, items)?;
			write!(f, "]")
		}
		Value::Tuple(items) => {
			write!(f, "(")?;
			write_joined(f, items)?;
			if items.len() == 1 {
				write!(f, ",")?;
			}
			write!(f, ")")
		}
		Value::Map(entries) => {
			write!(f, "{{")?;
			for (i, (key, value)) in entries.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write_quoted(f, key)?;
				write!(f, ": ")?;
				write_nested(f, value)?;
			}
			write!(f, "}}")
		}
	}
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			write!(f, ", ")?;
		}
		write_nested(f, item)?;
	}
	Ok(())
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
	if value.is_nan() {
		write!(f, "nan")
	} else if value.is_infinite() {
		write!(f, "{}", if value > 0.0 { "inf" } else { "-inf" })
	} else {
		// keep the decimal point so 1.0 and 1 stay distinguishable
		write!(f, "{:?}", value)
	}
}

/// Single quotes unless the string contains a single quote and no double quote.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
	let quote = if value.contains('\'') && !value.contains('"') {
		'"'
	} else {
		'\''
	};
	write!(f, "{}", quote)?;
	for c in value.chars() {
		match c {
			'\\' => write!(f, "\\\\")?,
			'\n' => write!(f, "\\n")?,
			'\t' => write!(f, "\\t")?,
			c if c == quote => write!(f, "\\{}", c)?,
			c => write!(f, "{}", c)?,
		}
	}
	write!(f, "{}", quote)
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(value.into())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl<T> From<Vec<T>> for Value
where
	T: Into<Value>,
{
	fn from(values: Vec<T>) -> Self {
		Value::List(values.into_iter().map(Into::into).collect())
	}
}

impl<A, B> From<(A, B)> for Value
where
	A: Into<Value>,
	B: Into<Value>,
{
	fn from(pair: (A, B)) -> Self {
		Value::Tuple(vec![pair.0.into(), pair.1.into()])
	}
}

#[test]
fn test_could_log() {
	assert!(could_log(&Value::from((vec![0, 1], vec![0.25, 0.75]))));
	assert!(could_log(&Value::Tuple(vec![Value::Int(1), Value::Null])));
	assert!(!could_log(&Value::Tuple(vec![Value::Int(1)])));
	assert!(!could_log(&Value::Tuple(vec![
		Value::Int(1),
		Value::Int(2),
		Value::Int(3)
	])));
	assert!(!could_log(&Value::from(vec![vec![0, 1], vec![1, 0]])));
	assert!(!could_log(&Value::Map(BTreeMap::new())));
	assert!(!could_log(&Value::Float(0.5)));
	assert!(!could_log(&Value::from("roc")));
}

#[test]
fn test_numeric_pair() {
	let value = Value::from((vec![true, false], vec![1, 0]));
	let (labels, scores) = numeric_pair(&value).unwrap();
	assert_eq!(labels, arr1(&[1.0, 0.0]));
	assert_eq!(scores, arr1(&[1.0, 0.0]));
	let value = Value::from((vec!["cat"], vec![0.5]));
	assert_eq!(
		numeric_pair(&value).unwrap_err(),
		PlotError::NotNumeric {
			name: "y_true",
			index: 0,
			value: "cat".to_owned(),
		}
	);
	let value = Value::from((1, vec![0.5]));
	assert_eq!(
		numeric_pair(&value).unwrap_err(),
		PlotError::NotAList { name: "y_true" }
	);
}

#[test]
fn test_display() {
	let value = Value::from((vec![Value::Int(1), Value::Float(1.0)], "a"));
	assert_eq!(value.to_string(), "([1, 1.0], 'a')");
	assert_eq!(Value::from("a").to_string(), "a");
	assert_eq!(Value::from(true).to_string(), "True");
	assert_eq!(Value::from(false).to_string(), "False");
	assert_eq!(Value::Null.to_string(), "None");
	assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
	assert_eq!(Value::Tuple(vec![Value::Int(1)]).to_string(), "(1,)");
	let value = Value::List(vec![Value::from("it's"), Value::Null, Value::from(true)]);
	assert_eq!(value.to_string(), "[\"it's\", None, True]");
	let mut entries = BTreeMap::new();
	entries.insert("k".to_owned(), Value::from(vec!["a"]));
	assert_eq!(Value::Map(entries).to_string(), "{'k': ['a']}");
}
