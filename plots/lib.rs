/*!
This crate turns classifier predictions into plot files. Each plot takes a `(labels, predictions)` tuple, computes a curve with [`curvelog_metrics`](../curvelog_metrics/index.html), and writes the points as JSON records to `<output_folder>/sklearn/<name>.json`. Alongside the file, [`get_properties`](trait.Plot.html#tymethod.get_properties) describes how to render it.

| kind | key | fields |
|------|-----|--------|
| `roc` | `roc` | `fpr`, `tpr`, `threshold` |
| `precision_recall` | `precision_recall` | `precision`, `recall`, `threshold` |
| `det` | `det` | `fpr`, `fnr`, `threshold` |
| `confusion_matrix` | (bare array) | `actual`, `predicted` |
| `calibration` | `calibration` | `prob_true`, `prob_pred` |
*/

#![allow(clippy::tabs_in_doc_comments)]

mod calibration;
mod confusion_matrix;
mod det;
mod error;
mod file;
mod options;
mod precision_recall;
mod properties;
mod roc;
mod serialize;
mod value;

pub use self::calibration::Calibration;
pub use self::confusion_matrix::ConfusionMatrix;
pub use self::det::Det;
pub use self::error::PlotError;
pub use self::file::{PlotFile, SUBFOLDER, SUFFIX};
pub use self::options::PlotOptions;
pub use self::precision_recall::PrecisionRecall;
pub use self::properties::{PlotProperties, PropertyOverrides};
pub use self::roc::Roc;
pub use self::serialize::dump_json;
pub use self::value::{could_log, numeric_pair, sequence_pair, Value};

use anyhow::Result;
use std::{fmt, path::Path, path::PathBuf, str::FromStr};

/// The common interface of every plot kind.
pub trait Plot {
	/// The parameters forwarded to the curve computation.
	type Options;
	fn file(&self) -> &PlotFile;
	/// A fresh copy of the render properties. Changing it does not affect the plot.
	fn get_properties(&self) -> PlotProperties;
	/// Compute the plot from `value` and write it to [`output_path`](#method.output_path).
	fn dump(&self, value: &Value, options: &Self::Options) -> Result<()>;
	fn output_path(&self) -> Result<PathBuf> {
		self.file().output_path()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum PlotKind {
	#[serde(rename = "roc")]
	Roc,
	#[serde(rename = "precision_recall")]
	PrecisionRecall,
	#[serde(rename = "det")]
	Det,
	#[serde(rename = "confusion_matrix")]
	ConfusionMatrix,
	#[serde(rename = "calibration")]
	Calibration,
}

impl PlotKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			PlotKind::Roc => "roc",
			PlotKind::PrecisionRecall => "precision_recall",
			PlotKind::Det => "det",
			PlotKind::ConfusionMatrix => "confusion_matrix",
			PlotKind::Calibration => "calibration",
		}
	}
}

impl fmt::Display for PlotKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for PlotKind {
	type Err = PlotError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"roc" => Ok(PlotKind::Roc),
			"precision_recall" => Ok(PlotKind::PrecisionRecall),
			"det" => Ok(PlotKind::Det),
			"confusion_matrix" => Ok(PlotKind::ConfusionMatrix),
			"calibration" => Ok(PlotKind::Calibration),
			_ => Err(PlotError::UnknownKind(s.to_owned())),
		}
	}
}

/// One plot of any kind.
#[derive(Debug, Clone)]
pub enum SklearnPlot {
	Roc(Roc),
	PrecisionRecall(PrecisionRecall),
	Det(Det),
	ConfusionMatrix(ConfusionMatrix),
	Calibration(Calibration),
}

impl SklearnPlot {
	/// `normalized` only affects confusion matrices.
	pub fn new(kind: PlotKind, name: &str, output_folder: impl AsRef<Path>, normalized: bool) -> Self {
		match kind {
			PlotKind::Roc => SklearnPlot::Roc(Roc::new(name, output_folder)),
			PlotKind::PrecisionRecall => {
				SklearnPlot::PrecisionRecall(PrecisionRecall::new(name, output_folder))
			}
			PlotKind::Det => SklearnPlot::Det(Det::new(name, output_folder)),
			PlotKind::ConfusionMatrix => {
				SklearnPlot::ConfusionMatrix(ConfusionMatrix::new(name, output_folder, normalized))
			}
			PlotKind::Calibration => SklearnPlot::Calibration(Calibration::new(name, output_folder)),
		}
	}

	pub fn kind(&self) -> PlotKind {
		match self {
			SklearnPlot::Roc(_) => PlotKind::Roc,
			SklearnPlot::PrecisionRecall(_) => PlotKind::PrecisionRecall,
			SklearnPlot::Det(_) => PlotKind::Det,
			SklearnPlot::ConfusionMatrix(_) => PlotKind::ConfusionMatrix,
			SklearnPlot::Calibration(_) => PlotKind::Calibration,
		}
	}

	pub fn could_log(value: &Value) -> bool {
		could_log(value)
	}

	pub fn file(&self) -> &PlotFile {
		match self {
			SklearnPlot::Roc(plot) => plot.file(),
			SklearnPlot::PrecisionRecall(plot) => plot.file(),
			SklearnPlot::Det(plot) => plot.file(),
			SklearnPlot::ConfusionMatrix(plot) => plot.file(),
			SklearnPlot::Calibration(plot) => plot.file(),
		}
	}

	pub fn output_path(&self) -> Result<PathBuf> {
		self.file().output_path()
	}

	pub fn get_properties(&self) -> PlotProperties {
		match self {
			SklearnPlot::Roc(plot) => plot.get_properties(),
			SklearnPlot::PrecisionRecall(plot) => plot.get_properties(),
			SklearnPlot::Det(plot) => plot.get_properties(),
			SklearnPlot::ConfusionMatrix(plot) => plot.get_properties(),
			SklearnPlot::Calibration(plot) => plot.get_properties(),
		}
	}

	/// Dump with every option left at its default.
	pub fn dump(&self, value: &Value) -> Result<()> {
		self.dump_with(value, &PlotOptions::default())
	}

	/// Dump with `options`, failing if any option that is set does not apply to this kind of plot.
	pub fn dump_with(&self, value: &Value, options: &PlotOptions) -> Result<()> {
		match self {
			SklearnPlot::Roc(plot) => plot.dump(value, &options.roc()?),
			SklearnPlot::PrecisionRecall(plot) => plot.dump(value, &options.precision_recall()?),
			SklearnPlot::Det(plot) => plot.dump(value, &options.det()?),
			SklearnPlot::ConfusionMatrix(plot) => {
				options.confusion_matrix()?;
				plot.dump(value, &())
			}
			SklearnPlot::Calibration(plot) => plot.dump(value, &options.calibration()?),
		}
	}
}

/// Everything about a plot request besides the data.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(default)]
pub struct PlotConfig {
	/// Defaults to the kind, such as `roc`.
	pub name: Option<String>,
	pub normalized: bool,
	pub properties: PropertyOverrides,
	pub options: PlotOptions,
}

/**
Check that `value` can be plotted as `kind`, write the plot, and return its render properties with the overrides in `config` applied.
*/
pub fn log_sklearn_plot(
	kind: PlotKind,
	value: &Value,
	output_folder: impl AsRef<Path>,
	config: &PlotConfig,
) -> Result<PlotProperties> {
	let name = config.name.as_deref().unwrap_or_else(|| kind.as_str());
	if !SklearnPlot::could_log(value) {
		return Err(PlotError::InvalidDataType {
			name: name.to_owned(),
			kind,
		}
		.into());
	}
	let plot = SklearnPlot::new(kind, name, output_folder, config.normalized);
	plot.dump_with(value, &config.options)?;
	Ok(plot.get_properties().merge(&config.properties))
}

#[test]
fn test_plot_kind() {
	for kind in &[
		PlotKind::Roc,
		PlotKind::PrecisionRecall,
		PlotKind::Det,
		PlotKind::ConfusionMatrix,
		PlotKind::Calibration,
	] {
		assert_eq!(kind.as_str().parse::<PlotKind>().unwrap(), *kind);
		assert_eq!(SklearnPlot::new(*kind, "plot", "out", false).kind(), *kind);
	}
	assert_eq!(
		"histogram".parse::<PlotKind>().unwrap_err(),
		PlotError::UnknownKind("histogram".to_owned())
	);
}

#[test]
fn test_get_properties() {
	let plot = SklearnPlot::new(PlotKind::Roc, "roc", "out", false);
	let mut properties = plot.get_properties();
	properties.title = "changed".to_owned();
	properties.template = "linear".to_owned();
	let properties = plot.get_properties();
	assert_eq!(properties.title, "Receiver operating characteristic (ROC)");
	assert_eq!(properties.template, "simple");
	insta::assert_debug_snapshot!(SklearnPlot::new(PlotKind::Calibration, "c", "out", true).get_properties(), @r###"
 PlotProperties {
     template: "simple",
     x: "prob_pred",
     y: "prob_true",
     title: "Calibration Curve",
     x_label: "Mean Predicted Probability",
     y_label: "Fraction of Positives",
 }
 "###);
}
