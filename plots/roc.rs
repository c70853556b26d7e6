use super::{
	properties::DefaultProperties, serialize::dump_json, value::numeric_pair, Plot, PlotFile,
	PlotProperties, Value,
};
use anyhow::Result;
use curvelog_metrics::{roc_curve, RocCurveOptions};
use itertools::izip;
use std::path::Path;

const DEFAULT_PROPERTIES: DefaultProperties = DefaultProperties {
	template: "simple",
	x: "fpr",
	y: "tpr",
	title: "Receiver operating characteristic (ROC)",
	x_label: "False Positive Rate",
	y_label: "True Positive Rate",
};

/// Writes the roc curve of (labels, scores) as `{"roc": [{"fpr", "tpr", "threshold"}, ...]}`.
#[derive(Debug, Clone)]
pub struct Roc {
	file: PlotFile,
}

#[derive(serde::Serialize)]
struct RocRecords {
	roc: Vec<RocRecord>,
}

#[derive(serde::Serialize)]
struct RocRecord {
	fpr: f64,
	tpr: f64,
	threshold: f64,
}

impl Roc {
	pub fn new(name: &str, output_folder: impl AsRef<Path>) -> Self {
		Self {
			file: PlotFile::new(name, output_folder),
		}
	}
}

impl Plot for Roc {
	type Options = RocCurveOptions;

	fn file(&self) -> &PlotFile {
		&self.file
	}

	fn get_properties(&self) -> PlotProperties {
		DEFAULT_PROPERTIES.to_properties()
	}

	fn dump(&self, value: &Value, options: &RocCurveOptions) -> Result<()> {
		let (labels, scores) = numeric_pair(value)?;
		let curve = roc_curve(labels.view(), scores.view(), options)?;
		let roc = izip!(
			curve.false_positive_rates.iter(),
			curve.true_positive_rates.iter(),
			curve.thresholds.iter()
		)
		.map(|(&fpr, &tpr, &threshold)| RocRecord {
			fpr,
			tpr,
			threshold,
		})
		.collect();
		dump_json(&RocRecords { roc }, &self.output_path()?)
	}
}
