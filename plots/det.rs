use super::{
	properties::DefaultProperties, serialize::dump_json, value::numeric_pair, Plot, PlotFile,
	PlotProperties, Value,
};
use anyhow::Result;
use curvelog_metrics::{det_curve, DetCurveOptions};
use itertools::izip;
use std::path::Path;

const DEFAULT_PROPERTIES: DefaultProperties = DefaultProperties {
	template: "simple",
	x: "fpr",
	y: "fnr",
	title: "Detection error tradeoff (DET)",
	x_label: "False Positive Rate",
	y_label: "False Negative Rate",
};

/// Writes the det curve of (labels, scores) as `{"det": [{"fpr", "fnr", "threshold"}, ...]}`.
#[derive(Debug, Clone)]
pub struct Det {
	file: PlotFile,
}

#[derive(serde::Serialize)]
struct DetRecords {
	det: Vec<DetRecord>,
}

#[derive(serde::Serialize)]
struct DetRecord {
	fpr: f64,
	fnr: f64,
	threshold: f64,
}

impl Det {
	pub fn new(name: &str, output_folder: impl AsRef<Path>) -> Self {
		Self {
			file: PlotFile::new(name, output_folder),
		}
	}
}

impl Plot for Det {
	type Options = DetCurveOptions;

	fn file(&self) -> &PlotFile {
		&self.file
	}

	fn get_properties(&self) -> PlotProperties {
		DEFAULT_PROPERTIES.to_properties()
	}

	fn dump(&self, value: &Value, options: &DetCurveOptions) -> Result<()> {
		let (labels, scores) = numeric_pair(value)?;
		let curve = det_curve(labels.view(), scores.view(), options)?;
		let det = izip!(
			curve.false_positive_rates.iter(),
			curve.false_negative_rates.iter(),
			curve.thresholds.iter()
		)
		.map(|(&fpr, &fnr, &threshold)| DetRecord {
			fpr,
			fnr,
			threshold,
		})
		.collect();
		dump_json(&DetRecords { det }, &self.output_path()?)
	}
}
