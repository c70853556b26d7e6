use super::{
	properties::DefaultProperties, serialize::dump_json, value::numeric_pair, Plot, PlotFile,
	PlotProperties, Value,
};
use anyhow::Result;
use curvelog_metrics::{calibration_curve, CalibrationCurveOptions};
use std::path::Path;

const DEFAULT_PROPERTIES: DefaultProperties = DefaultProperties {
	template: "simple",
	x: "prob_pred",
	y: "prob_true",
	title: "Calibration Curve",
	x_label: "Mean Predicted Probability",
	y_label: "Fraction of Positives",
};

/// Writes the calibration curve of (labels, probabilities) as `{"calibration": [{"prob_true", "prob_pred"}, ...]}`.
#[derive(Debug, Clone)]
pub struct Calibration {
	file: PlotFile,
}

#[derive(serde::Serialize)]
struct CalibrationRecords {
	calibration: Vec<CalibrationRecord>,
}

#[derive(serde::Serialize)]
struct CalibrationRecord {
	prob_true: f64,
	prob_pred: f64,
}

impl Calibration {
	pub fn new(name: &str, output_folder: impl AsRef<Path>) -> Self {
		Self {
			file: PlotFile::new(name, output_folder),
		}
	}
}

impl Plot for Calibration {
	type Options = CalibrationCurveOptions;

	fn file(&self) -> &PlotFile {
		&self.file
	}

	fn get_properties(&self) -> PlotProperties {
		DEFAULT_PROPERTIES.to_properties()
	}

	fn dump(&self, value: &Value, options: &CalibrationCurveOptions) -> Result<()> {
		let (labels, probabilities) = numeric_pair(value)?;
		let curve = calibration_curve(labels.view(), probabilities.view(), options)?;
		let calibration = curve
			.prob_true
			.iter()
			.zip(curve.prob_pred.iter())
			.map(|(&prob_true, &prob_pred)| CalibrationRecord {
				prob_true,
				prob_pred,
			})
			.collect();
		dump_json(&CalibrationRecords { calibration }, &self.output_path()?)
	}
}
