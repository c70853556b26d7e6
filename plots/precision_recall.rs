use super::{
	properties::DefaultProperties, serialize::dump_json, value::numeric_pair, Plot, PlotFile,
	PlotProperties, Value,
};
use anyhow::Result;
use curvelog_metrics::{precision_recall_curve, PrecisionRecallCurveOptions};
use itertools::izip;
use std::path::Path;

const DEFAULT_PROPERTIES: DefaultProperties = DefaultProperties {
	template: "simple",
	x: "recall",
	y: "precision",
	title: "Precision-Recall Curve",
	x_label: "Recall",
	y_label: "Precision",
};

/**
Writes the precision recall curve of (labels, probabilities) as `{"precision_recall": [{"precision", "recall", "threshold"}, ...]}`. The curve's final point has no threshold and is not written.
*/
#[derive(Debug, Clone)]
pub struct PrecisionRecall {
	file: PlotFile,
}

#[derive(serde::Serialize)]
struct PrecisionRecallRecords {
	precision_recall: Vec<PrecisionRecallRecord>,
}

#[derive(serde::Serialize)]
struct PrecisionRecallRecord {
	precision: f64,
	recall: f64,
	threshold: f64,
}

impl PrecisionRecall {
	pub fn new(name: &str, output_folder: impl AsRef<Path>) -> Self {
		Self {
			file: PlotFile::new(name, output_folder),
		}
	}
}

impl Plot for PrecisionRecall {
	type Options = PrecisionRecallCurveOptions;

	fn file(&self) -> &PlotFile {
		&self.file
	}

	fn get_properties(&self) -> PlotProperties {
		DEFAULT_PROPERTIES.to_properties()
	}

	fn dump(&self, value: &Value, options: &PrecisionRecallCurveOptions) -> Result<()> {
		let (labels, probabilities) = numeric_pair(value)?;
		let curve = precision_recall_curve(labels.view(), probabilities.view(), options)?;
		let precision_recall = izip!(
			curve.precisions.iter(),
			curve.recalls.iter(),
			curve.thresholds.iter()
		)
		.map(|(&precision, &recall, &threshold)| PrecisionRecallRecord {
			precision,
			recall,
			threshold,
		})
		.collect();
		dump_json(
			&PrecisionRecallRecords { precision_recall },
			&self.output_path()?,
		)
	}
}
