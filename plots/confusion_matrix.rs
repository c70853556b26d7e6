use super::{
	properties::DefaultProperties, serialize::dump_json, value::sequence_pair, Plot, PlotFile,
	PlotProperties, Value,
};
use anyhow::Result;
use std::path::Path;

const DEFAULT_PROPERTIES: DefaultProperties = DefaultProperties {
	template: "confusion",
	x: "actual",
	y: "predicted",
	title: "Confusion Matrix",
	x_label: "True Label",
	y_label: "Predicted Label",
};

const NORMALIZED_TEMPLATE: &str = "confusion_normalized";

/**
Writes (actual, predicted) label pairs as a bare array of `{"actual", "predicted"}` records, with both labels converted to strings. The pairs are not counted here: tabulating them into a matrix is left to the renderer, which also does the normalizing when the plot is `normalized`.
*/
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
	file: PlotFile,
	normalized: bool,
}

#[derive(serde::Serialize)]
struct ConfusionRecord {
	actual: String,
	predicted: String,
}

impl ConfusionMatrix {
	pub fn new(name: &str, output_folder: impl AsRef<Path>, normalized: bool) -> Self {
		Self {
			file: PlotFile::new(name, output_folder),
			normalized,
		}
	}

	pub fn normalized(&self) -> bool {
		self.normalized
	}
}

impl Plot for ConfusionMatrix {
	type Options = ();

	fn file(&self) -> &PlotFile {
		&self.file
	}

	fn get_properties(&self) -> PlotProperties {
		let mut properties = DEFAULT_PROPERTIES.to_properties();
		if self.normalized {
			properties.template = NORMALIZED_TEMPLATE.to_owned();
		}
		properties
	}

	fn dump(&self, value: &Value, _: &()) -> Result<()> {
		let (actual, predicted) = sequence_pair(value)?;
		let records: Vec<ConfusionRecord> = actual
			.iter()
			.zip(predicted.iter())
			.map(|(actual, predicted)| ConfusionRecord {
				actual: actual.to_string(),
				predicted: predicted.to_string(),
			})
			.collect();
		dump_json(&records, &self.output_path()?)
	}
}

#[test]
fn test_template() {
	let plot = ConfusionMatrix::new("cm", "out", false);
	assert!(!plot.normalized());
	assert_eq!(plot.get_properties().template, "confusion");
	let plot = ConfusionMatrix::new("cm", "out", true);
	assert!(plot.normalized());
	assert_eq!(plot.get_properties().template, "confusion_normalized");
	assert_eq!(plot.get_properties().title, "Confusion Matrix");
}
