/// How a plot is rendered: the template, which record fields go on each axis, and the labels.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlotProperties {
	pub template: String,
	pub x: String,
	pub y: String,
	pub title: String,
	pub x_label: String,
	pub y_label: String,
}

/// User supplied replacements for the display labels of a plot.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct PropertyOverrides {
	pub title: Option<String>,
	pub x_label: Option<String>,
	pub y_label: Option<String>,
}

/// The static defaults of one plot kind.
pub(crate) struct DefaultProperties {
	pub template: &'static str,
	pub x: &'static str,
	pub y: &'static str,
	pub title: &'static str,
	pub x_label: &'static str,
	pub y_label: &'static str,
}

impl DefaultProperties {
	pub fn to_properties(&self) -> PlotProperties {
		PlotProperties {
			template: self.template.to_owned(),
			x: self.x.to_owned(),
			y: self.y.to_owned(),
			title: self.title.to_owned(),
			x_label: self.x_label.to_owned(),
			y_label: self.y_label.to_owned(),
		}
	}
}

impl PlotProperties {
	/// Replace the labels that `overrides` sets and keep the rest.
	pub fn merge(mut self, overrides: &PropertyOverrides) -> Self {
		if let Some(title) = &overrides.title {
			self.title = title.clone();
		}
		if let Some(x_label) = &overrides.x_label {
			self.x_label = x_label.clone();
		}
		if let Some(y_label) = &overrides.y_label {
			self.y_label = y_label.clone();
		}
		self
	}
}

#[test]
fn test_merge() {
	let defaults = DefaultProperties {
		template: "simple",
		x: "fpr",
		y: "tpr",
		title: "ROC",
		x_label: "False Positive Rate",
		y_label: "True Positive Rate",
	};
	let overrides = PropertyOverrides {
		title: Some("Validation ROC".to_owned()),
		..Default::default()
	};
	let properties = defaults.to_properties().merge(&overrides);
	assert_eq!(properties.title, "Validation ROC");
	assert_eq!(properties.x_label, "False Positive Rate");
	assert_eq!(properties.template, "simple");
}
