use super::{PlotError, PlotKind};
use curvelog_metrics::{
	BinStrategy, CalibrationCurveOptions, DetCurveOptions, PrecisionRecallCurveOptions,
	RocCurveOptions,
};

/**
The options a caller may pass along with a plot, before it is known which kind of plot they are for. Each kind accepts a subset of them. Setting an option the kind does not use is an error rather than being silently ignored.
*/
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotOptions {
	pub pos_label: Option<f64>,
	pub sample_weight: Option<Vec<f64>>,
	pub drop_intermediate: Option<bool>,
	pub n_bins: Option<usize>,
	pub strategy: Option<BinStrategy>,
}

impl PlotOptions {
	/// The names of the options that are set.
	fn set_options(&self) -> Vec<&'static str> {
		let mut names = Vec::new();
		if self.pos_label.is_some() {
			names.push("pos_label");
		}
		if self.sample_weight.is_some() {
			names.push("sample_weight");
		}
		if self.drop_intermediate.is_some() {
			names.push("drop_intermediate");
		}
		if self.n_bins.is_some() {
			names.push("n_bins");
		}
		if self.strategy.is_some() {
			names.push("strategy");
		}
		names
	}

	fn check_supported(&self, kind: PlotKind, supported: &[&str]) -> Result<(), PlotError> {
		match self
			.set_options()
			.into_iter()
			.find(|option| !supported.contains(option))
		{
			Some(option) => Err(PlotError::UnsupportedOption { option, kind }),
			None => Ok(()),
		}
	}

	pub fn roc(&self) -> Result<RocCurveOptions, PlotError> {
		self.check_supported(
			PlotKind::Roc,
			&["pos_label", "sample_weight", "drop_intermediate"],
		)?;
		Ok(RocCurveOptions {
			pos_label: self.pos_label,
			sample_weight: self.sample_weight.clone(),
			drop_intermediate: self.drop_intermediate,
		})
	}

	pub fn precision_recall(&self) -> Result<PrecisionRecallCurveOptions, PlotError> {
		self.check_supported(
			PlotKind::PrecisionRecall,
			&["pos_label", "sample_weight", "drop_intermediate"],
		)?;
		Ok(PrecisionRecallCurveOptions {
			pos_label: self.pos_label,
			sample_weight: self.sample_weight.clone(),
			drop_intermediate: self.drop_intermediate,
		})
	}

	pub fn det(&self) -> Result<DetCurveOptions, PlotError> {
		self.check_supported(PlotKind::Det, &["pos_label", "sample_weight"])?;
		Ok(DetCurveOptions {
			pos_label: self.pos_label,
			sample_weight: self.sample_weight.clone(),
		})
	}

	pub fn calibration(&self) -> Result<CalibrationCurveOptions, PlotError> {
		self.check_supported(PlotKind::Calibration, &["pos_label", "n_bins", "strategy"])?;
		Ok(CalibrationCurveOptions {
			pos_label: self.pos_label,
			n_bins: self.n_bins,
			strategy: self.strategy,
		})
	}

	/// The confusion matrix pairs labels directly and takes no options.
	pub fn confusion_matrix(&self) -> Result<(), PlotError> {
		self.check_supported(PlotKind::ConfusionMatrix, &[])
	}
}

#[test]
fn test_unsupported_option() {
	let options = PlotOptions {
		n_bins: Some(10),
		..Default::default()
	};
	assert_eq!(
		options.roc().unwrap_err(),
		PlotError::UnsupportedOption {
			option: "n_bins",
			kind: PlotKind::Roc,
		}
	);
	assert_eq!(options.calibration().unwrap().n_bins, Some(10));
	assert!(options.confusion_matrix().is_err());
	assert!(PlotOptions::default().confusion_matrix().is_ok());
}

#[test]
fn test_deserialize() {
	let options: PlotOptions =
		serde_json::from_str(r#"{ "pos_label": 2, "strategy": "quantile" }"#).unwrap();
	assert_eq!(options.pos_label, Some(2.0));
	assert_eq!(options.strategy, Some(BinStrategy::Quantile));
	assert!(serde_json::from_str::<PlotOptions>(r#"{ "normalize": true }"#).is_err());
}
