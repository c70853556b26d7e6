use curvelog_metrics::{CalibrationCurveOptions, RocCurveOptions};
use curvelog_plots::{
	log_sklearn_plot, Calibration, ConfusionMatrix, Det, Plot, PlotConfig, PlotKind, PlotOptions,
	PrecisionRecall, PropertyOverrides, Roc, SklearnPlot, Value,
};
use serde_json::{json, Value as Json};
use std::path::Path;

fn read_json(path: &Path) -> Json {
	let contents = std::fs::read_to_string(path).unwrap();
	serde_json::from_str(&contents).unwrap()
}

fn binary_predictions() -> Value {
	Value::from((vec![0, 0, 1, 1], vec![0.1, 0.4, 0.35, 0.8]))
}

#[test]
fn roc_writes_one_record_per_threshold() {
	let dir = tempfile::tempdir().unwrap();
	let plot = Roc::new("roc", dir.path());
	plot.dump(&binary_predictions(), &RocCurveOptions::default())
		.unwrap();
	let path = dir.path().join("sklearn").join("roc.json");
	let json = read_json(&path);
	let records = json["roc"].as_array().unwrap();
	assert_eq!(records.len(), 5);
	for record in records {
		let mut keys: Vec<&String> = record.as_object().unwrap().keys().collect();
		keys.sort();
		assert_eq!(keys, vec!["fpr", "threshold", "tpr"]);
	}
	let fpr: Vec<f64> = records.iter().map(|r| r["fpr"].as_f64().unwrap()).collect();
	let tpr: Vec<f64> = records.iter().map(|r| r["tpr"].as_f64().unwrap()).collect();
	assert_eq!(fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
	assert_eq!(tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
	assert_eq!(records[1]["threshold"], json!(0.8));
}

#[test]
fn precision_recall_drops_the_point_without_threshold() {
	let dir = tempfile::tempdir().unwrap();
	let plot = PrecisionRecall::new("prc", dir.path());
	plot.dump(&binary_predictions(), &Default::default()).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	let records = json["precision_recall"].as_array().unwrap();
	assert_eq!(records.len(), 4);
	assert_eq!(
		records[0],
		json!({ "precision": 0.5, "recall": 1.0, "threshold": 0.1 })
	);
	assert_eq!(
		records[3],
		json!({ "precision": 1.0, "recall": 0.5, "threshold": 0.8 })
	);
}

#[test]
fn det_writes_rates() {
	let dir = tempfile::tempdir().unwrap();
	let plot = Det::new("det", dir.path());
	plot.dump(&binary_predictions(), &Default::default()).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	assert_eq!(
		json,
		json!({
			"det": [
				{ "fpr": 0.5, "fnr": 0.0, "threshold": 0.35 },
				{ "fpr": 0.5, "fnr": 0.5, "threshold": 0.4 },
				{ "fpr": 0.0, "fnr": 0.5, "threshold": 0.8 },
			]
		})
	);
}

#[test]
fn confusion_matrix_pairs_labels_as_strings() {
	let dir = tempfile::tempdir().unwrap();
	let plot = ConfusionMatrix::new("cm", dir.path(), false);
	let value = Value::from((vec!["cat", "dog"], vec!["cat", "cat"]));
	plot.dump(&value, &()).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	assert_eq!(
		json,
		json!([
			{ "actual": "cat", "predicted": "cat" },
			{ "actual": "dog", "predicted": "cat" },
		])
	);
	let value = Value::from((vec![0, 1], vec![1.0, 1.0]));
	plot.dump(&value, &()).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	assert_eq!(
		json,
		json!([
			{ "actual": "0", "predicted": "1.0" },
			{ "actual": "1", "predicted": "1.0" },
		])
	);
}

#[test]
fn calibration_writes_non_empty_bins() {
	let dir = tempfile::tempdir().unwrap();
	let plot = Calibration::new("calibration", dir.path());
	let value = Value::from((
		vec![0, 0, 1, 1, 1, 0],
		vec![0.0625, 0.25, 0.5, 0.75, 0.875, 0.5],
	));
	let options = CalibrationCurveOptions {
		n_bins: Some(2),
		..Default::default()
	};
	plot.dump(&value, &options).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	assert_eq!(
		json,
		json!({
			"calibration": [
				{ "prob_true": 0.25, "prob_pred": 0.328125 },
				{ "prob_true": 1.0, "prob_pred": 0.8125 },
			]
		})
	);
}

#[test]
fn output_path_creates_parent_directories() {
	let dir = tempfile::tempdir().unwrap();
	let plot = Roc::new("train/epoch_1/roc", dir.path());
	let path = plot.output_path().unwrap();
	assert_eq!(
		path,
		dir.path()
			.join("sklearn")
			.join("train")
			.join("epoch_1")
			.join("roc.json")
	);
	assert!(path.parent().unwrap().is_dir());
	assert!(path.starts_with(dir.path().join("sklearn")));
	// creating an existing directory chain again is fine
	assert_eq!(plot.output_path().unwrap(), path);
}

#[test]
fn output_path_ignores_json_suffix() {
	let dir = tempfile::tempdir().unwrap();
	let with_suffix = Roc::new("foo.json", dir.path()).output_path().unwrap();
	let without_suffix = Roc::new("foo", dir.path()).output_path().unwrap();
	assert_eq!(with_suffix, without_suffix);
	assert_eq!(with_suffix, dir.path().join("sklearn").join("foo.json"));
}

#[test]
fn output_path_fails_when_a_file_is_in_the_way() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("sklearn"), b"").unwrap();
	assert!(Roc::new("roc", dir.path()).output_path().is_err());
}

#[test]
fn curve_errors_propagate() {
	let dir = tempfile::tempdir().unwrap();
	let plot = SklearnPlot::new(PlotKind::Roc, "roc", dir.path(), false);
	let value = Value::from((vec![0, 1, 1], vec![0.5, 0.25]));
	assert!(plot.dump(&value).is_err());
	assert!(!dir.path().join("sklearn").join("roc.json").exists());
}

#[test]
fn dump_with_rejects_unsupported_options() {
	let dir = tempfile::tempdir().unwrap();
	let plot = SklearnPlot::new(PlotKind::Det, "det", dir.path(), false);
	let options = PlotOptions {
		drop_intermediate: Some(false),
		..Default::default()
	};
	let error = plot
		.dump_with(&binary_predictions(), &options)
		.unwrap_err();
	assert_eq!(
		error.to_string(),
		"option drop_intermediate is not supported by det plots"
	);
}

#[test]
fn dump_with_forwards_pos_label() {
	let dir = tempfile::tempdir().unwrap();
	let plot = SklearnPlot::new(PlotKind::Roc, "roc", dir.path(), false);
	let value = Value::from((vec![2, 2, 3, 3], vec![0.1, 0.4, 0.35, 0.8]));
	assert!(plot.dump(&value).is_err());
	let options = PlotOptions {
		pos_label: Some(3.0),
		..Default::default()
	};
	plot.dump_with(&value, &options).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	assert_eq!(json["roc"].as_array().unwrap().len(), 5);
}

#[test]
fn dump_with_forwards_sample_weight() {
	let dir = tempfile::tempdir().unwrap();
	let plot = SklearnPlot::new(PlotKind::Roc, "roc", dir.path(), false);
	let options = PlotOptions {
		sample_weight: Some(vec![1.0, 1.0, 0.0, 1.0]),
		drop_intermediate: Some(false),
		..Default::default()
	};
	plot.dump_with(&binary_predictions(), &options).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	let records = json["roc"].as_array().unwrap();
	let thresholds: Vec<f64> = records
		.iter()
		.map(|r| r["threshold"].as_f64().unwrap())
		.collect();
	assert_eq!(thresholds.len(), 4);
	assert!(!thresholds.contains(&0.35));
	assert_eq!(&thresholds[1..], &[0.8, 0.4, 0.1]);
	let options = PlotOptions {
		sample_weight: Some(vec![1.0, f64::NAN, 1.0, 1.0]),
		..Default::default()
	};
	let error = plot
		.dump_with(&binary_predictions(), &options)
		.unwrap_err();
	assert_eq!(
		error.to_string(),
		"sample_weight contains NaN or infinite values"
	);
}

#[test]
fn signed_labels_plot_like_binary_labels() {
	let dir = tempfile::tempdir().unwrap();
	let signed = Value::from((vec![-1, -1, 1, 1], vec![0.1, 0.4, 0.35, 0.8]));
	for kind in &[PlotKind::Roc, PlotKind::PrecisionRecall] {
		let plot = SklearnPlot::new(*kind, "binary", dir.path(), false);
		plot.dump(&binary_predictions()).unwrap();
		let binary = read_json(&plot.output_path().unwrap());
		let plot = SklearnPlot::new(*kind, "signed", dir.path(), false);
		plot.dump(&signed).unwrap();
		assert_eq!(read_json(&plot.output_path().unwrap()), binary);
	}
}

#[test]
fn confusion_matrix_prints_labels_like_python() {
	let dir = tempfile::tempdir().unwrap();
	let plot = ConfusionMatrix::new("cm", dir.path(), false);
	let value = Value::from((
		vec![Value::from(true), Value::from(false)],
		vec![Value::from(true), Value::Null],
	));
	plot.dump(&value, &()).unwrap();
	let json = read_json(&plot.output_path().unwrap());
	assert_eq!(
		json,
		json!([
			{ "actual": "True", "predicted": "True" },
			{ "actual": "False", "predicted": "None" },
		])
	);
}

#[test]
fn log_sklearn_plot_checks_shape_and_merges_properties() {
	let dir = tempfile::tempdir().unwrap();
	let config = PlotConfig {
		normalized: true,
		properties: PropertyOverrides {
			title: Some("Validation".to_owned()),
			..Default::default()
		},
		..Default::default()
	};
	let value = Value::from((vec!["cat", "dog"], vec!["cat", "cat"]));
	let properties =
		log_sklearn_plot(PlotKind::ConfusionMatrix, &value, dir.path(), &config).unwrap();
	assert_eq!(properties.template, "confusion_normalized");
	assert_eq!(properties.title, "Validation");
	assert_eq!(properties.x_label, "True Label");
	assert!(dir
		.path()
		.join("sklearn")
		.join("confusion_matrix.json")
		.is_file());
	let not_a_tuple = Value::from(vec![vec!["cat"], vec!["dog"]]);
	let error = log_sklearn_plot(
		PlotKind::ConfusionMatrix,
		&not_a_tuple,
		dir.path(),
		&config,
	)
	.unwrap_err();
	assert_eq!(
		error.to_string(),
		"data type of confusion_matrix is not supported, confusion_matrix plots expect a (labels, predictions) tuple"
	);
}

#[test]
fn plot_config_deserializes() {
	let config: PlotConfig = serde_json::from_str(
		r#"{
			"name": "val_calibration",
			"properties": { "x_label": "Predicted" },
			"options": { "n_bins": 10, "strategy": "quantile" }
		}"#,
	)
	.unwrap();
	assert_eq!(config.name.as_deref(), Some("val_calibration"));
	assert!(!config.normalized);
	assert_eq!(config.options.n_bins, Some(10));
	assert_eq!(config.properties.x_label.as_deref(), Some("Predicted"));
}
