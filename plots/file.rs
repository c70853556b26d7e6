use anyhow::Result;
use std::path::{Path, PathBuf};

/// Every plot in this crate is written below this folder of the output folder.
pub const SUBFOLDER: &str = "sklearn";

/// Every plot in this crate is written with this suffix.
pub const SUFFIX: &str = ".json";

/**
A `PlotFile` is where one plot is written: `<output_folder>/sklearn/<name>.json`. The name may contain `/` to nest the plot in subfolders.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFile {
	name: String,
	folder: PathBuf,
}

impl PlotFile {
	/// A trailing `.json` on `name` is dropped, so `roc` and `roc.json` name the same file.
	pub fn new(name: &str, output_folder: impl AsRef<Path>) -> Self {
		let name = name.strip_suffix(SUFFIX).unwrap_or(name).to_owned();
		Self {
			name,
			folder: output_folder.as_ref().join(SUBFOLDER),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// The path of the plot file. Its parent directories are created if they do not exist.
	pub fn output_path(&self) -> Result<PathBuf> {
		let path = self.folder.join(format!("{}{}", self.name, SUFFIX));
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		Ok(path)
	}
}

#[test]
fn test_name() {
	assert_eq!(PlotFile::new("roc.json", "out").name(), "roc");
	assert_eq!(PlotFile::new("roc", "out").name(), "roc");
	assert_eq!(PlotFile::new("train/roc", "out").name(), "train/roc");
	assert_eq!(PlotFile::new("train.json/roc", "out").name(), "train.json/roc");
	assert_eq!(PlotFile::new("roc.json.json", "out").name(), "roc.json");
	assert_eq!(
		PlotFile::new("roc.json", "out"),
		PlotFile::new("roc", "out")
	);
}
