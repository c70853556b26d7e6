use anyhow::Result;
use serde::Serialize;
use std::{io::Write, path::Path};

/// Write `content` to the file at `path` as JSON indented with four spaces, replacing the file if it exists.
pub fn dump_json<T>(content: &T, path: &Path) -> Result<()>
where
	T: Serialize + ?Sized,
{
	log::debug!("writing {}", path.display());
	let file = std::fs::File::create(path)?;
	let mut writer = std::io::BufWriter::new(file);
	let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
	let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
	content.serialize(&mut serializer)?;
	writer.flush()?;
	Ok(())
}
