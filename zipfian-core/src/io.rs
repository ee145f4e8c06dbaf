use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole text file into memory.
///
/// - The file handle lives only for the duration of this call
/// - Fails with `Error::FileAccess` when the file cannot be opened,
///   read, or is not valid UTF-8
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let to_error = |source: std::io::Error| Error::FileAccess { path: path.to_path_buf(), source };

	let mut contents = String::new();
	File::open(path)
		.map_err(to_error)?
		.read_to_string(&mut contents)
		.map_err(to_error)?;

	log::debug!("read {} bytes from {}", contents.len(), path.display());
	Ok(contents)
}
