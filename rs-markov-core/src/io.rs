use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads every file in order and returns their concatenated contents.
///
/// - Files are joined with no separator
/// - Line breaks are preserved (normalization happens in `Corpus`)
pub fn read_files<P: AsRef<Path>>(paths: &[P]) -> io::Result<String> {
	let mut contents = String::new();
	for path in paths {
		File::open(path)?.read_to_string(&mut contents)?;
	}
	Ok(contents)
}

/// Appends an accepted excerpt followed by a blank line.
///
/// The file is created if it does not exist.
pub fn append_excerpt<P: AsRef<Path>>(path: P, excerpt: &str) -> io::Result<()> {
	let mut output = OpenOptions::new().create(true).append(true).open(path)?;
	write!(output, "{}\n\n", excerpt)?;
	output.flush()
}
