use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Splits a text into word tokens.
///
/// - Words are delimited by any Unicode whitespace (spaces, tabs, newlines)
/// - No punctuation or case normalization: `"Cat,"` and `"cat"` stay distinct
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Reads a text file and returns all its words as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Tokenizes with [`tokenize`]
pub fn read_words<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(tokenize(&contents))
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/hamlet.txt"` → `"hamlet"`
/// - `"hamlet.txt"` → `"hamlet"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Renders a generated sentence the way the random writer prints it.
///
/// `["the", "cat"]` → `"... the cat..."`
pub fn render_sentence(words: &[String]) -> String {
	let mut out = String::from("...");
	for word in words {
		out.push(' ');
		out.push_str(word);
	}
	out.push_str("...");
	out
}
