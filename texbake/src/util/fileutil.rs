use super::internal::*;
use std::fs;

/// BufReader for reading file with more descriptive message on error.
pub fn open(file: &Path) -> Result<impl Read> {
	log::info!("loading {}", file.to_string_lossy());
	Ok(BufReader::new(File::open(file).map_err(|err| anyhow!("open {:?}: {}", file, err))?))
}

/// Read a whole text file, with the file name in the error message.
pub fn read_to_string(file: &Path) -> Result<String> {
	let mut buf = String::new();
	open(file)?.read_to_string(&mut buf).map_err(|err| anyhow!("read {:?}: {}", file, err))?;
	Ok(buf)
}

/// Read file names (no full path) in a directory, sorted.
pub fn read_dir_names(path: &Path) -> Result<Vec<PathBuf>> {
	let mut names = fs::read_dir(path)
		.map_err(|e| anyhow!("read '{path:?}': {e}"))? //
		.filter_map(|entry| entry.ok())
		.map(|entry| PathBuf::from(entry.file_name()))
		.collect::<Vec<_>>();
	names.sort();
	Ok(names)
}

/// Create a directory and its parents, if needed.
pub fn mkdir_all(path: impl AsRef<Path>) -> Result<()> {
	let path = path.as_ref();
	fs::create_dir_all(path).map_err(|e| anyhow!("create directory '{path:?}': {e}"))
}
