//! Dictionary file loading and saving
//!
//! Files are opened, fully read and closed within a single call.

use super::{Dictionary, DictionaryError};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load a dictionary from a JSON file
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be opened or read, and
/// [`DictionaryError::Parse`] if its contents are not a valid dictionary.
///
/// # Examples
/// ```no_run
/// use subwords::dictionary::load_from_file;
///
/// let dictionary = load_from_file("default_dict.json").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary: Dictionary =
        serde_json::from_reader(BufReader::new(file)).map_err(|err| {
            if err.is_io() {
                DictionaryError::Io {
                    path: path.to_path_buf(),
                    source: err.into(),
                }
            } else {
                DictionaryError::Parse(err)
            }
        })?;

    log::info!(
        "loaded {} words from dictionary {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Save a dictionary as pretty-printed JSON
///
/// The file is written to a temporary sibling first and then moved into
/// place, so an interrupted save never leaves a truncated dictionary behind.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(
    dictionary: &Dictionary,
    path: P,
) -> Result<(), DictionaryError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(io_error)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        dictionary
            .write_json(&mut writer)
            .map_err(|err| io_error(err.into()))?;
        writer.write_all(b"\n").map_err(io_error)?;
        writer.flush().map_err(io_error)?;
    }
    temp_file.persist(path).map_err(|err| io_error(err.error))?;

    log::info!(
        "saved {} words to dictionary {}",
        dictionary.len(),
        path.display()
    );
    Ok(())
}
