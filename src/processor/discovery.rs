//! Input discovery for report text files
//!
//! Each input may name a file, a directory or a glob pattern. Directories
//! are walked recursively for `.txt` files; results are deduplicated with
//! first-seen order preserved.

use crate::constants::REPORT_FILE_EXTENSION;
use crate::error::{Result, SeaStateError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Resolve CLI inputs into an ordered list of report files
pub fn discover_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for input in inputs {
        let input = input.as_ref();
        let path = Path::new(input);

        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            discover_directory(path)?
        } else if is_glob_pattern(input) {
            discover_pattern(input)?
        } else {
            return Err(SeaStateError::InputNotFound {
                path: path.to_path_buf(),
            });
        };

        for file in found {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    debug!("Discovered {} report files", files.len());
    Ok(files)
}

/// All report text files below a directory, sorted by path
fn discover_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_report_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} report files in {}", files.len(), dir.display());
    Ok(files)
}

fn discover_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| SeaStateError::InvalidInputPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SeaStateError::Io(e.into_error()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(SeaStateError::InputNotFound {
            path: PathBuf::from(pattern),
        });
    }

    Ok(files)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn is_report_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(REPORT_FILE_EXTENSION))
}
