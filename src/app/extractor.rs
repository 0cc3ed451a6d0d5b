use crate::app::models::TodoRecord;
use pathdiff::diff_paths;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error while reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scans single files line by line for marker comments. The marker pattern
/// is compiled once per scan, not per line.
pub struct Extractor {
    marker: String,
    pattern: Regex,
}

impl Extractor {
    pub fn new(marker: &str) -> Result<Self, ExtractError> {
        let pattern = Regex::new(&format!(r"^\s*(//|#|--)\s*{}", regex::escape(marker)))?;
        Ok(Self {
            marker: marker.to_string(),
            pattern,
        })
    }

    /// A marker line starts, after leading whitespace, with one of the
    /// comment introducers `//`, `#` or `--`, then optional whitespace,
    /// then the literal marker.
    pub fn is_marker_line(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Extracts every marker comment from one file. Line numbers are
    /// 1-based and follow the file's real lines; a missing trailing
    /// newline does not add a phantom empty line.
    pub fn extract(&self, root: &Path, file_path: &Path) -> Result<Vec<TodoRecord>, ExtractError> {
        let file = File::open(file_path).map_err(|source| ExtractError::Open {
            path: file_path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut todos = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ExtractError::Read {
                path: file_path.to_path_buf(),
                source,
            })?;

            if !self.is_marker_line(&line) {
                continue;
            }
            let Some((_, rest)) = line.split_once(self.marker.as_str()) else {
                continue;
            };
            // A match that cannot be expressed relative to the root is
            // dropped on its own; the rest of the file still counts.
            let Some(relative_path) = diff_paths(file_path, root) else {
                log::warn!(
                    "Failed to get the relative path for file {}",
                    file_path.display()
                );
                continue;
            };

            todos.push(TodoRecord {
                text: rest.trim().to_string(),
                file_name: file_name.clone(),
                relative_path,
                absolute_path: file_path.to_path_buf(),
                line_number: index + 1,
            });
        }
        Ok(todos)
    }
}
