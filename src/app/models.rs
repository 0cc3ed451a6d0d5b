use std::path::PathBuf;

/// Settings for one scan, merged from the config file and CLI flags.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub marker: String,
    pub include_hidden: bool,
    pub no_gitignore: bool,
}

/// A single marker comment found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    /// Comment content after the marker, trimmed.
    pub text: String,
    /// Base name of the containing file.
    pub file_name: String,
    /// Path relative to the search root.
    pub relative_path: PathBuf,
    /// Path as handed to the extractor.
    pub absolute_path: PathBuf,
    /// 1-based line number.
    pub line_number: usize,
}
