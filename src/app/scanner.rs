use crate::app::ignore_rules;
use crate::app::models::RuntimeConfig;
use ignore::gitignore::Gitignore;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Walks a directory tree depth-first and collects candidate file paths,
/// honoring per-directory ignore rules and the hidden-directory policy.
pub struct Scanner {
    include_hidden: bool,
    no_gitignore: bool,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            include_hidden: config.include_hidden,
            no_gitignore: config.no_gitignore,
        }
    }

    /// Collects every file under `root` that survives filtering. A read
    /// failure on `root` itself is fatal; failures deeper down only skip
    /// the affected subtree. The root is scanned even when its own name
    /// starts with a dot.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut scopes = Vec::new();
        self.walk(root, &mut scopes)
    }

    fn walk(&self, dir: &Path, scopes: &mut Vec<Gitignore>) -> Result<Vec<PathBuf>, ScanError> {
        let entries = fs::read_dir(dir).map_err(|source| ScanError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        // A rule file found here is in effect for this subtree only.
        let mut pushed = false;
        if !self.no_gitignore {
            if let Some(scope) = ignore_rules::load_scope(dir) {
                scopes.push(scope);
                pushed = true;
            }
        }

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Error while listing {}: {}", dir.display(), err);
                    continue;
                }
            };
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            if is_dir {
                // Hidden filtering applies to directory names only.
                if !self.include_hidden && is_hidden(&entry.file_name()) {
                    continue;
                }
                // A matched directory is pruned wholesale; its contents are
                // never individually checked.
                if ignore_rules::is_ignored(&path, true, scopes) {
                    continue;
                }
                match self.walk(&path, scopes) {
                    Ok(found) => files.extend(found),
                    Err(err) => {
                        log::warn!("Error while exploring directory {}: {}", path.display(), err);
                    }
                }
            } else {
                if ignore_rules::is_ignored(&path, false, scopes) {
                    continue;
                }
                files.push(path);
            }
        }

        if pushed {
            scopes.pop();
        }
        Ok(files)
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
