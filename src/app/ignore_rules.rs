use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

pub const RULE_FILE_NAME: &str = ".gitignore";

/// Loads the ignore rule file of a single directory. A missing or
/// unparseable file means no scope for that directory; traversal carries
/// on without it.
pub fn load_scope(dir: &Path) -> Option<Gitignore> {
    let rule_file = dir.join(RULE_FILE_NAME);
    if !rule_file.is_file() {
        return None;
    }

    let mut builder = GitignoreBuilder::new(dir);
    if builder.add(&rule_file).is_some() {
        return None;
    }
    builder.build().ok()
}

/// A path is ignored when any active scope matches it with ignore status.
/// Negations apply within their own scope only; scopes combine with OR.
pub fn is_ignored(path: &Path, is_dir: bool, scopes: &[Gitignore]) -> bool {
    scopes
        .iter()
        .any(|scope| scope.matched(path, is_dir).is_ignore())
}
