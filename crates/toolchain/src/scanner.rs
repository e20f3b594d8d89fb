use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directory names never descended into, in addition to hidden directories.
const IGNORED_SCOPES: &[&str] = &["build", "external"];

/// Scanner for C/C++ sources under a directory, filtered by file-name suffix
pub struct SourceScanner {
    root: PathBuf,
    extensions: Vec<String>,
}

impl SourceScanner {
    pub fn new(root: impl AsRef<Path>, extensions: Vec<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions,
        }
    }

    /// Parse a comma-separated suffix list (".cpp, .h") into trimmed, non-empty entries.
    pub fn parse_extensions(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Walk the tree in file-name order. Ignore files (.gitignore etc.) are not consulted;
    /// only hidden, `build` and `external` directories are pruned.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if !self.root.is_dir() {
            log::debug!("{} is not a directory", self.root.display());
            return files;
        }

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder.filter_entry(|entry| !(entry.depth() > 0 && Self::is_ignored_dir(entry)));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    // Links are not followed; a link to a regular file still counts as a file.
                    let is_file = file_type.is_file()
                        || (file_type.is_symlink() && entry.path().is_file());
                    if !is_file {
                        continue;
                    }
                    if self.matches_extension(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => log::debug!("Failed to read entry: {e}"),
            }
        }

        log::debug!(
            "Found {} candidate files under {}",
            files.len(),
            self.root.display()
        );
        files
    }

    fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    fn is_ignored_dir(entry: &ignore::DirEntry) -> bool {
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || IGNORED_SCOPES.iter().any(|scope| name == *scope)
    }
}
