use crate::app::models::DiscoveredFile;
use crate::app::paths::best_effort;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Case-insensitive "path ends with one of these extensions" matcher.
#[derive(Debug, Clone)]
pub struct FormatFilter {
    regex: Option<Regex>,
}

impl FormatFilter {
    /// Builds `(?i)(ext1|ext2|...)$` from a whitespace separated list.
    pub fn new(formats: &str) -> Result<Self> {
        let tokens: Vec<String> = formats.split_whitespace().map(regex::escape).collect();
        if tokens.is_empty() {
            log::warn!("No formats given; nothing will be matched.");
            return Ok(Self { regex: None });
        }

        let pattern = format!("(?i)({})$", tokens.join("|"));
        let regex = Regex::new(&pattern).context(format!("Invalid format filter: {}", pattern))?;
        Ok(Self { regex: Some(regex) })
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.regex
            .as_ref()
            .map_or(false, |r| r.is_match(&path.to_string_lossy()))
    }
}

pub struct Scanner {
    root: PathBuf,
    filter: FormatFilter,
}

impl Scanner {
    pub fn new(root: PathBuf, filter: FormatFilter) -> Self {
        Self { root, filter }
    }

    /// Walks the whole tree under the root in file-name order and returns
    /// every file whose path matches the filter. Unreadable entries are
    /// skipped without ending the walk.
    pub fn discover(&self) -> Vec<DiscoveredFile> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        walker
            .filter_map(|result| best_effort("Walking entry", result))
            .filter(|entry| !entry.file_type().map_or(false, |ft| ft.is_dir()))
            .filter(|entry| self.filter.is_match(entry.path()))
            .map(|entry| self.to_discovered(entry.path()))
            .collect()
    }

    fn to_discovered(&self, path: &Path) -> DiscoveredFile {
        let relative = diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        DiscoveredFile {
            path: path.to_path_buf(),
            relative_path: relative.to_string_lossy().to_string(),
        }
    }
}
