use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifyConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Directory names pruned at every level of the walk.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_excluded_dirs() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            excluded_dirs: default_excluded_dirs(),
        }
    }
}

/// Kind of source a candidate file holds, decided by its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Js,
    Css,
}

impl SourceKind {
    /// Classify a path. Returns `None` for already-minified outputs
    /// (`.min.js` / `.min.css`) and for any other file type.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(".min.js") || name.ends_with(".min.css") {
            return None;
        }
        if name.ends_with(".js") {
            Some(SourceKind::Js)
        } else if name.ends_with(".css") {
            Some(SourceKind::Css)
        } else {
            None
        }
    }

    pub fn output_extension(&self) -> &'static str {
        match self {
            SourceKind::Js => "min.js",
            SourceKind::Css => "min.css",
        }
    }

    /// Derived sibling path: `name.js -> name.min.js`, `name.css -> name.min.css`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        input.with_extension(self.output_extension())
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Js => "js",
            SourceKind::Css => "css",
        }
    }
}

/// Files discovered by a scan, grouped by kind.
#[derive(Debug, Default)]
pub struct CandidateSet {
    pub js_files: Vec<PathBuf>,
    pub css_files: Vec<PathBuf>,
}

impl CandidateSet {
    pub fn total(&self) -> usize {
        self.js_files.len() + self.css_files.len()
    }
}

/// Outcome of one full run.
#[derive(Debug, Default)]
pub struct MinifyReport {
    pub output_files: Vec<OutputFile>,
    pub failures: Vec<FileFailure>,
    pub elapsed: std::time::Duration,
}

impl MinifyReport {
    pub fn created_count(&self) -> usize {
        self.output_files.len()
    }

    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn saved_bytes(&self) -> usize {
        self.output_files
            .iter()
            .map(|f| f.original_size.saturating_sub(f.size))
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct OutputFile {
    pub path: PathBuf,
    pub size: usize,
    pub original_size: usize,
}

#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}
