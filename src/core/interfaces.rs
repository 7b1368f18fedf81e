use crate::core::models::*;
use crate::utils::Result;
use async_trait::async_trait;
use std::path::Path;

/// File system operations interface
#[async_trait]
pub trait FileSystemService: Send + Sync {
    /// Recursively enumerate qualifying source files under `root`, pruning
    /// any directory whose name is in `excluded_dirs`.
    async fn scan_tree(&self, root: &Path, excluded_dirs: &[String]) -> Result<CandidateSet>;
    async fn read_file(&self, path: &Path) -> Result<String>;
    async fn write_file(&self, path: &Path, content: &str) -> Result<()>;
    async fn create_directory(&self, path: &Path) -> Result<()>;
    fn file_exists(&self, path: &Path) -> bool;
}

/// JavaScript minification interface
#[async_trait]
pub trait JsMinifier: Send + Sync {
    async fn minify(&self, content: &str, path: &Path) -> Result<String>;
}

/// CSS minification interface
#[async_trait]
pub trait CssMinifier: Send + Sync {
    async fn minify(&self, content: &str, path: &Path) -> Result<String>;
}

/// Top-level run interface
#[async_trait]
pub trait MinifyService: Send + Sync {
    async fn run(&self, config: &MinifyConfig) -> Result<MinifyReport>;
}
