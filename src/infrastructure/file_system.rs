use crate::core::{interfaces::FileSystemService, models::*};
use crate::utils::{QuickminError, Result};
use std::path::Path;
use tokio::fs;

pub struct TokioFileSystemService;

#[async_trait::async_trait]
impl FileSystemService for TokioFileSystemService {
    async fn scan_tree(&self, root: &Path, excluded_dirs: &[String]) -> Result<CandidateSet> {
        let mut candidates = CandidateSet::default();
        // Iterative depth-first walk; excluded directories are pruned whole.
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await.map_err(QuickminError::Io)?;

            while let Some(entry) = entries.next_entry().await.map_err(QuickminError::Io)? {
                let path = entry.path();
                let file_type = entry.file_type().await.map_err(QuickminError::Io)?;

                if file_type.is_dir() {
                    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
                    if excluded_dirs.iter().any(|excluded| excluded == name) {
                        continue;
                    }
                    pending.push(path);
                    continue;
                }

                if !path.is_file() {
                    continue;
                }

                match SourceKind::from_path(&path) {
                    Some(SourceKind::Js) => candidates.js_files.push(path),
                    Some(SourceKind::Css) => candidates.css_files.push(path),
                    None => {}
                }
            }
        }

        Ok(candidates)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).await.map_err(QuickminError::Io)
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            self.create_directory(parent).await?;
        }

        fs::write(path, content).await.map_err(QuickminError::Io)
    }

    async fn create_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).await.map_err(QuickminError::Io)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio;

    #[tokio::test]
    async fn test_file_operations() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();
        let test_file = temp_dir.path().join("nested/dir/test.txt");

        let content = "Hello, Quickmin!";
        fs_service.write_file(&test_file, content).await.unwrap();

        let read_content = fs_service.read_file(&test_file).await.unwrap();
        assert_eq!(content, read_content);
        assert!(fs_service.file_exists(&test_file));
    }

    #[tokio::test]
    async fn test_scan_classifies_and_recurses() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();

        fs_service
            .write_file(&temp_dir.path().join("app.js"), "let a = 1;")
            .await
            .unwrap();
        fs_service
            .write_file(&temp_dir.path().join("sub/site.css"), "body{}")
            .await
            .unwrap();
        fs_service
            .write_file(&temp_dir.path().join("index.html"), "<html></html>")
            .await
            .unwrap();

        let candidates = fs_service
            .scan_tree(temp_dir.path(), &["node_modules".to_string()])
            .await
            .unwrap();

        assert_eq!(candidates.js_files.len(), 1);
        assert_eq!(candidates.css_files.len(), 1);
        assert_eq!(candidates.total(), 2);
    }

    #[tokio::test]
    async fn test_scan_prunes_excluded_dirs_and_minified_outputs() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();

        fs_service
            .write_file(&temp_dir.path().join("main.js"), "let a = 1;")
            .await
            .unwrap();
        fs_service
            .write_file(&temp_dir.path().join("main.min.js"), "let a=1;")
            .await
            .unwrap();
        fs_service
            .write_file(&temp_dir.path().join("node_modules/dep/index.js"), "x()")
            .await
            .unwrap();
        fs_service
            .write_file(&temp_dir.path().join(".git/hooks/sample.js"), "y()")
            .await
            .unwrap();

        let excluded = vec!["node_modules".to_string(), ".git".to_string()];
        let candidates = fs_service
            .scan_tree(temp_dir.path(), &excluded)
            .await
            .unwrap();

        assert_eq!(candidates.js_files.len(), 1);
        assert!(candidates.js_files[0].ends_with("main.js"));
        assert!(candidates.css_files.is_empty());
    }

    #[tokio::test]
    async fn test_scan_missing_root_is_an_error() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let result = fs_service.scan_tree(&missing, &[]).await;
        assert!(result.is_err());
    }
}
