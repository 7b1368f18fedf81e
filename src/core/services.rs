use crate::core::{interfaces::*, models::*};
use crate::infrastructure::reduction_stats;
use crate::utils::{Logger, Result, Timer};
use std::path::Path;
use std::sync::Arc;

/// Main minify service implementation
pub struct QuickminMinifyService {
    fs_service: Arc<dyn FileSystemService>,
    js_minifier: Arc<dyn JsMinifier>,
    css_minifier: Arc<dyn CssMinifier>,
}

impl QuickminMinifyService {
    pub fn new(
        fs_service: Arc<dyn FileSystemService>,
        js_minifier: Arc<dyn JsMinifier>,
        css_minifier: Arc<dyn CssMinifier>,
    ) -> Self {
        Self {
            fs_service,
            js_minifier,
            css_minifier,
        }
    }

    async fn scan_candidates(&self, config: &MinifyConfig) -> Result<CandidateSet> {
        let _timer = Timer::start("Scanning project tree");
        Logger::scan_start(&config.root);

        let candidates = self
            .fs_service
            .scan_tree(&config.root, &config.excluded_dirs)
            .await?;

        Logger::found_files(candidates.js_files.len(), candidates.css_files.len());
        Ok(candidates)
    }

    /// Read, minify, and write one file. Any error here belongs to this file
    /// alone and is reported by the caller.
    async fn minify_one(&self, path: &Path, kind: SourceKind) -> Result<OutputFile> {
        Logger::processing_file(
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown"),
            kind.label(),
        );

        let source = self.fs_service.read_file(path).await?;
        let minified = match kind {
            SourceKind::Js => self.js_minifier.minify(&source, path).await?,
            SourceKind::Css => self.css_minifier.minify(&source, path).await?,
        };

        tracing::debug!("{}: {}", path.display(), reduction_stats(&source, &minified));

        let output_path = kind.output_path(path);
        self.fs_service.write_file(&output_path, &minified).await?;

        Ok(OutputFile {
            path: output_path,
            size: minified.len(),
            original_size: source.len(),
        })
    }

    async fn process_file(&self, path: &Path, kind: SourceKind, report: &mut MinifyReport) {
        match self.minify_one(path, kind).await {
            Ok(output) => {
                Logger::created(&output.path);
                report.output_files.push(output);
            }
            Err(e) => {
                let reason = e.to_string();
                Logger::failed(path, &reason);
                report.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }
    }
}

#[async_trait::async_trait]
impl MinifyService for QuickminMinifyService {
    async fn run(&self, config: &MinifyConfig) -> Result<MinifyReport> {
        let timer = Timer::start("Minify run");

        let candidates = self.scan_candidates(config).await?;

        let mut report = MinifyReport::default();
        for path in &candidates.js_files {
            self.process_file(path, SourceKind::Js, &mut report).await;
        }
        for path in &candidates.css_files {
            self.process_file(path, SourceKind::Css, &mut report).await;
        }

        report.elapsed = timer.elapsed();
        Logger::run_complete(
            report.created_count(),
            report.failures.len(),
            report.saved_bytes(),
            report.elapsed,
        );

        Ok(report)
    }
}
