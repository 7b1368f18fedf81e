use crate::core::{interfaces::*, models::MinifyConfig, services::QuickminMinifyService};
use crate::infrastructure::{RegexCssMinifier, ScannerJsMinifier, TokioFileSystemService};
use crate::utils::{Logger, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "quickmin")]
#[command(about = "Quickmin - lightweight .min.js/.min.css generator")]
pub struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        // Initialize logging
        Logger::init();

        let cli = Cli::parse();
        self.handle_minify_command(cli.root).await
    }

    async fn handle_minify_command(&self, root: PathBuf) -> Result<()> {
        let config = MinifyConfig {
            root,
            ..Default::default()
        };

        // Create services
        let fs_service: Arc<dyn FileSystemService> = Arc::new(TokioFileSystemService);
        let js_minifier: Arc<dyn JsMinifier> = Arc::new(ScannerJsMinifier::new());
        let css_minifier: Arc<dyn CssMinifier> = Arc::new(RegexCssMinifier::new());

        let service = QuickminMinifyService::new(fs_service, js_minifier, css_minifier);

        // Per-file failures are already reported inside the run; they do not
        // escalate into a process-level error.
        service.run(&config).await?;

        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
