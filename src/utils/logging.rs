use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter("quickmin=info")
            .with_target(false)
            .init();
    }

    pub fn scan_start(root: &Path) {
        info!("📁 Scanning {} for .js and .css files...", root.display());
    }

    pub fn found_files(js_count: usize, css_count: usize) {
        info!("📦 Found {} JS files, {} CSS files", js_count, css_count);
    }

    pub fn processing_file(name: &str, kind: &str) {
        debug!("⚡ Minifying: {} ({})", name, kind);
    }

    pub fn created(path: &Path) {
        info!("Created: {}", path.display());
    }

    pub fn failed(path: &Path, reason: &str) {
        error!("Failed: {} -> {}", path.display(), reason);
    }

    pub fn run_complete(
        created: usize,
        failed: usize,
        saved_bytes: usize,
        elapsed: std::time::Duration,
    ) {
        info!("");
        info!("📊 Minify Statistics:");
        info!("  • Outputs written: {}", created);
        if failed > 0 {
            info!("  • Files failed: {}", failed);
        }
        info!("  • Bytes saved: {}", saved_bytes);
        info!("  • Run time: {:.2?}", elapsed);
        info!("");
        info!("Done. Created {} files.", created);
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    #[allow(dead_code)] // Future use
    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
