// Source transformation processors
pub mod css_minifier;
pub mod js_minifier;

pub use css_minifier::*;
pub use js_minifier::*;

/// Per-file size statistics, for logging only.
#[derive(Debug, Clone)]
pub struct MinifyStats {
    pub original_size: usize,
    pub minified_size: usize,
    pub reduction_percentage: f64,
    pub saved_bytes: usize,
}

pub fn reduction_stats(original: &str, minified: &str) -> MinifyStats {
    let reduction = if original.is_empty() {
        0.0
    } else {
        ((original.len() as f64 - minified.len() as f64) / original.len() as f64) * 100.0
    };

    MinifyStats {
        original_size: original.len(),
        minified_size: minified.len(),
        reduction_percentage: reduction,
        saved_bytes: original.len().saturating_sub(minified.len()),
    }
}

impl std::fmt::Display for MinifyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1}% reduction ({} → {} bytes, saved {})",
            self.reduction_percentage, self.original_size, self.minified_size, self.saved_bytes
        )
    }
}
