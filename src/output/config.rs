//! Output configuration types

use crate::size::format_size;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Directory Tree";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// HTML document title
    pub title: String,
    /// Powers of 1000 (`kB`) instead of 1024 (`KiB`)
    pub use_decimal_units: bool,
    /// Show the octal mode with a symbolic tooltip instead of the reverse
    pub alternate_mode_display: bool,
    /// Add owner and group columns
    pub show_ownership: bool,
    /// Stop rendering below this many levels under a root
    pub max_depth: Option<usize>,
    pub use_color: bool,
}

impl OutputConfig {
    pub fn format_size(&self, size: u64) -> String {
        format_size(size, self.use_decimal_units)
    }

    /// Check if children at `depth + 1` should be rendered.
    pub fn descends_below(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            use_decimal_units: false,
            alternate_mode_display: false,
            show_ownership: false,
            max_depth: None,
            use_color: true,
        }
    }
}
