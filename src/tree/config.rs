//! Configuration types for tree construction

/// `PATH_MAX` on Linux.
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Include entries whose name starts with a dot
    pub include_dotfiles: bool,
    /// Order siblings from small to big instead of big to small
    pub reverse_order: bool,
    /// Glob patterns matched against entry names; matches are skipped
    pub exclude_patterns: Vec<String>,
    /// Longest descendant path in bytes, counting the separator and a
    /// terminator the way `PATH_MAX` does. Longer entries are skipped.
    pub max_path_len: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            include_dotfiles: true,
            reverse_order: false,
            exclude_patterns: Vec::new(),
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }
}
