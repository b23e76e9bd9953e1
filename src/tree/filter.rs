//! Entry filtering for tree building

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::BuildError;

use super::config::BuildConfig;

/// Decides which directory entries take part in the tree.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    include_dotfiles: bool,
    patterns: Vec<Pattern>,
}

impl EntryFilter {
    pub fn new(config: &BuildConfig) -> Result<Self, BuildError> {
        let patterns = config
            .exclude_patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| BuildError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            include_dotfiles: config.include_dotfiles,
            patterns,
        })
    }

    /// Check if an entry name should be included.
    ///
    /// `.` and `..` never are; other dotfiles only when enabled.
    pub fn is_included(&self, name: &OsStr) -> bool {
        if name == "." || name == ".." {
            return false;
        }
        if !self.include_dotfiles && name.as_encoded_bytes().first() == Some(&b'.') {
            return false;
        }
        if self.patterns.is_empty() {
            return true;
        }

        let name = name.to_string_lossy();
        !self.patterns.iter().any(|p| p.matches(&name))
    }
}

/// Join `name` onto `parent`, refusing paths longer than `max_len` bytes
/// (separator and terminator included).
pub fn join_bounded(parent: &Path, name: &OsStr, max_len: usize) -> Result<PathBuf, BuildError> {
    let path = parent.join(name);
    if parent.as_os_str().len() + name.len() + 2 > max_len {
        return Err(BuildError::PathTooLong { path });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(include_dotfiles: bool, patterns: &[&str]) -> EntryFilter {
        EntryFilter::new(&BuildConfig {
            include_dotfiles,
            exclude_patterns: patterns.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_dot_entries_always_excluded() {
        for include in [true, false] {
            let f = filter(include, &[]);
            assert!(!f.is_included(OsStr::new(".")));
            assert!(!f.is_included(OsStr::new("..")));
        }
    }

    #[test]
    fn test_dotfiles_toggle() {
        assert!(filter(true, &[]).is_included(OsStr::new(".hidden")));
        assert!(!filter(false, &[]).is_included(OsStr::new(".hidden")));
        assert!(filter(false, &[]).is_included(OsStr::new("visible")));
        // Only a leading dot hides an entry
        assert!(filter(false, &[]).is_included(OsStr::new("file.txt")));
    }

    #[test]
    fn test_exclude_patterns() {
        let f = filter(true, &["*.log", "target"]);
        assert!(!f.is_included(OsStr::new("debug.log")));
        assert!(!f.is_included(OsStr::new("target")));
        assert!(f.is_included(OsStr::new("main.rs")));
        assert!(f.is_included(OsStr::new("targets")));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = EntryFilter::new(&BuildConfig {
            exclude_patterns: vec!["[".to_string()],
            ..Default::default()
        });
        assert!(matches!(result, Err(BuildError::InvalidPattern { .. })));
    }

    #[test]
    fn test_join_bounded() {
        let parent = Path::new("/abc");
        // 4 + 3 + 2 = 9
        assert_eq!(
            join_bounded(parent, OsStr::new("def"), 9).unwrap(),
            PathBuf::from("/abc/def")
        );
        assert!(matches!(
            join_bounded(parent, OsStr::new("def"), 8),
            Err(BuildError::PathTooLong { .. })
        ));
    }
}
