//! In-memory tree node

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs::Metadata;
use std::path::PathBuf;

use crate::mode::FileKind;

/// One filesystem entry with its aggregated totals and ordered children.
///
/// For a directory, `size` is the sum of all descendant sizes and
/// `item_count` the number of descendants. `children` is `None` for anything
/// that is not a directory and `Some` (possibly empty) for directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub path: PathBuf,
    pub size: u64,
    pub item_count: u64,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create an unexpanded node from `lstat` metadata.
    ///
    /// Directories start with zero size and an empty child list; the builder
    /// folds their children in afterwards.
    pub(crate) fn from_metadata(path: PathBuf, meta: &Metadata) -> Self {
        let (mode, uid, gid) = raw_ownership(meta);
        let is_dir = meta.file_type().is_dir();
        Self {
            path,
            size: if is_dir { 0 } else { meta.len() },
            item_count: 0,
            mode,
            uid,
            gid,
            children: is_dir.then(Vec::new),
        }
    }

    /// Last path component, or the whole path for a filesystem root.
    pub fn name(&self) -> &OsStr {
        self.path.file_name().unwrap_or(self.path.as_os_str())
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        self.name().to_string_lossy()
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_mode(self.mode)
    }

    pub fn is_dir(&self) -> bool {
        self.children.is_some()
    }

    /// Children in sort order; empty for non-directories.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[cfg(unix)]
fn raw_ownership(meta: &Metadata) -> (u32, u32, u32) {
    use std::os::unix::fs::MetadataExt;
    (meta.mode(), meta.uid(), meta.gid())
}

/// Synthesize unix-style mode bits where the platform has none.
#[cfg(not(unix))]
fn raw_ownership(meta: &Metadata) -> (u32, u32, u32) {
    let file_type = meta.file_type();
    let type_bits = if file_type.is_dir() {
        0o040_000
    } else if file_type.is_symlink() {
        0o120_000
    } else {
        0o100_000
    };
    let perm_bits = if meta.permissions().readonly() { 0o555 } else { 0o755 };
    (type_bits | perm_bits, 0, 0)
}
