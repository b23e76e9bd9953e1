//! TreeBuilder - stats a path and builds its full tree in memory

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::BuildError;

use super::config::BuildConfig;
use super::filter::{EntryFilter, join_bounded};
use super::node::Node;
use super::order::{compare_files, insert_ordered};

/// Builds one tree per root path.
///
/// Failures below a root are logged and the entry is skipped, contributing
/// nothing to its parent. A failure on the root itself is returned.
pub struct TreeBuilder {
    config: BuildConfig,
    filter: EntryFilter,
}

impl TreeBuilder {
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let filter = EntryFilter::new(&config)?;
        Ok(Self { config, filter })
    }

    /// Build the tree rooted at `path`.
    ///
    /// Only the root is canonicalized. Descendant paths are the canonical
    /// parent joined with the entry name, so symlinked directories below the
    /// root are recorded as links and never followed.
    pub fn build(&self, path: &Path) -> Result<Node, BuildError> {
        let root = path.canonicalize().map_err(|source| BuildError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        self.build_node(root)
    }

    /// Build every root independently, keeping argument order.
    ///
    /// Roots that fail are logged and left out. Fails only when no root
    /// could be built.
    pub fn build_all<P: AsRef<Path>>(&self, roots: &[P]) -> Result<Vec<Node>, BuildError> {
        let mut trees = Vec::with_capacity(roots.len());
        for root in roots {
            match self.build(root.as_ref()) {
                Ok(tree) => {
                    debug!(
                        "built '{}': {} bytes in {} items",
                        tree.path.display(),
                        tree.size,
                        tree.item_count
                    );
                    trees.push(tree);
                }
                Err(e) => warn!("{}", e),
            }
        }

        if trees.is_empty() {
            return Err(BuildError::NothingProcessed);
        }
        Ok(trees)
    }

    fn build_node(&self, path: PathBuf) -> Result<Node, BuildError> {
        let meta = match fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(source) => return Err(BuildError::Stat { path, source }),
        };

        let mut node = Node::from_metadata(path, &meta);
        if node.is_dir() {
            self.expand(&mut node)?;
        }
        Ok(node)
    }

    /// Build each child of a directory node and fold it into the node.
    fn expand(&self, node: &mut Node) -> Result<(), BuildError> {
        // The handle is closed when `entries` drops, on every return path
        let entries = fs::read_dir(&node.path).map_err(|source| BuildError::ReadDir {
            path: node.path.clone(),
            source,
        })?;

        let reverse = self.config.reverse_order;
        let mut children: Vec<Node> = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(source) => {
                    warn!(
                        "{}",
                        BuildError::ReadEntry {
                            path: node.path.clone(),
                            source,
                        }
                    );
                    continue;
                }
            };

            let name = entry.file_name();
            if !self.filter.is_included(&name) {
                continue;
            }

            let child = match join_bounded(&node.path, &name, self.config.max_path_len)
                .and_then(|child_path| self.build_node(child_path))
            {
                Ok(c) => c,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };

            if let Err(source) = children.try_reserve(1) {
                warn!(
                    "{}",
                    BuildError::OutOfMemory {
                        path: child.path,
                        source,
                    }
                );
                continue;
            }

            node.size = node.size.saturating_add(child.size);
            node.item_count = node.item_count.saturating_add(child.item_count + 1);
            insert_ordered(&mut children, child, |existing, candidate| {
                compare_files(existing, candidate, reverse)
            });
        }

        node.children = Some(children);
        Ok(())
    }
}
