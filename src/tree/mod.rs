//! Directory tree construction
//!
//! `TreeBuilder` stats a root, recurses into directories and folds every
//! child's size and item count into its parent. Siblings are kept sorted as
//! they are discovered (see `order`).

mod builder;
mod config;
mod filter;
mod node;
mod order;

pub use builder::TreeBuilder;
pub use config::{BuildConfig, DEFAULT_MAX_PATH_LEN};
pub use filter::{EntryFilter, join_bounded};
pub use node::Node;
pub use order::{compare_files, insert_ordered};
