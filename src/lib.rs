//! dirscope - scan a directory tree and report sizes, modes and item counts
//!
//! `TreeBuilder` turns each root path into an owned `Node` tree with
//! aggregated directory totals and size-ordered siblings. The formatters in
//! `output` render those trees as an HTML report, a plain listing or JSON.

pub mod error;
pub mod mode;
pub mod output;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::BuildError;
pub use mode::{FileKind, octal_mode, symbolic_mode};
pub use output::{
    DEFAULT_TITLE, HtmlFormatter, OutputConfig, TextFormatter, escape_html, format_json, print_json,
};
pub use size::format_size;
pub use tree::{BuildConfig, Node, TreeBuilder};
