//! JSON output formatting

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::mode::{FileKind, octal_mode, symbolic_mode};
use crate::tree::Node;

use super::config::OutputConfig;

/// Serializable view of a `Node`, with the derived fields spelled out.
#[derive(Debug, Serialize)]
pub struct JsonNode<'a> {
    pub name: Cow<'a, str>,
    pub path: &'a Path,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub size: u64,
    pub size_human: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<u64>,
    pub mode: String,
    pub permissions: String,
    pub uid: u32,
    pub gid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<JsonNode<'a>>>,
}

impl<'a> JsonNode<'a> {
    pub fn new(node: &'a Node, config: &OutputConfig) -> Self {
        Self::at_depth(node, config, 0)
    }

    fn at_depth(node: &'a Node, config: &OutputConfig, depth: usize) -> Self {
        let children = node.children.as_ref().map(|children| {
            if config.descends_below(depth) {
                children
                    .iter()
                    .map(|c| Self::at_depth(c, config, depth + 1))
                    .collect()
            } else {
                Vec::new()
            }
        });

        Self {
            name: node.display_name(),
            path: &node.path,
            kind: node.kind(),
            size: node.size,
            size_human: config.format_size(node.size),
            items: node.is_dir().then_some(node.item_count),
            mode: octal_mode(node.mode),
            permissions: symbolic_mode(node.mode),
            uid: node.uid,
            gid: node.gid,
            children,
        }
    }
}

/// Serialize the trees as a pretty-printed JSON array.
pub fn format_json(roots: &[Node], config: &OutputConfig) -> io::Result<String> {
    let nodes: Vec<JsonNode> = roots.iter().map(|n| JsonNode::new(n, config)).collect();
    serde_json::to_string_pretty(&nodes).map_err(io::Error::other)
}

/// Print the trees as pretty-printed JSON to stdout.
pub fn print_json(roots: &[Node], config: &OutputConfig) -> io::Result<()> {
    let json = format_json(roots, config)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)
}
