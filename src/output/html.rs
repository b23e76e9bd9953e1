//! HTML report output
//!
//! Produces a single self-contained document. Each node is one table row in
//! pre-order; directories carry a `<details>` disclosure control. Collapsing
//! works without scripting: every directory row gets a generated CSS rule
//! that hides the rows tagged with its `child-N` class while its control is
//! closed.

use std::io::{self, Write};

use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::{mode_strings, write_escaped};

const STYLESHEET: &str = include_str!("style.css");

/// Row numbering and ancestry while walking the trees.
#[derive(Default)]
struct RowState {
    next_id: usize,
    /// Row ids of the directories enclosing the current row
    ancestors: Vec<usize>,
    /// Row ids of directories whose children were rendered
    collapsible: Vec<usize>,
}

/// Formatter for the HTML report.
pub struct HtmlFormatter {
    config: OutputConfig,
}

impl HtmlFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the whole document into a string.
    pub fn format(&self, roots: &[Node]) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail
        let _ = self.write(roots, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn write<W: Write>(&self, roots: &[Node], out: &mut W) -> io::Result<()> {
        out.write_all(b"<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>")?;
        write_escaped(out, &self.config.title)?;
        out.write_all(b"</title><style>")?;
        out.write_all(STYLESHEET.as_bytes())?;
        out.write_all(b"</style></head><body>")?;

        out.write_all(b"<table class=\"tree\"><thead><tr><th>Name</th><th>Size</th><th>Mode</th><th>Type</th>")?;
        if self.config.show_ownership {
            out.write_all(b"<th>Owner</th><th>Group</th>")?;
        }
        out.write_all(b"<th>Items</th></tr></thead><tbody>")?;

        let mut state = RowState::default();
        for root in roots {
            self.write_row(root, out, &mut state, 0)?;
        }
        out.write_all(b"</tbody></table>")?;

        // One rule per collapsible row
        out.write_all(b"<style>")?;
        for id in &state.collapsible {
            write!(
                out,
                "tr#item-{id}:has(> td > details:not([open])) ~ tr.child-{id} {{ display: none; }}"
            )?;
        }
        out.write_all(b"</style></body></html>")
    }

    fn write_row<W: Write>(
        &self,
        node: &Node,
        out: &mut W,
        state: &mut RowState,
        depth: usize,
    ) -> io::Result<()> {
        let id = state.next_id;
        state.next_id += 1;

        let expandable = !node.children().is_empty() && self.config.descends_below(depth);

        out.write_all(b"<tr class=\"node")?;
        if depth > 0 {
            out.write_all(b" child")?;
        }
        for ancestor in &state.ancestors {
            write!(out, " child-{}", ancestor)?;
        }
        write!(out, "\" id=\"item-{}\">", id)?;

        out.write_all(b"<td class=\"name\">")?;
        for _ in 0..depth {
            out.write_all(b"<span class=\"indent\"></span>")?;
        }
        if expandable {
            out.write_all(b"<span class=\"arrow\"></span><details class=\"node\"")?;
            if depth == 0 {
                out.write_all(b" open")?;
            }
            out.write_all(b"><summary>")?;
        } else {
            out.write_all(b"<span class=\"no-arrow\"></span>")?;
        }
        out.write_all(b"<span class=\"name\">")?;
        if depth == 0 {
            write_escaped(out, &node.path.to_string_lossy())?;
        } else {
            write_escaped(out, &node.display_name())?;
        }
        out.write_all(b"</span>")?;
        if expandable {
            out.write_all(b"</summary></details>")?;
        }
        out.write_all(b"</td>")?;

        write!(out, "<td class=\"size\" title=\"{} bytes\">", node.size)?;
        write_escaped(out, &self.config.format_size(node.size))?;
        out.write_all(b"</td>")?;

        let (shown, tooltip) = mode_strings(node.mode, self.config.alternate_mode_display);
        write!(out, "<td class=\"mode\" title=\"{}\">{}</td>", tooltip, shown)?;

        write!(out, "<td class=\"type\">{}</td>", node.kind().label())?;

        if self.config.show_ownership {
            write!(
                out,
                "<td class=\"owner\">{}</td><td class=\"group\">{}</td>",
                node.uid, node.gid
            )?;
        }

        out.write_all(b"<td class=\"items\">")?;
        if node.is_dir() {
            write!(out, "{}", node.item_count)?;
        }
        out.write_all(b"</td></tr>")?;

        if expandable {
            state.collapsible.push(id);
            state.ancestors.push(id);
            for child in node.children() {
                self.write_row(child, out, state, depth + 1)?;
            }
            state.ancestors.pop();
        }
        Ok(())
    }
}
