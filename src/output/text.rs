//! Plain tree listing
//!
//! This module provides `TextFormatter`, which prints the built trees with
//! tree connectors, one entry per line followed by its size, mode and item
//! count.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::{child_prefix, connector, mode_strings};

/// Formatter for the plain listing.
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the listing without colors.
    pub fn format(&self, roots: &[Node]) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing to a Vec cannot fail
        let _ = self.write(roots, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    pub fn print(&self, roots: &[Node]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let stdout = StandardStream::stdout(choice);
        let mut lock = stdout.lock();
        self.write(roots, &mut lock)
    }

    pub fn write<W: WriteColor>(&self, roots: &[Node], out: &mut W) -> io::Result<()> {
        let mut dir_count = 0;
        let mut file_count = 0;

        for (i, root) in roots.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            let (d, f) = self.write_node(root, out, "", true, 0)?;
            dir_count += d;
            file_count += f;
        }

        writeln!(out)?;
        writeln!(out, "{} directories, {} files", dir_count, file_count)?;
        Ok(())
    }

    /// Write one entry and its rendered children, returning the number of
    /// (directories, files) written below it.
    fn write_node<W: WriteColor>(
        &self,
        node: &Node,
        out: &mut W,
        prefix: &str,
        is_last: bool,
        depth: usize,
    ) -> io::Result<(usize, usize)> {
        if depth == 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", node.path.display())?;
        } else {
            write!(out, "{}{}", prefix, connector(is_last))?;
            if node.is_dir() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            } else {
                out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            }
            write!(out, "{}", node.display_name())?;
        }
        out.reset()?;
        self.write_details(node, out)?;

        if !self.config.descends_below(depth) {
            return Ok((0, 0));
        }

        let new_prefix = if depth == 0 {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };

        let children = node.children();
        let mut dir_count = 0;
        let mut file_count = 0;
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            let (d, f) = self.write_node(child, out, &new_prefix, child_is_last, depth + 1)?;
            dir_count += d;
            file_count += f;
            if child.is_dir() {
                dir_count += 1;
            } else {
                file_count += 1;
            }
        }
        Ok((dir_count, file_count))
    }

    /// Write the columns after the name and end the line.
    fn write_details<W: WriteColor>(&self, node: &Node, out: &mut W) -> io::Result<()> {
        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "[{}]", self.config.format_size(node.size))?;
        out.reset()?;

        let (shown, _) = mode_strings(node.mode, self.config.alternate_mode_display);
        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{}", shown)?;
        out.reset()?;

        if self.config.show_ownership {
            write!(out, "  {}:{}", node.uid, node.gid)?;
        }

        if node.is_dir() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
            write!(out, "  ({} items)", node.item_count)?;
            out.reset()?;
        }
        writeln!(out)
    }
}
