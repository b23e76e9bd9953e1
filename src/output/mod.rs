//! Tree formatting and display
//!
//! This module renders built trees in several formats:
//! - A self-contained HTML report with collapsible directories
//! - A plain listing with tree connectors (colored on terminals)
//! - JSON
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared helpers (HTML escaping, connectors, mode strings)
//! - `html` - HTML report formatter
//! - `text` - Plain listing formatter
//! - `json` - JSON output

mod config;
mod html;
mod json;
mod text;
mod utils;

pub use config::{DEFAULT_TITLE, OutputConfig};
pub use html::HtmlFormatter;
pub use json::{JsonNode, format_json, print_json};
pub use text::TextFormatter;
pub use utils::{escape_html, write_escaped};
