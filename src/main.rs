//! CLI entry point for dirscope

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirscope::{
    BuildConfig, DEFAULT_TITLE, HtmlFormatter, Node, OutputConfig, TextFormatter, TreeBuilder,
    print_json,
};
use log::error;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Self-contained HTML document with collapsible directories
    #[default]
    Html,
    /// Plain tree listing
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirscope")]
#[command(about = "Scan directories and report sizes, modes and item counts as a collapsible HTML tree")]
#[command(version)]
struct Args {
    /// Files or directories to scan
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Use powers of 1000 instead of 1024 for file sizes
    #[arg(short = 'm', long = "metric")]
    metric: bool,

    /// Ignore files starting with a dot
    #[arg(short = 'A', long = "no-dotfiles")]
    no_dotfiles: bool,

    /// Order items from small to big instead of big to small
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Show the octal mode, with the symbolic mode as a tooltip
    #[arg(long = "alt-mode")]
    alt_mode: bool,

    /// Show owner and group ids
    #[arg(short = 'o', long = "owner")]
    owner: bool,

    /// Title of the HTML document
    #[arg(short = 't', long = "title", default_value = DEFAULT_TITLE)]
    title: String,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "html")]
    format: OutputFormat,

    /// Skip entries whose name matches PATTERN (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Render only N levels below each root (totals still cover everything)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Control color output of the text format: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log progress for each root
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Route diagnostics to stderr as `dirscope: <level>: <message>`.
///
/// `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "dirscope: {}: {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .init();
}

fn write_html(roots: &[Node], config: OutputConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    HtmlFormatter::new(config).write(roots, &mut out)?;
    writeln!(out)?;
    out.flush()
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let build_config = BuildConfig {
        include_dotfiles: !args.no_dotfiles,
        reverse_order: args.reverse,
        exclude_patterns: args.ignore.clone(),
        ..Default::default()
    };

    let builder = TreeBuilder::new(build_config).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let roots = match builder.build_all(args.paths.as_slice()) {
        Ok(roots) => roots,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let output_config = OutputConfig {
        title: args.title.clone(),
        use_decimal_units: args.metric,
        alternate_mode_display: args.alt_mode,
        show_ownership: args.owner,
        max_depth: args.level,
        use_color: should_use_color(args.color),
    };

    let result = match args.format {
        OutputFormat::Html => write_html(&roots, output_config),
        OutputFormat::Text => TextFormatter::new(output_config).print(&roots),
        OutputFormat::Json => print_json(&roots, &output_config),
    };

    if let Err(e) = result {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return;
        }
        error!("error writing output: {}", e);
        process::exit(1);
    }
}
