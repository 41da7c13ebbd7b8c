//! CLI entry point for minitree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::builder::TypedValueParser as _;
use clap::{Parser, ValueEnum};
use minitree::{OutputConfig, StreamingFormatter, TreeConfig, TreeWalker};
use minitree::tree::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ENTRIES};

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

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "minitree")]
#[command(about = "List a directory as a tree: directories first, dotfiles hidden")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print directory and file counts after the tree
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Maximum entries listed per directory; the rest are dropped
    #[arg(
        long = "max-entries",
        value_name = "N",
        default_value_t = DEFAULT_MAX_ENTRIES,
        value_parser = clap::value_parser!(u32).range(1..).map(|n| n as usize)
    )]
    max_entries: usize,

    /// Maximum levels shown below the starting directory
    #[arg(
        long = "max-depth",
        value_name = "N",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = clap::value_parser!(u32).range(1..).map(|n| n as usize)
    )]
    max_depth: usize,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let walker = TreeWalker::new(TreeConfig {
        max_entries: args.max_entries,
        max_depth: args.max_depth,
    });

    let mut formatter = StreamingFormatter::stdout(OutputConfig {
        use_color: should_use_color(args.color),
        summary: args.summary,
    });

    if let Err(e) = walker.walk(&args.path, &mut formatter) {
        eprintln!("minitree: {}", e);
        process::exit(1);
    }
}
