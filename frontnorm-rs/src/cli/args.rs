//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "frontnorm")]
#[command(author, version, about = "Rewrite agent frontmatter into canonical field order", long_about = None)]
pub struct Cli {
    /// Root directory the file pattern is resolved against
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (default: ./frontnorm.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Glob pattern selecting agent files, relative to the root
    #[arg(long, global = true)]
    pub pattern: Option<String>,

    /// Output the run report as JSON
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output the run report as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output the run report as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Text
        }
    }

    /// Default log filter for the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite frontmatter of all matching files in place
    Normalize(NormalizeArgs),

    /// Report files that need normalization without writing them
    Check,

    /// Print the normalized content of one file
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// File to normalize (relative to the working directory or the root)
    pub path: PathBuf,
}
