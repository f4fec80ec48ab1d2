//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Singer tap for extracting data from JSONL files
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tap-jsonl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// State file (JSON)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Property selections (accepted for compatibility, not used)
    #[arg(short, long)]
    pub properties: Option<PathBuf>,

    /// Catalog file (accepted for compatibility, not used)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Do schema discovery
    #[arg(short, long)]
    pub discover: bool,
}
