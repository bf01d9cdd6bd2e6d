//! consistently formatted .fasta files from questionably formatted ones
//!
//! Every input FASTA in a directory is rewritten with canonical line wrapping,
//! optionally collapsing records that share a sequence and optionally splitting
//! each record into its own file.

use clap::{ArgAction, Parser};
use log::Level;

use std::{fmt, path::PathBuf};

use crate::consts::LINE_WIDTH;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// Output root directory (formattedfiles/, splitfiles/ and logs/ are created here)
    pub path: PathBuf,

    /// Directory containing the sequence files (extension starting with "fa")
    #[arg(short = 's', long, required = true)]
    pub sequencepath: PathBuf,

    /// Write every record to its own file instead of one file per input
    #[arg(short = 'S', long, default_value = "false", action = ArgAction::SetTrue)]
    pub split: bool,

    /// Keep only the first record (lowest sort key) of every distinct sequence
    #[arg(short = 'u', long, default_value = "false", action = ArgAction::SetTrue)]
    pub unique: bool,

    /// Residues per sequence line in the output
    #[arg(short = 'w', long, default_value_t = LINE_WIDTH)]
    pub width: usize,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the Args struct as a comma-separated string of key=value pairs.
///
/// # Example
///
/// ```rust,ignore
/// use reformatfasta::Args;
/// let args = Args::parse();
/// println!("{}", args);
/// ```
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path={}, sequencepath={}, split={}, unique={}, width={}, level={}",
            self.path.display(),
            self.sequencepath.display(),
            self.split,
            self.unique,
            self.width,
            self.level,
        )
    }
}
