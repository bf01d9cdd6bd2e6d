//! consistently formatted .fasta files from questionably formatted ones
//!
//! Every file in the sequence directory whose extension starts with "fa" is
//! re-written with canonical line wrapping. Optionally, records sharing a
//! sequence are collapsed to the one with the lowest numeric identifier token
//! (the 4th ':'-delimited field), and optionally each surviving record is
//! written to its own file.
//!
//! # Usage
//!
//! ```bash
//! Usage: reformatfasta [OPTIONS] --sequencepath <SEQUENCEPATH> <PATH>
//!
//! Arguments:
//!   <PATH>  Output root directory (formattedfiles/, splitfiles/ and logs/ are created here)
//!
//! Options:
//!   -s, --sequencepath <SEQUENCEPATH>  Directory containing the sequence files (extension starting with "fa")
//!   -S, --split                        Write every record to its own file instead of one file per input
//!   -u, --unique                       Keep only the first record (lowest sort key) of every distinct sequence
//!   -w, --width <WIDTH>                Residues per sequence line in the output [default: 60]
//!   -L, --level <LEVEL>                Logging verbosity level [default: info]
//!   -h, --help                         Print help
//!   -V, --version                      Print version
//! ```

pub mod cli;
pub mod consts;
pub mod core;
pub mod dedup;
pub mod error;
pub mod fasta;
pub mod record;

pub use cli::Args;
pub use core::{reformat, Config, OutputMode, RunSummary};
pub use dedup::{deduplicate, Deduplicated, DuplicateLogEntry};
pub use error::{FormatError, FormatResult};
pub use record::{sort_key, SequenceRecord};
