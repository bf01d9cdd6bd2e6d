//! consistently formatted .fasta files from questionably formatted ones
//!
//! Fixed names and widths shared by the pipeline stages.

/// Residues per sequence line; matches the wrapping of Biopython's FASTA writer.
pub const LINE_WIDTH: usize = 60;

pub const FORMATTED_DIR: &str = "formattedfiles";
pub const SPLIT_DIR: &str = "splitfiles";
pub const LOG_DIR: &str = "logs";

pub const FORMATTED_SUFFIX: &str = "_formatted";
pub const SPLIT_EXTENSION: &str = "fa";
pub const LOG_EXTENSION: &str = "log";

/// Input files are selected when their name contains this, i.e. the glob `*.fa*`.
pub const INPUT_PATTERN: &str = ".fa";

pub const ID_DELIMITER: char = ':';
/// 0-based position of the numeric sort field inside an identifier.
pub const SORT_FIELD: usize = 3;
