use crate::{
    cli::Args,
    consts::{
        FORMATTED_DIR, FORMATTED_SUFFIX, INPUT_PATTERN, LINE_WIDTH, LOG_DIR, LOG_EXTENSION,
        SPLIT_DIR, SPLIT_EXTENSION,
    },
    dedup::{deduplicate, DuplicateLogEntry},
    error::{FormatError, FormatResult},
    fasta::{read_records, write_records},
    record::SequenceRecord,
};

use log::{info, warn};

use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    fs::{self, create_dir_all, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where surviving records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One `<stem>_formatted.<ext>` file per input.
    Formatted,
    /// One `<id>.fa` file per record.
    Split,
}

/// Run configuration handed to every stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub sequence_dir: PathBuf,
    pub out_root: PathBuf,
    pub mode: OutputMode,
    pub unique: bool,
    pub line_width: usize,
}

impl Config {
    pub fn new(sequence_dir: impl Into<PathBuf>, out_root: impl Into<PathBuf>) -> Self {
        Self {
            sequence_dir: sequence_dir.into(),
            out_root: out_root.into(),
            mode: OutputMode::Formatted,
            unique: false,
            line_width: LINE_WIDTH,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self {
            sequence_dir: args.sequencepath.clone(),
            out_root: args.path.clone(),
            mode: if args.split {
                OutputMode::Split
            } else {
                OutputMode::Formatted
            },
            unique: args.unique,
            line_width: args.width,
        }
    }

    pub fn formatted_dir(&self) -> PathBuf {
        self.out_root.join(FORMATTED_DIR)
    }

    pub fn split_dir(&self) -> PathBuf {
        self.out_root.join(SPLIT_DIR)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.out_root.join(LOG_DIR)
    }

    fn output_dir(&self) -> PathBuf {
        match self.mode {
            OutputMode::Formatted => self.formatted_dir(),
            OutputMode::Split => self.split_dir(),
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub records_in: usize,
    pub records_out: usize,
    pub duplicates: usize,
}

/// Reformats every FASTA file found in `config.sequence_dir`.
pub fn reformat(config: &Config) -> FormatResult<RunSummary> {
    if config.line_width == 0 {
        return Err(FormatError::InvalidWidth);
    }

    prepare_scaffold(config)?;
    let inputs = discover_inputs(&config.sequence_dir)?;
    info!("Reformatting {} files", inputs.len());

    let mut summary = RunSummary::default();
    let mut split_names: HashMap<String, PathBuf> = HashMap::new();

    for input in &inputs {
        let (records_in, records_out, duplicates) =
            process_file(config, input, &mut split_names)?;

        summary.files += 1;
        summary.records_in += records_in;
        summary.records_out += records_out;
        summary.duplicates += duplicates;
    }

    Ok(summary)
}

/// Creates a directory and its parents; an existing directory is not an error.
pub fn make_path(path: &Path) -> FormatResult<()> {
    match create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(FormatError::Filesystem {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Creates the output directory of the selected mode and, in dedup mode, an
/// emptied log directory.
fn prepare_scaffold(config: &Config) -> FormatResult<()> {
    make_path(&config.output_dir())?;

    if config.unique {
        let log_dir = config.log_dir();
        match fs::remove_dir_all(&log_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(FormatError::Filesystem {
                    path: log_dir,
                    source,
                })
            }
        }
        make_path(&log_dir)?;
    }

    Ok(())
}

/// Lists files in `dir` matching `*.fa*`, sorted by path.
///
/// A directory that does not exist holds no inputs either.
pub fn discover_inputs(dir: &Path) -> FormatResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FormatError::NoInputFiles {
                path: dir.to_path_buf(),
            })
        }
        Err(e) => return Err(FormatError::io(dir, e)),
    };

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| FormatError::io(dir, e))?.path();
        if path.is_file() && is_fasta_name(&path) {
            inputs.push(path);
        }
    }

    if inputs.is_empty() {
        return Err(FormatError::NoInputFiles {
            path: dir.to_path_buf(),
        });
    }

    inputs.sort();
    Ok(inputs)
}

fn is_fasta_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(INPUT_PATTERN))
}

/// Splits a file name at its first `.`: `a.fa.gz` -> (`a`, `fa.gz`).
fn name_and_extension(path: &Path) -> (String, String) {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.split_once('.') {
        Some((stem, ext)) => (stem.to_string(), ext.to_string()),
        None => (name, String::new()),
    }
}

/// Path of the formatted output for an input file.
pub fn formatted_path(config: &Config, input: &Path) -> PathBuf {
    let (stem, ext) = name_and_extension(input);
    config
        .formatted_dir()
        .join(format!("{}{}.{}", stem, FORMATTED_SUFFIX, ext))
}

/// Path of the duplicate log for an input file.
pub fn log_path(config: &Config, input: &Path) -> PathBuf {
    let (stem, _) = name_and_extension(input);
    config
        .log_dir()
        .join(format!("{}.{}", stem, LOG_EXTENSION))
}

/// Parses, optionally deduplicates and writes a single input file.
///
/// Returns (records read, records written, duplicates dropped).
fn process_file(
    config: &Config,
    input: &Path,
    split_names: &mut HashMap<String, PathBuf>,
) -> FormatResult<(usize, usize, usize)> {
    info!("Processing {}", input.display());

    let records = read_records(input)?;
    let records_in = records.len();

    let (kept, duplicates) = if config.unique {
        let deduplicated = deduplicate(records)?;
        write_duplicate_log(&log_path(config, input), &deduplicated.duplicates)?;
        (deduplicated.kept, deduplicated.duplicates.len())
    } else {
        (records, 0)
    };

    let written = match config.mode {
        OutputMode::Formatted => {
            write_records(&formatted_path(config, input), &kept, config.line_width)?
        }
        OutputMode::Split => write_split(config, input, &kept, split_names)?,
    };

    info!(
        "Wrote {} of {} records from {} ({} duplicates)",
        written,
        records_in,
        input.display(),
        duplicates
    );

    Ok((records_in, written, duplicates))
}

/// Writes every record to `<split_dir>/<id>.fa`.
///
/// A name repeated inside one input overwrites the earlier file; a name that
/// another input already produced in this run is an error.
fn write_split(
    config: &Config,
    input: &Path,
    records: &[SequenceRecord],
    split_names: &mut HashMap<String, PathBuf>,
) -> FormatResult<usize> {
    let split_dir = config.split_dir();
    let mut local: HashSet<&str> = HashSet::with_capacity(records.len());

    for record in records {
        let name = format!("{}.{}", record.id, SPLIT_EXTENSION);

        match split_names.entry(name.clone()) {
            Entry::Occupied(owner) if owner.get() != input => {
                return Err(FormatError::SplitCollision {
                    name,
                    first: owner.get().clone(),
                    second: input.to_path_buf(),
                });
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                slot.insert(input.to_path_buf());
            }
        }

        if !local.insert(record.id.as_str()) {
            warn!(
                "Identifier {} appears more than once in {}; overwriting {}",
                record.id,
                input.display(),
                name
            );
        }

        write_records(&split_dir.join(&name), [record], config.line_width)?;
    }

    Ok(records.len())
}

/// Appends one line per duplicate to the log; the file is created even when
/// there is nothing to report.
fn write_duplicate_log(path: &Path, entries: &[DuplicateLogEntry]) -> FormatResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FormatError::io(path, e))?;

    let mut writer = BufWriter::new(file);
    for entry in entries {
        writeln!(writer, "{}", entry).map_err(|e| FormatError::io(path, e))?;
    }
    writer.flush().map_err(|e| FormatError::io(path, e))?;

    if !entries.is_empty() {
        info!(
            "Logged {} duplicates to {}",
            entries.len(),
            path.display()
        );
    }

    Ok(())
}
