//! consistently formatted .fasta files from questionably formatted ones
//!
//! FASTA reading and wrapped writing over plain or gzip-compressed files.

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};
use log::debug;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    error::{FormatError, FormatResult},
    record::SequenceRecord,
};

/// Whether a path should be read or written through gzip.
pub fn is_gzip_path(path: &Path) -> bool {
    matches!(path.extension().and_then(|ext| ext.to_str()), Some("gz"))
}

/// Reads every record of a FASTA file (optionally gzipped) in file order.
pub fn read_records<P: AsRef<Path>>(path: P) -> FormatResult<Vec<SequenceRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FormatError::io(path, e))?;

    let reader: Box<dyn BufRead> = if is_gzip_path(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let records = parse_records(reader).map_err(|e| FormatError::io(path, e))?;
    debug!("Read {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Parses FASTA text into records.
///
/// Lines before the first header and blank lines are ignored; whitespace
/// inside sequence lines is dropped.
pub fn parse_records<R: BufRead>(mut reader: R) -> std::io::Result<Vec<SequenceRecord>> {
    let mut acc = Vec::new();
    let mut line = String::new();
    let mut current: Option<SequenceRecord> = None;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.trim().is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(prev) = current.replace(SequenceRecord::from_header(header)) {
                acc.push(prev);
            }
        } else if let Some(record) = current.as_mut() {
            record
                .seq
                .extend(trimmed.chars().filter(|c| !c.is_whitespace()));
        }
    }

    if let Some(last) = current {
        acc.push(last);
    }

    Ok(acc)
}

/// Writes one record as a header line followed by `width`-wide sequence lines.
pub fn write_record<W: Write>(
    writer: &mut W,
    record: &SequenceRecord,
    width: usize,
) -> std::io::Result<()> {
    writer.write_all(b">")?;
    writer.write_all(record.header().as_bytes())?;
    writer.write_all(b"\n")?;

    for line in record.seq.as_bytes().chunks(width.max(1)) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}

/// Writes `records` to `path`, gzip-compressing when the path ends in `.gz`.
///
/// The file is flushed (and the gzip stream finished) before returning.
pub fn write_records<'a, I>(path: &Path, records: I, width: usize) -> FormatResult<usize>
where
    I: IntoIterator<Item = &'a SequenceRecord>,
{
    let file = File::create(path).map_err(|e| FormatError::io(path, e))?;
    let io_err = |e| FormatError::io(path, e);

    if is_gzip_path(path) {
        let mut writer = GzEncoder::new(BufWriter::new(file), Compression::default());
        let count = write_all_records(&mut writer, records, width).map_err(io_err)?;
        writer.finish().and_then(|mut w| w.flush()).map_err(io_err)?;
        Ok(count)
    } else {
        let mut writer = BufWriter::new(file);
        let count = write_all_records(&mut writer, records, width).map_err(io_err)?;
        writer.flush().map_err(io_err)?;
        Ok(count)
    }
}

fn write_all_records<'a, W, I>(writer: &mut W, records: I, width: usize) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a SequenceRecord>,
{
    let mut count = 0;
    for record in records {
        write_record(writer, record, width)?;
        count += 1;
    }

    Ok(count)
}
