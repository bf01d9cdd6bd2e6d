//! consistently formatted .fasta files from questionably formatted ones
//!
//! Sequence-level deduplication. Records are ordered by the numeric token of
//! their identifier and only the first record of every distinct sequence is
//! kept; every later occurrence is reported against the record that was kept.

use log::debug;

use std::{collections::HashMap, fmt};

use crate::{error::FormatResult, record::SequenceRecord};

/// A record dropped because an earlier record carries the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLogEntry {
    pub duplicate: String,
    pub original: String,
}

impl fmt::Display for DuplicateLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} duplicate of {}", self.duplicate, self.original)
    }
}

/// Outcome of deduplicating one input file.
#[derive(Debug, Default)]
pub struct Deduplicated {
    pub kept: Vec<SequenceRecord>,
    pub duplicates: Vec<DuplicateLogEntry>,
}

/// Stably sorts records ascending by their identifier sort key.
///
/// Every key is computed before anything is reordered, so one malformed
/// identifier fails the whole batch.
pub fn sort_by_key(records: Vec<SequenceRecord>) -> FormatResult<Vec<SequenceRecord>> {
    let mut keyed = records
        .into_iter()
        .map(|record| record.sort_key().map(|key| (key, record)))
        .collect::<FormatResult<Vec<_>>>()?;

    keyed.sort_by_key(|(key, _)| *key);

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Keeps the lowest-keyed record of every distinct sequence.
///
/// Sequence identity is exact, case-sensitive string equality.
/// `kept.len() + duplicates.len()` always equals the input length.
pub fn deduplicate(records: Vec<SequenceRecord>) -> FormatResult<Deduplicated> {
    let sorted = sort_by_key(records)?;

    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(sorted.len());
    let mut keep = vec![false; sorted.len()];
    let mut duplicates = Vec::new();

    for (idx, record) in sorted.iter().enumerate() {
        match seen.get(record.seq.as_str()) {
            Some(original) => {
                let entry = DuplicateLogEntry {
                    duplicate: record.id.clone(),
                    original: original.to_string(),
                };
                debug!("{}", entry);
                duplicates.push(entry);
            }
            None => {
                seen.insert(&record.seq, &record.id);
                keep[idx] = true;
            }
        }
    }

    let kept = sorted
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect();

    Ok(Deduplicated { kept, duplicates })
}
