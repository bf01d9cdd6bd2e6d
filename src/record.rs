//! consistently formatted .fasta files from questionably formatted ones
//!
//! Typed FASTA record and the identifier convention used to order records.

use crate::{
    consts::{ID_DELIMITER, SORT_FIELD},
    error::{FormatError, FormatResult},
};

/// A single FASTA entry.
///
/// `id` is the first whitespace-delimited token of the header, `description`
/// the rest of the header line (possibly empty) and `seq` the residues with
/// all line breaks removed. `title` is the header line as read, so tabs and
/// runs of spaces inside it survive a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceRecord {
    pub id: String,
    pub description: String,
    pub title: String,
    pub seq: String,
}

impl SequenceRecord {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        seq: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let description = description.into();
        let title = if description.is_empty() {
            id.clone()
        } else {
            format!("{} {}", id, description)
        };

        Self {
            id,
            description,
            title,
            seq: seq.into(),
        }
    }

    /// Builds a record from a header line without the leading `>`.
    pub fn from_header(header: &str) -> Self {
        let title = header.trim_end();
        let trimmed = title.trim_start();
        let (id, description) = match trimmed.split_once(char::is_whitespace) {
            Some((id, rest)) => (id, rest.trim()),
            None => (trimmed, ""),
        };

        Self {
            id: id.to_string(),
            description: description.to_string(),
            title: title.to_string(),
            seq: String::new(),
        }
    }

    /// Header line as written to disk, without the leading `>`.
    pub fn header(&self) -> &str {
        &self.title
    }

    pub fn sort_key(&self) -> FormatResult<i64> {
        sort_key(&self.id)
    }
}

/// Extracts the numeric ordering token from an identifier.
///
/// The token is the 4th `:`-delimited field (`sample:1:contig:42` -> 42).
///
/// # Example
///
/// ```rust,ignore
/// use reformatfasta::sort_key;
///
/// assert_eq!(sort_key("x:1:y:2").unwrap(), 2);
/// assert!(sort_key("x:1:y").is_err());
/// ```
pub fn sort_key(id: &str) -> FormatResult<i64> {
    let field = id
        .split(ID_DELIMITER)
        .nth(SORT_FIELD)
        .ok_or_else(|| FormatError::MalformedIdentifier {
            id: id.to_string(),
            reason: format!(
                "expected at least {} '{}'-delimited fields",
                SORT_FIELD + 1,
                ID_DELIMITER
            ),
        })?;

    field
        .trim()
        .parse::<i64>()
        .map_err(|e| FormatError::MalformedIdentifier {
            id: id.to_string(),
            reason: format!("field {:?} is not an integer: {}", field, e),
        })
}
