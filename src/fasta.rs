//! FASTA content validator.
//!
//! This module checks that text is structurally well-formed FASTA, counts
//! its records and reports the first violation with its line number.
//! Sequences may span several lines; blank lines are ignored.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Sequence lines may only contain IUPAC nucleotide codes
//! (`ACGTUWSMKRYBDHVN`, any case) and the gap symbol `-`.

use std::ffi::OsStr;
use std::path::Path;

use thiserror::Error;

use crate::alphabet::{invalid_chars, is_nucleotide};
use crate::model::{HeaderRecord, ValidationResult};

/// Marker opening every header line.
pub const HEADER_MARKER: char = '>';

/// Byte order mark; editors on Windows often prepend it to text files.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// File extensions conventionally used for FASTA files.
pub const FASTA_EXTENSIONS: &[&str] = &["fa", "fas", "fasta", "fna", "faa", "ffn", "frn"];

/// Errors that can occur during FASTA validation.
///
/// The `Display` text is meant to be shown to users as-is.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("File is empty")]
    EmptyContent,

    #[error("Line {0}: Found sequence data before any header")]
    SequenceBeforeHeader(usize),

    #[error("Line {0}: Header is empty (only contains '>')")]
    EmptyHeader(usize),

    #[error("Line {}: Invalid characters in sequence: {}", .line, join_chars(.chars))]
    InvalidSequenceCharacters { line: usize, chars: Vec<char> },

    #[error("No FASTA headers found (lines starting with \">\")")]
    NoHeaderFound,

    #[error("No sequences found after headers")]
    NoSequencesFound,

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Trims whitespace and byte order marks from both ends of `text`.
fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Where the validator stands between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// No header seen yet.
    Preamble { buffered: usize },
    /// After a header; `buffered` residues belong to the current record.
    Record { buffered: usize },
}

/// Line-driven state machine behind `check_content`.
#[derive(Debug)]
struct Validator {
    state: ParseState,
    sequence_count: usize,
}

impl Validator {
    fn new() -> Self {
        Self {
            state: ParseState::Preamble { buffered: 0 },
            sequence_count: 0,
        }
    }

    /// Closes the current record if it holds any residues.
    fn finalize_record(&mut self) {
        if let ParseState::Record { buffered } = self.state {
            if buffered > 0 {
                self.sequence_count += 1;
                self.state = ParseState::Record { buffered: 0 };
            }
        }
    }

    /// Handles a trimmed line starting with the header marker.
    fn header(&mut self, line_number: usize, line: &str) -> FastaResult<()> {
        // Residues cannot be buffered before a header; kept as a guard.
        if let ParseState::Preamble { buffered } = self.state {
            if buffered > 0 {
                return Err(FastaError::SequenceBeforeHeader(line_number));
            }
        }

        self.finalize_record();
        self.state = ParseState::Record { buffered: 0 };

        if line.len() == HEADER_MARKER.len_utf8() {
            return Err(FastaError::EmptyHeader(line_number));
        }
        Ok(())
    }

    /// Handles a trimmed, non-empty line that is not a header.
    fn sequence(&mut self, line_number: usize, line: &str) -> FastaResult<()> {
        let buffered = match self.state {
            ParseState::Preamble { .. } => {
                return Err(FastaError::SequenceBeforeHeader(line_number));
            }
            ParseState::Record { buffered } => buffered,
        };

        let invalid = invalid_chars(line);
        if !invalid.is_empty() {
            return Err(FastaError::InvalidSequenceCharacters {
                line: line_number,
                chars: invalid,
            });
        }

        self.state = ParseState::Record {
            buffered: buffered + line.len(),
        };
        Ok(())
    }

    /// Consumes the validator at end of input and returns the record count.
    fn finish(mut self) -> FastaResult<usize> {
        self.finalize_record();

        if let ParseState::Preamble { .. } = self.state {
            return Err(FastaError::NoHeaderFound);
        }
        if self.sequence_count == 0 {
            return Err(FastaError::NoSequencesFound);
        }
        Ok(self.sequence_count)
    }
}

/// Validates FASTA content and returns the number of records.
///
/// Stops at the first violation. Line numbers count every physical line,
/// blank ones included, starting at 1.
///
/// # Examples
///
/// ```
/// use fastacheck::fasta::{check_content, FastaError};
///
/// assert_eq!(check_content(">seqA\nACGT\n>seqB\nNNNN").unwrap(), 2);
/// assert!(matches!(check_content(">\nACGT"), Err(FastaError::EmptyHeader(1))));
/// ```
pub fn check_content(content: &str) -> FastaResult<usize> {
    if trim(content).is_empty() {
        return Err(FastaError::EmptyContent);
    }

    let mut validator = Validator::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = trim(line);

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if line.starts_with(HEADER_MARKER) {
            validator.header(line_number, line)?;
        } else {
            validator.sequence(line_number, line)?;
        }
    }

    validator.finish()
}

/// Validates FASTA content and returns a result ready to show to users.
///
/// Never panics; every failure is reported through `ValidationResult::error`.
pub fn validate_content(content: &str) -> ValidationResult {
    let result = ValidationResult::from(check_content(content));
    match (&result.error, result.sequence_count) {
        (Some(error), _) => log::debug!("FASTA content rejected: {}", error),
        (None, Some(count)) => log::debug!("FASTA content accepted: {} sequences", count),
        (None, None) => {}
    }
    result
}

/// Quick check whether text looks like FASTA.
///
/// True when the first non-empty line starts with '>' and the text holds at
/// least one of A, C, G, T, U (any case). Works on partial previews and is
/// no substitute for `validate_content`.
pub fn looks_like_fasta(content: &str) -> bool {
    let trimmed = trim(content);
    let Some(first_line) = trimmed.lines().next() else {
        return false;
    };
    first_line.starts_with(HEADER_MARKER) && trimmed.chars().any(is_nucleotide)
}

/// Lists every header line in file order.
///
/// Does no structural checking: content that fails validation still yields
/// its headers.
pub fn extract_headers(content: &str) -> Vec<HeaderRecord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            trim(line)
                .strip_prefix(HEADER_MARKER)
                .map(|header| HeaderRecord::new(index + 1, header))
        })
        .collect()
}

/// Returns true if the path carries a conventional FASTA extension.
pub fn has_fasta_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            let ext = ext.to_lowercase();
            FASTA_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
