//! Data model for validation results.
//!
//! This module contains the values handed back to callers:
//! - `ValidationResult`: the verdict for one piece of content
//! - `HeaderRecord`: one header line found in the content
//!
//! Nothing here outlives a single call; the validator builds these fresh
//! for every input.

use crate::fasta::FastaResult;

/// Outcome of validating one piece of FASTA content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the content is well-formed FASTA
    pub is_valid: bool,
    /// User-facing diagnostic, present iff `is_valid` is false
    pub error: Option<String>,
    /// Number of sequence records, present iff `is_valid` is true
    pub sequence_count: Option<usize>,
    /// Non-fatal findings (currently always empty)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result for `sequence_count` records.
    pub fn valid(sequence_count: usize) -> Self {
        Self {
            is_valid: true,
            error: None,
            sequence_count: Some(sequence_count),
            warnings: Vec::new(),
        }
    }

    /// Creates a failing result carrying a diagnostic.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            sequence_count: None,
            warnings: Vec::new(),
        }
    }
}

impl From<FastaResult<usize>> for ValidationResult {
    fn from(result: FastaResult<usize>) -> Self {
        match result {
            Ok(count) => Self::valid(count),
            Err(e) => Self::invalid(e.to_string()),
        }
    }
}

/// A header line found in FASTA content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    /// 1-based line number of the header
    pub line_number: usize,
    /// Everything after the leading '>'
    pub header_text: String,
    /// Header fields; the whole header is kept as a single field
    pub fields: Vec<String>,
}

impl HeaderRecord {
    /// Creates a header record from the text following '>'.
    pub fn new(line_number: usize, header_text: impl Into<String>) -> Self {
        let header_text = header_text.into();
        Self {
            line_number,
            fields: vec![header_text.clone()],
            header_text,
        }
    }
}
