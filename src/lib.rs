//! # fastacheck - FASTA Structure Validator
//!
//! Checks that text is well-formed FASTA before it is accepted as a
//! reference file, and tells the user where the first problem is.
//!
//! ## Architecture
//!
//! - `alphabet`: Character classes allowed in sequence lines
//! - `fasta`: The validation state machine, quick sniff and header listing
//! - `model`: Result types handed back to callers
//! - `provider`: Pluggable file access and the async `validate_file` wrapper
//!
//! ## Example
//!
//! ```
//! use fastacheck::{extract_headers, looks_like_fasta, validate_content};
//!
//! let content = ">seqA sample\nACGT\nACGT\n>seqB\nNNNN\n";
//! assert!(looks_like_fasta(content));
//!
//! let result = validate_content(content);
//! assert!(result.is_valid);
//! assert_eq!(result.sequence_count, Some(2));
//!
//! let headers = extract_headers(content);
//! assert_eq!(headers[1].line_number, 4);
//! ```

pub mod alphabet;
pub mod fasta;
pub mod model;
pub mod provider;

pub use fasta::{
    check_content, extract_headers, looks_like_fasta, validate_content, FastaError, FastaResult,
};
pub use model::{HeaderRecord, ValidationResult};
pub use provider::{decode_content, validate_file, FileContentProvider, FsProvider};
