//! File access for the validator.
//!
//! Validation itself works on strings. Fetching the bytes is delegated to a
//! `FileContentProvider`, so the same validator runs against the local
//! filesystem, an upload buffer, or anything else that can hand back bytes.

use std::borrow::Cow;
use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::fasta::{validate_content, FastaError, BYTE_ORDER_MARK};
use crate::model::ValidationResult;

/// Capability that resolves a file handle to its raw bytes.
#[async_trait]
pub trait FileContentProvider: Send + Sync {
    /// Opaque handle identifying a file.
    type Handle: Send + Sync + ?Sized;

    /// Fetches the full content of `handle`.
    async fn fetch(&self, handle: &Self::Handle) -> io::Result<Vec<u8>>;
}

/// Provider reading files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProvider;

#[async_trait]
impl FileContentProvider for FsProvider {
    type Handle = Path;

    async fn fetch(&self, handle: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(handle).await
    }
}

/// Decodes fetched bytes as UTF-8 text.
///
/// Malformed sequences become U+FFFD; a leading byte order mark is dropped.
pub fn decode_content(data: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(data) {
        Cow::Borrowed(text) => Cow::Borrowed(text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)),
        Cow::Owned(text) => match text.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(text),
        },
    }
}

/// Fetches a file through `provider` and validates its content.
///
/// Read failures come back as an invalid result ("Failed to read file: ...")
/// rather than as an error. Bytes are decoded as UTF-8; malformed sequences
/// are replaced and then rejected as invalid sequence characters.
pub async fn validate_file<P>(provider: &P, handle: &P::Handle) -> ValidationResult
where
    P: FileContentProvider + ?Sized,
{
    let data = match provider.fetch(handle).await {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to fetch file content: {}", e);
            return ValidationResult::invalid(FastaError::Io(e).to_string());
        }
    };

    log::debug!("Fetched {} bytes", data.len());
    validate_content(&decode_content(&data))
}
