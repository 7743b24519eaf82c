//! Correction service trait
//!
//! This module defines the `CorrectionService` trait that every client
//! implementation must satisfy.

use crate::error::ClientError;
use crate::types::{CorrectionReport, FileCorrection};
use async_trait::async_trait;

/// Correction service client trait
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// by every request task.
///
/// # Example
///
/// ```rust,ignore
/// use proofline_client::{CorrectionService, CorrectionReport, ClientError};
///
/// async fn fix(client: &dyn CorrectionService) -> Result<CorrectionReport, ClientError> {
///     client.correct("teh quick fox").await
/// }
/// ```
#[async_trait]
pub trait CorrectionService: Send + Sync {
    /// Correct a text
    ///
    /// # Arguments
    ///
    /// * `text` - Full text to correct, sent verbatim
    ///
    /// # Returns
    ///
    /// The corrected text with suggestions and metrics.
    async fn correct(&self, text: &str) -> Result<CorrectionReport, ClientError>;

    /// Add a word to the service's custom dictionary
    ///
    /// # Returns
    ///
    /// The word as stored by the service, or the service's error message.
    async fn add_word(&self, word: &str) -> Result<String, ClientError>;

    /// Correct the content of a plain-text file
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name sent along with the upload
    /// * `content` - Raw file bytes
    async fn correct_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<FileCorrection, ClientError>;
}
