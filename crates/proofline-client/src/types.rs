//! Correction service data transfer objects
//!
//! These types mirror the JSON bodies of the correction service. They are
//! kept separate from the application's view state so this crate stays
//! reusable.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/correct`
#[derive(Debug, Clone, Serialize)]
pub struct CorrectRequest<'a> {
    pub text: &'a str,
}

/// Body of `POST /api/add_word`
#[derive(Debug, Clone, Serialize)]
pub struct AddWordRequest<'a> {
    pub word: &'a str,
}

/// A spelling correction reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Token as written by the user
    pub from: String,

    /// Token the service replaced it with
    pub to: String,

    /// Alternative candidates, best first (may be absent)
    #[serde(default)]
    pub candidates: Vec<String>,

    /// Position of the token in the service's own tokenization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Text statistics computed by the service
///
/// Every field is optional: a missing value is rendered as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub words: Option<u64>,

    #[serde(default)]
    pub sentences: Option<u64>,

    #[serde(default)]
    pub chars: Option<u64>,
}

/// Readability as reported by the service
///
/// Whether the service sends a numeric index or a label is not part of the
/// contract, so the raw JSON value is kept and displayed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Readability(pub serde_json::Value);

impl Readability {
    /// True if the service did not send a value
    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Display for Readability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => f.write_str("-"),
            serde_json::Value::String(label) => f.write_str(label),
            other => write!(f, "{}", other),
        }
    }
}

/// Response of `POST /api/correct`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// Text as received by the service
    #[serde(default)]
    pub original: String,

    /// Corrected text
    pub corrected: String,

    /// Spelling fixes, in text order
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,

    #[serde(default)]
    pub metrics: Metrics,

    /// Grammar score in percent
    #[serde(default)]
    pub grammar_score: Option<f64>,

    #[serde(default)]
    pub readability: Readability,
}

/// Response of `POST /api/add_word`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddWordResponse {
    pub success: bool,

    /// The word as stored by the service (normalized)
    #[serde(default)]
    pub word: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl AddWordResponse {
    /// Turn the response into the stored word or a service error
    pub fn into_result(self, requested: &str) -> Result<String, ClientError> {
        if self.success {
            Ok(self.word.unwrap_or_else(|| requested.to_string()))
        } else {
            Err(ClientError::Service(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

/// Response of `POST /api/correct_file`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileCorrectionResponse {
    pub success: bool,

    #[serde(default)]
    pub corrected: Option<String>,

    #[serde(default)]
    pub suggestions: Option<Vec<Suggestion>>,

    #[serde(default)]
    pub metrics: Option<Metrics>,

    #[serde(default)]
    pub grammar_score: Option<f64>,

    #[serde(default)]
    pub readability: Readability,

    #[serde(default)]
    pub error: Option<String>,
}

/// A successful file correction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileCorrection {
    pub corrected: String,
    pub suggestions: Vec<Suggestion>,
    pub metrics: Metrics,
    pub grammar_score: Option<f64>,
    pub readability: Readability,
}

impl FileCorrectionResponse {
    /// Turn the response into a file correction or a service error
    pub fn into_result(self) -> Result<FileCorrection, ClientError> {
        if !self.success {
            return Err(ClientError::Service(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        let corrected = self
            .corrected
            .ok_or_else(|| ClientError::Decode("response has no corrected text".to_string()))?;

        Ok(FileCorrection {
            corrected,
            suggestions: self.suggestions.unwrap_or_default(),
            metrics: self.metrics.unwrap_or_default(),
            grammar_score: self.grammar_score,
            readability: self.readability,
        })
    }
}
