//! Client for the text correction service
//!
//! This crate provides a trait-based client for the correction service. The
//! application talks to [`CorrectionService`] only, so tests can swap the
//! HTTP implementation for an in-memory one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            CorrectionService trait              │
//! │  - correct()        POST /api/correct           │
//! │  - add_word()       POST /api/add_word          │
//! │  - correct_file()   POST /api/correct_file      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────────┐
//!              │ HttpCorrectionClient│
//!              │ (reqwest)           │
//!              └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use proofline_client::{CorrectionService, HttpCorrectionClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), proofline_client::ClientError> {
//! let client = HttpCorrectionClient::new("http://127.0.0.1:5000", Duration::from_secs(15))?;
//! let report = client.correct("I has a dog").await?;
//! println!("{}", report.corrected);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::CorrectionService;
pub use error::ClientError;
pub use http_client::HttpCorrectionClient;
pub use types::{
    AddWordResponse, CorrectionReport, FileCorrection, FileCorrectionResponse, Metrics,
    Readability, Suggestion,
};
