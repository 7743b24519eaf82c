//! Live correction actions
//!
//! `Request` is the intent (explicit key binding or debounce fire); reducing
//! it hands out the request's sequence number. The remaining variants are
//! reported by the request task and carry that number so the reducer can
//! discard stale results.

use proofline_client::CorrectionReport;

#[derive(Debug, Clone)]
pub enum CorrectionAction {
    /// Correct the current editor text
    Request,
    /// The service answered
    Succeeded {
        seq: u64,
        /// Exact text that was sent, used as the original side of the diff
        request_text: String,
        report: CorrectionReport,
    },
    /// The request failed
    Failed { seq: u64, error: String },
}
