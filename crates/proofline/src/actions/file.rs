//! File correction actions

use proofline_client::FileCorrection;

#[derive(Debug, Clone)]
pub enum FileAction {
    /// Upload the file named in the file field
    Correct,
    /// The service corrected the file
    Succeeded { seq: u64, file: FileCorrection },
    /// Reading or uploading the file failed
    Failed { seq: u64, error: String },
}
