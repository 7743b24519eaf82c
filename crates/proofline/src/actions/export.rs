//! Export actions - getting the corrected text out of the application

/// Which flow a download belongs to
///
/// Both flows save the last corrected text; they differ in file name and in
/// the warning shown when nothing has been corrected yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    /// Live text correction
    Text,
    /// File upload correction
    File,
}

impl DownloadKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Text => "corrected.txt",
            Self::File => "file_corrected.txt",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::Text => "Nothing to download yet.",
            Self::File => "No corrected text to download.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportAction {
    /// Copy the last corrected text to the system clipboard
    Copy,
    /// Save the last corrected text in the download directory
    Download(DownloadKind),
    /// Write an HTML report of the last correction
    Report,
}
