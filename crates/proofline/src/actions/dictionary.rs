//! Custom dictionary actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryAction {
    /// Add the word in the dictionary field
    Add,
    /// The service stored the word
    Added { word: String },
    /// The service refused the word or could not be reached
    Failed { error: String },
}
