//! Text input actions - applied to whichever field has focus

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Line break (multi-line editor only)
    Newline,
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire field (Ctrl+U)
    ClearLine,
}
