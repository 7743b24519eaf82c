//! Input field state

use crate::actions::TextInputAction;

/// An editable text field with the cursor fixed at the end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    multi_line: bool,
}

impl InputField {
    pub fn single_line() -> Self {
        Self::default()
    }

    pub fn multi_line() -> Self {
        Self {
            value: String::new(),
            multi_line: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Apply an edit, returning whether the value changed
    pub fn apply(&mut self, action: &TextInputAction) -> bool {
        match action {
            TextInputAction::Char(c) => {
                self.value.push(*c);
                true
            }
            TextInputAction::Newline if self.multi_line => {
                self.value.push('\n');
                true
            }
            TextInputAction::Newline => false,
            TextInputAction::Backspace => self.value.pop().is_some(),
            TextInputAction::ClearLine => {
                let changed = !self.value.is_empty();
                self.value.clear();
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits() {
        let mut field = InputField::multi_line();
        assert!(field.apply(&TextInputAction::Char('h')));
        assert!(field.apply(&TextInputAction::Char('i')));
        assert!(field.apply(&TextInputAction::Newline));
        assert_eq!(field.value(), "hi\n");
        assert!(field.apply(&TextInputAction::Backspace));
        assert_eq!(field.value(), "hi");
        assert!(field.apply(&TextInputAction::ClearLine));
        assert!(!field.apply(&TextInputAction::Backspace));
        assert!(!field.apply(&TextInputAction::ClearLine));
    }

    #[test]
    fn test_single_line_ignores_newline() {
        let mut field = InputField::single_line();
        field.set("word");
        assert!(!field.apply(&TextInputAction::Newline));
        assert_eq!(field.value(), "word");
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        let mut field = InputField::single_line();
        field.set("café");
        field.apply(&TextInputAction::Backspace);
        assert_eq!(field.value(), "caf");
    }
}
