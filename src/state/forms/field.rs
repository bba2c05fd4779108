//! Form field value objects

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Multipart part name sent to the backend
    pub name: String,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    pub required: bool,
}

impl FormField {
    /// Create a new required text field
    pub fn required(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_multiline,
            required: true,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Insert a line break (ignored for single-line fields)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// A required field counts as missing only when it is completely empty
    pub fn is_missing(&self) -> bool {
        self.required && self.value.is_empty()
    }
}
