//! Form field value objects

/// How a field takes part in rendering and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Editable single-line input
    #[default]
    Text,
    /// Submitted with the form but never drawn
    Hidden,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
    /// Disabled fields are skipped on submit
    pub disabled: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::Text,
            disabled: false,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::text(name, label)
        }
    }

    /// Create a hidden field carrying a fixed value
    pub fn hidden(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: String::new(),
            value: value.into(),
            kind: FieldKind::Hidden,
            disabled: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.kind == FieldKind::Hidden
    }

    /// Whether the field contributes a pair to the submission body
    pub fn is_successful(&self) -> bool {
        !self.disabled && !self.name.is_empty()
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

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("Uber", "Uber");
        assert_eq!(field.as_text(), "");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(field.is_successful());
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("name", "Name");
        field.push_char('A');
        field.push_char('l');
        assert_eq!(field.as_text(), "Al");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("name", "Name");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text_with_value("name", "Name", "Alice");
        field.clear();
        assert!(field.as_text().is_empty());
    }

    #[test]
    fn test_disabled_field_is_not_successful() {
        let mut field = FormField::text_with_value("name", "Name", "Alice");
        field.disabled = true;
        assert!(!field.is_successful());
    }

    #[test]
    fn test_unnamed_field_is_not_successful() {
        let field = FormField::text_with_value("", "Orphan", "x");
        assert!(!field.is_successful());
    }

    #[test]
    fn test_hidden_field() {
        let field = FormField::hidden("csrf", "token");
        assert!(field.is_hidden());
        assert!(field.is_successful());
        assert_eq!(field.display_value(), "token");
    }
}
