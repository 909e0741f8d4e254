use crate::models::{TodoRequest, ValidTodoRequest};

pub const TEXT_BLANK: &str = "text must not be blank";
pub const DONE_MISSING: &str = "done must not be null";

/// Field violations found in a request body, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailed {
    pub violations: Vec<String>,
}

impl ValidationFailed {
    /// All violations as a single " | " separated message
    pub fn message(&self) -> String {
        self.violations.join(" | ")
    }
}

impl TodoRequest {
    /// Check that `text` is present and non-blank and that `done` was supplied.
    pub fn validate(self) -> Result<ValidTodoRequest, ValidationFailed> {
        let mut violations = Vec::new();

        let text = self.text.filter(|text| !text.trim().is_empty());
        if text.is_none() {
            violations.push(TEXT_BLANK.to_string());
        }
        if self.done.is_none() {
            violations.push(DONE_MISSING.to_string());
        }

        match (text, self.done) {
            (Some(text), Some(done)) => Ok(ValidTodoRequest { text, done }),
            _ => Err(ValidationFailed { violations }),
        }
    }
}
