use serde::Serialize;

/// Width of the `VARCHAR` columns holding names, countries and models.
pub const MAX_TEXT_LEN: usize = 128;

/// One failed field constraint, as listed in 422 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self { field: field.to_string(), message: message.into() }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn join_violations(v: &[FieldViolation]) -> String {
    v.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Non-blank and at most [`MAX_TEXT_LEN`] characters.
pub fn check_text(field: &str, value: &str) -> Result<(), FieldViolation> {
    if value.trim().is_empty() {
        return Err(FieldViolation::new(field, "must not be blank"));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(FieldViolation::new(field, format!("must be at most {MAX_TEXT_LEN} characters")));
    }
    Ok(())
}
