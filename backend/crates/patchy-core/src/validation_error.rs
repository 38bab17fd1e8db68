use std::fmt;

use serde::Serialize;

pub const TYPE_MISMATCH: &str = "type_mismatch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The raw value could not be coerced to the field's type.
    Binding,
    /// A validation rule failed.
    Rule,
}

/// One failed check, attributed to a field or to the object as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Field path (`name`, `address.street`, `tags[1]`); `None` for global errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    pub fn field<F, C, M>(field: F, code: C, message: M) -> Self
    where
        F: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            field: Some(field.into()),
            kind: ErrorKind::Rule,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn global<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self {
            field: None,
            kind: ErrorKind::Rule,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn binding<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: Some(field.into()),
            kind: ErrorKind::Binding,
            code: TYPE_MISMATCH.to_string(),
            message: message.into(),
        }
    }

    pub fn is_global(&self) -> bool {
        self.field.is_none()
    }

    pub fn is_binding(&self) -> bool {
        self.kind == ErrorKind::Binding
    }

    /// Top-level payload key this error belongs to: `address` for `address.street`.
    pub fn root_field(&self) -> Option<&str> {
        self.field
            .as_deref()
            .map(|path| path.split(['.', '[']).next().unwrap_or(path))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {} ({})", field, self.message, self.code),
            None => write!(f, "{} ({})", self.message, self.code),
        }
    }
}
