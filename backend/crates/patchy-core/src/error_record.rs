use crate::ValidationError;

use serde::Serialize;

/// Ordered collection of field and global errors for one resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorRecord {
    errors: Vec<ValidationError>,
}

impl ErrorRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn global_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.is_global())
    }

    /// Errors whose root field is `field`, nested paths included.
    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.root_field() == Some(field))
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_errors(field).next().is_some()
    }

    /// Whether `field` already failed to bind.
    pub fn has_binding_error(&self, field: &str) -> bool {
        self.field_errors(field).any(ValidationError::is_binding)
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl FromIterator<ValidationError> for ErrorRecord {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ErrorRecord {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ErrorRecord {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorRecord {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
