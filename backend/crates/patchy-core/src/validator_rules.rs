//! [`RuleSet`] adapter for types deriving `validator::Validate`.

use crate::{RuleSet, ValidationError};

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Key `validator` uses for struct-level (schema) errors.
const SCHEMA_KEY: &str = "__all__";

/// Runs `Validate::validate` and flattens the result into field/global errors.
///
/// Nested errors become `parent.child` and `parent[index]` paths. Struct-level
/// errors on the top-level type become global errors. Output is sorted by
/// field name so identical targets always yield identical error lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorRules;

impl<T: Validate> RuleSet<T> for ValidatorRules {
    fn check(&self, target: &T) -> Vec<ValidationError> {
        let mut out = Vec::new();
        if let Err(errors) = target.validate() {
            flatten(&errors, None, &mut out);
        }
        out
    }
}

fn flatten(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<ValidationError>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (name, kind) in entries {
        let name: &str = name;
        let path = match prefix {
            Some(parent) if name == SCHEMA_KEY => parent.to_string(),
            Some(parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let code = failure.code.to_string();
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| default_message(&code));

                    if prefix.is_none() && name == SCHEMA_KEY {
                        out.push(ValidationError::global(code, message));
                    } else {
                        out.push(ValidationError::field(path.clone(), code, message));
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

fn default_message(code: &str) -> String {
    match code {
        "required" => "is required".to_string(),
        "length" => "has an invalid length".to_string(),
        "range" => "is out of range".to_string(),
        "email" => "is not a valid email address".to_string(),
        "url" => "is not a valid URL".to_string(),
        other => format!("failed the '{}' check", other),
    }
}
