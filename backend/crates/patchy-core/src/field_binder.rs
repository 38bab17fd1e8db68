use crate::{ErrorRecord, PresenceMap, ValidationError};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

type SetterFn<T> = dyn Fn(&mut T, &Value) -> Result<(), serde_json::Error> + Send + Sync;

/// Declared fields of a target type and how to assign each one from a raw value.
pub struct FieldBinder<T> {
    setters: HashMap<&'static str, Arc<SetterFn<T>>>,
}

impl<T> FieldBinder<T> {
    pub fn new() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    /// Declare `name`. The raw value is coerced to `V` before `assign` is called,
    /// so a nullable field should declare `V = Option<_>`.
    pub fn field<V, F>(mut self, name: &'static str, assign: F) -> Self
    where
        T: 'static,
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let setter = move |target: &mut T, raw: &Value| -> Result<(), serde_json::Error> {
            let value = V::deserialize(raw)?;
            assign(target, value);
            Ok(())
        };
        self.setters.insert(name, Arc::new(setter));
        self
    }

    pub fn declares(&self, name: &str) -> bool {
        self.setters.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.setters.keys().copied()
    }

    /// Assign every supplied key that names a declared field.
    ///
    /// Unknown keys are skipped. A value that fails coercion leaves the field
    /// at its current state and yields a binding error; other fields still bind.
    pub fn bind(&self, target: &mut T, presence: &PresenceMap) -> ErrorRecord {
        let mut errors = ErrorRecord::new();

        for (name, raw) in presence.iter() {
            let Some(setter) = self.setters.get(name) else {
                log::debug!(
                    "Ignoring unknown field '{}' for {}",
                    name,
                    std::any::type_name::<T>()
                );
                continue;
            };

            if let Err(e) = setter(target, raw) {
                errors.push(ValidationError::binding(name, format!("Invalid value: {}", e)));
            }
        }

        errors
    }
}

impl<T> Default for FieldBinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldBinder<T> {
    fn clone(&self) -> Self {
        Self {
            setters: self.setters.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldBinder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.setters.keys().collect();
        names.sort();
        f.debug_struct("FieldBinder").field("fields", &names).finish()
    }
}
