use crate::PresenceMap;

use std::ops::Deref;

/// Answers "did the client send this field?" for a resolved update object.
pub trait FieldPresence {
    fn presence(&self) -> &PresenceMap;

    /// True when the key was in the payload, even if its value was `null`.
    fn was_supplied(&self, field: &str) -> bool {
        self.presence().contains(field)
    }

    fn supplied_fields(&self) -> Vec<&str> {
        self.presence().keys().collect()
    }
}

/// A bound update object paired with the presence map it was bound from.
///
/// Derefs to `T`, so business fields read as usual; presence queries go
/// through [`FieldPresence`].
#[derive(Debug, Clone, PartialEq)]
pub struct Patched<T> {
    value: T,
    presence: PresenceMap,
}

impl<T> Patched<T> {
    pub fn new(value: T, presence: PresenceMap) -> Self {
        Self { value, presence }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, PresenceMap) {
        (self.value, self.presence)
    }

    /// `Some(value)` when `field` was supplied; lets callers apply one field at a time.
    pub fn supplied<'a, V>(&'a self, field: &str, get: impl FnOnce(&'a T) -> V) -> Option<V> {
        if self.was_supplied(field) {
            Some(get(&self.value))
        } else {
            None
        }
    }
}

impl<T> FieldPresence for Patched<T> {
    fn presence(&self) -> &PresenceMap {
        &self.presence
    }
}

impl<T> Deref for Patched<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
