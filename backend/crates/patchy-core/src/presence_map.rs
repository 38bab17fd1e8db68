use serde_json::{Map, Value};

/// Field name to decoded value, exactly as the client sent it.
///
/// A key being present is the only signal that a field was supplied. A key
/// mapped to `Value::Null` was supplied as null; a missing key was omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenceMap {
    entries: Map<String, Value>,
}

impl PresenceMap {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Whether the client supplied `field`, regardless of its value.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// The raw value supplied for `field`. `Some(&Value::Null)` means "sent as null".
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.get(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map<String, Value>> for PresenceMap {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<(String, Value)> for PresenceMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
