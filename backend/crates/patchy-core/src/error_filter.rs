use crate::{ErrorRecord, PresenceMap};

/// Reduces full-object validation output to partial-update validation output.
///
/// Global errors always survive. A field error survives only when its root
/// field was a key in the payload; errors about omitted fields are dropped.
/// The input is left untouched and relative order is preserved.
pub fn filter_unsupplied_field_errors(raw: &ErrorRecord, presence: &PresenceMap) -> ErrorRecord {
    raw.iter()
        .filter(|error| match error.root_field() {
            None => true,
            Some(field) if presence.contains(field) => true,
            Some(field) => {
                log::debug!("Dropping error for unsupplied field '{}': {}", field, error);
                false
            }
        })
        .cloned()
        .collect()
}
