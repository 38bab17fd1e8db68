//! Presence-aware resolution of partial-update (PATCH) payloads.
//!
//! A payload is decoded into a [`PresenceMap`], bound onto a freshly
//! constructed target, validated as if it were a complete object, and the
//! validation errors are then reduced to the fields the client actually sent.

pub mod decoder;
pub mod error;
pub mod error_filter;
pub mod error_record;
pub mod field_binder;
pub mod patch_schema;
pub mod patched;
pub mod presence_map;
pub mod resolver;
pub mod rule_set;
pub mod schema_registry;
pub mod target_factory;
pub mod validation;
pub mod validation_error;
pub mod validator_rules;

pub use decoder::{JsonDecoder, PayloadDecoder};
pub use error::{ConstructionError, DecodeError, ResolveError, Result};
pub use error_filter::filter_unsupplied_field_errors;
pub use error_record::ErrorRecord;
pub use field_binder::FieldBinder;
pub use patch_schema::{PatchSchema, Patchable};
pub use patched::{FieldPresence, Patched};
pub use presence_map::PresenceMap;
pub use resolver::{PatchResolver, Resolution, ResolveStage};
pub use rule_set::{NoRules, RuleSet};
pub use schema_registry::SchemaRegistry;
pub use target_factory::TargetFactory;
pub use validation::run_rules;
pub use validation_error::{ErrorKind, ValidationError};
pub use validator_rules::ValidatorRules;

#[cfg(test)]
mod tests;
