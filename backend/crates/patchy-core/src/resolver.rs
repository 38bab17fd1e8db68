//! Orchestrates one PATCH resolution:
//! `Decoding → Constructing → Binding → Validating → Filtering → Accept | Reject`.
//!
//! Stages run strictly in order and are never retried. Decode and
//! construction failures end the run immediately; binding and rule errors
//! are collected so the client sees every relevant problem at once.

use crate::{
    ConstructionError, ErrorRecord, JsonDecoder, PatchSchema, Patched, PayloadDecoder,
    PresenceMap, ResolveError, Result, SchemaRegistry, filter_unsupplied_field_errors, run_rules,
};

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStage {
    Decoding,
    Constructing,
    Binding,
    Validating,
    Filtering,
}

impl fmt::Display for ResolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolveStage::Decoding => "decoding",
            ResolveStage::Constructing => "constructing",
            ResolveStage::Binding => "binding",
            ResolveStage::Validating => "validating",
            ResolveStage::Filtering => "filtering",
        };
        f.write_str(name)
    }
}

/// Outcome of a non-fatal resolution: the bound target and its filtered errors.
#[derive(Debug, Clone)]
pub struct Resolution<T> {
    target: Patched<T>,
    errors: ErrorRecord,
}

impl<T> Resolution<T> {
    pub fn target(&self) -> &Patched<T> {
        &self.target
    }

    pub fn errors(&self) -> &ErrorRecord {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn into_target(self) -> Patched<T> {
        self.target
    }

    pub fn into_parts(self) -> (Patched<T>, ErrorRecord) {
        (self.target, self.errors)
    }

    /// Accept when no errors survived filtering, otherwise reject with them.
    pub fn into_result(self) -> Result<Self> {
        if self.errors.has_errors() {
            Err(ResolveError::Rejected {
                errors: self.errors,
            })
        } else {
            Ok(self)
        }
    }
}

/// Stateless, shareable resolver. Clone it freely; every call allocates its
/// own presence map, target, and error record.
#[derive(Clone)]
pub struct PatchResolver {
    decoder: Arc<dyn PayloadDecoder>,
    registry: Arc<SchemaRegistry>,
}

impl PatchResolver {
    /// Resolver decoding JSON bodies.
    pub fn new(registry: SchemaRegistry) -> Self {
        Self::with_decoder(registry, JsonDecoder)
    }

    pub fn with_decoder<D: PayloadDecoder + 'static>(registry: SchemaRegistry, decoder: D) -> Self {
        Self {
            decoder: Arc::new(decoder),
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Resolve `payload` into a `T` and decide: `Ok` only when no relevant errors remain.
    pub fn resolve<T: Send + Sync + 'static>(&self, payload: &[u8]) -> Result<Resolution<T>> {
        self.resolve_collecting(payload)?.into_result()
    }

    /// Same pipeline for a payload that is already decoded.
    pub fn resolve_map<T: Send + Sync + 'static>(
        &self,
        presence: PresenceMap,
    ) -> Result<Resolution<T>> {
        let schema = self.schema::<T>()?;
        run_pipeline(&schema, presence)?.into_result()
    }

    /// Resolve without deciding. Only decode and construction failures are
    /// errors; binding and rule errors ride along in the [`Resolution`].
    pub fn resolve_collecting<T: Send + Sync + 'static>(
        &self,
        payload: &[u8],
    ) -> Result<Resolution<T>> {
        log::trace!(
            "Resolving {}: {}",
            std::any::type_name::<T>(),
            ResolveStage::Decoding
        );
        let presence = self.decoder.decode(payload)?;

        let schema = self.schema::<T>()?;
        Ok(run_pipeline(&schema, presence)?)
    }

    fn schema<T: Send + Sync + 'static>(
        &self,
    ) -> std::result::Result<Arc<PatchSchema<T>>, ConstructionError> {
        self.registry
            .get::<T>()
            .ok_or_else(|| ConstructionError::unregistered::<T>())
    }
}

impl fmt::Debug for PatchResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatchResolver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

fn run_pipeline<T: 'static>(
    schema: &PatchSchema<T>,
    presence: PresenceMap,
) -> std::result::Result<Resolution<T>, ConstructionError> {
    let type_name = std::any::type_name::<T>();

    log::trace!("Resolving {}: {}", type_name, ResolveStage::Constructing);
    let mut value = schema.factory().construct()?;

    log::trace!("Resolving {}: {}", type_name, ResolveStage::Binding);
    let binding_errors = schema.binder().bind(&mut value, &presence);

    log::trace!("Resolving {}: {}", type_name, ResolveStage::Validating);
    let raw_errors = run_rules(schema.rule_set(), &value, binding_errors);

    log::trace!("Resolving {}: {}", type_name, ResolveStage::Filtering);
    let errors = filter_unsupplied_field_errors(&raw_errors, &presence);

    log::debug!(
        "Resolved {} with {} supplied field(s): {} raw error(s), {} after filtering",
        type_name,
        presence.len(),
        raw_errors.len(),
        errors.len()
    );

    Ok(Resolution {
        target: Patched::new(value, presence),
        errors,
    })
}
