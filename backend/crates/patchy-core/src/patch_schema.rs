use crate::{FieldBinder, NoRules, RuleSet, TargetFactory};

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

/// Everything the resolver needs to know about one target type:
/// how to construct it, which fields it declares, and which rules apply.
///
/// Built once at startup, then shared read-only by every request.
pub struct PatchSchema<T> {
    factory: TargetFactory<T>,
    binder: FieldBinder<T>,
    rules: Arc<dyn RuleSet<T>>,
}

impl<T: Default + 'static> PatchSchema<T> {
    /// Schema constructing targets through `T::default()`, with no fields and no rules yet.
    pub fn new() -> Self {
        Self::with_factory(TargetFactory::from_default())
    }
}

impl<T: Default + 'static> Default for PatchSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> PatchSchema<T> {
    pub fn with_factory(factory: TargetFactory<T>) -> Self {
        Self {
            factory,
            binder: FieldBinder::new(),
            rules: Arc::new(NoRules),
        }
    }

    /// Declare a bindable field; see [`FieldBinder::field`].
    pub fn field<V, F>(mut self, name: &'static str, assign: F) -> Self
    where
        V: DeserializeOwned + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.binder = self.binder.field(name, assign);
        self
    }

    pub fn rules<R: RuleSet<T> + 'static>(mut self, rules: R) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    pub fn factory(&self) -> &TargetFactory<T> {
        &self.factory
    }

    pub fn binder(&self) -> &FieldBinder<T> {
        &self.binder
    }

    pub fn rule_set(&self) -> &dyn RuleSet<T> {
        self.rules.as_ref()
    }
}

impl<T> fmt::Debug for PatchSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatchSchema")
            .field("target", &std::any::type_name::<T>())
            .field("binder", &self.binder)
            .finish_non_exhaustive()
    }
}

/// A type that describes its own patch schema, so it can be registered by type alone.
pub trait Patchable: Sized + Send + Sync + 'static {
    fn patch_schema() -> PatchSchema<Self>;
}
