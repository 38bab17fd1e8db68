use crate::{PatchSchema, Patchable};

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Per-type patch schemas, keyed by the target's `TypeId`.
///
/// Populated at startup; read-only once handed to a [`crate::PatchResolver`].
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    names: HashMap<TypeId, &'static str>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the schema for `T`. A second registration replaces the first.
    pub fn register<T: Send + Sync + 'static>(&mut self, schema: PatchSchema<T>) -> &mut Self {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if self.schemas.insert(type_id, Arc::new(schema)).is_some() {
            log::warn!("Patch schema for {} registered twice, keeping the latest", type_name);
        }
        self.names.insert(type_id, type_name);

        self
    }

    pub fn register_type<T: Patchable>(&mut self) -> &mut Self {
        self.register(T::patch_schema())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<T: Send + Sync + 'static>(mut self, schema: PatchSchema<T>) -> Self {
        self.register(schema);
        self
    }

    /// Builder-style [`register_type`](Self::register_type).
    pub fn with_type<T: Patchable>(mut self) -> Self {
        self.register_type::<T>();
        self
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<PatchSchema<T>>> {
        let schema = self.schemas.get(&TypeId::of::<T>())?;
        Arc::clone(schema).downcast::<PatchSchema<T>>().ok()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered target type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.names.values().copied().collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
