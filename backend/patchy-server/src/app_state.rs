use crate::store::Store;
use crate::{UpdateProjectRequest, UpdateWorkItemRequest};

use patchy_config::{Config, ValidationConfig};
use patchy_core::{PatchResolver, SchemaRegistry};

use axum::extract::FromRef;

/// Shared state for every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: PatchResolver,
    pub store: Store,
    pub validation: ValidationConfig,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let registry = build_schema_registry(&config.validation);
        log::info!("Patch schemas registered: {}", registry.len());

        Self {
            resolver: PatchResolver::new(registry),
            store: Store::new(),
            validation: config.validation.clone(),
            max_body_bytes: config.server.max_body_bytes,
        }
    }
}

impl FromRef<AppState> for PatchResolver {
    fn from_ref(state: &AppState) -> Self {
        state.resolver.clone()
    }
}

/// Every PATCH target the server accepts, with its config-driven rules
pub fn build_schema_registry(limits: &ValidationConfig) -> SchemaRegistry {
    SchemaRegistry::new()
        .with(UpdateWorkItemRequest::patch_schema(limits))
        .with(UpdateProjectRequest::patch_schema(limits))
}
