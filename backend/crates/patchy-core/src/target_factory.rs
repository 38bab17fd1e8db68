use crate::ConstructionError;

use std::fmt;
use std::sync::Arc;

type FactoryFn<T> = dyn Fn() -> Result<T, String> + Send + Sync;

/// Produces an empty instance of `T` to bind a payload into.
///
/// Registered once per target type; `construct` is called once per request.
pub struct TargetFactory<T> {
    make: Arc<FactoryFn<T>>,
}

impl<T: 'static> TargetFactory<T> {
    pub fn new<F>(make: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            make: Arc::new(move || Ok::<T, String>(make())),
        }
    }

    /// A factory that can refuse; the reason is reported as a construction error.
    pub fn fallible<F, E>(make: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: fmt::Display + 'static,
    {
        Self {
            make: Arc::new(move || make().map_err(|e| e.to_string())),
        }
    }

    pub fn construct(&self) -> Result<T, ConstructionError> {
        (self.make)().map_err(|message| ConstructionError::factory::<T, _>(message))
    }
}

impl<T: Default + 'static> TargetFactory<T> {
    pub fn from_default() -> Self {
        Self::new(T::default)
    }
}

impl<T> Clone for TargetFactory<T> {
    fn clone(&self) -> Self {
        Self {
            make: Arc::clone(&self.make),
        }
    }
}

impl<T> fmt::Debug for TargetFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetFactory")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}
