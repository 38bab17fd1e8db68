use crate::{ErrorRecord, ResolveStage};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// The payload could not be read as a key/value document. Client-caused.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed payload: {source} {location}")]
    Malformed {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Payload must be a JSON object, found {found} {location}")]
    NotAnObject {
        found: &'static str,
        location: ErrorLocation,
    },
}

impl DecodeError {
    #[track_caller]
    pub fn malformed(source: serde_json::Error) -> Self {
        DecodeError::Malformed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_an_object(found: &'static str) -> Self {
        DecodeError::NotAnObject {
            found,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// The target type could not be instantiated. A registration defect, never the client's fault.
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("No patch schema registered for {type_name} {location}")]
    Unregistered {
        type_name: &'static str,
        location: ErrorLocation,
    },

    #[error("Factory for {type_name} failed: {message} {location}")]
    Factory {
        type_name: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ConstructionError {
    #[track_caller]
    pub fn unregistered<T: ?Sized>() -> Self {
        ConstructionError::Unregistered {
            type_name: std::any::type_name::<T>(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn factory<T: ?Sized, S: Into<String>>(message: S) -> Self {
        ConstructionError::Factory {
            type_name: std::any::type_name::<T>(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("Validation failed with {} error(s)", errors.len())]
    Rejected { errors: ErrorRecord },
}

impl ResolveError {
    /// The pipeline stage at which resolution stopped.
    pub fn stage(&self) -> ResolveStage {
        match self {
            ResolveError::Decode(_) => ResolveStage::Decoding,
            ResolveError::Construction(_) => ResolveStage::Constructing,
            ResolveError::Rejected { .. } => ResolveStage::Filtering,
        }
    }

    /// The surviving field/global errors, for a rejected request.
    pub fn errors(&self) -> Option<&ErrorRecord> {
        match self {
            ResolveError::Rejected { errors } => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, ResolveError>;
