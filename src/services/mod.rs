//! Submission flows and the admin query engine.
//!
//! Every flow follows one contract: validate locally, require a session
//! token, call the backend collaborator, then either apply the completion
//! (cache records, navigate) or surface the backend's message verbatim and
//! leave the current view untouched. Flows are generic over the api traits
//! so tests substitute stub backends.
use thiserror::Error;
use validator::Validate;

use crate::api::ApiError;
use crate::domain::navigation::View;
use crate::domain::types::TypeConstraintError;
use crate::state::AppState;
use crate::storage::{KeyValueStorage, StorageError};

pub mod admin;
pub mod application;
pub mod auth;
pub mod feedback;
pub mod payment;
pub mod profile;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or wrong-role session.
    #[error("Not authorized")]
    Unauthorized,

    /// Local validation failure; no request was sent.
    #[error("{0}")]
    Form(String),

    /// Backend rejection or transport failure. The message is surfaced to
    /// the user verbatim.
    #[error("{0}")]
    Backend(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected(message) | ApiError::Network(message) => {
                ServiceError::Backend(message)
            }
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

/// Result of a flow whose completion races navigation and session changes.
///
/// A completion issued under an older state generation is `Stale`: the
/// request succeeded but its effects (caching, navigation) were discarded
/// because the world moved on while it was in flight.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowOutcome<T> {
    Applied(T),
    Stale,
}

impl<T> FlowOutcome<T> {
    pub fn is_stale(&self) -> bool {
        matches!(self, FlowOutcome::Stale)
    }

    /// The applied value, if the completion was not discarded.
    pub fn applied(self) -> Option<T> {
        match self {
            FlowOutcome::Applied(value) => Some(value),
            FlowOutcome::Stale => None,
        }
    }
}

/// Runs the derive-based validators of a form.
pub(crate) fn validate_form<F: Validate>(form: &F) -> ServiceResult<()> {
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })
}

/// Returns the session token or aborts the flow to the login view. A missing
/// token at submit time is a client-trust failure; no request is sent.
pub(crate) fn require_token<S: KeyValueStorage>(state: &mut AppState<S>) -> ServiceResult<String> {
    match state.token() {
        Some(token) => Ok(token.to_string()),
        None => {
            state.navigate(View::Login, None);
            Err(ServiceError::Unauthorized)
        }
    }
}
