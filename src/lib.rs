//! Client-side engine of a citizen-services portal.
//!
//! The crate tracks the authenticated session, the guarded navigation state
//! and the per-service dynamic form schemas, and drives the submission flows
//! (profile, applications, payments, feedback) plus the administrator
//! dashboard against an external HTTP+JSON backend. Rendering is out of
//! scope: views consume [`state::AppState`] and the flow results, they never
//! own state of their own.
use crate::api::http::HttpBackend;
use crate::models::config::ClientConfig;
use crate::state::AppState;
use crate::storage::file::JsonFileStorage;

pub mod api;
pub mod catalog;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

/// Assembles the HTTP backend and the restored application state from the
/// provided configuration. The persisted session, if any, is reconstructed
/// synchronously before the first render.
pub fn bootstrap(config: &ClientConfig) -> (HttpBackend, AppState<JsonFileStorage>) {
    let backend = HttpBackend::new(config.api_base_url.as_str());
    let storage = JsonFileStorage::new(config.storage_path.as_str());
    let state = AppState::restore(storage);
    (backend, state)
}
