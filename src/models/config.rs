//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across flows.
pub struct ClientConfig {
    /// Base URL of the portal backend, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    /// Path of the JSON file holding session and cached-profile state.
    pub storage_path: String,
}
