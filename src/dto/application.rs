use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/applications`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationData {
    pub service_id: i64,
    pub service_specific_data: HashMap<String, String>,
}

/// Minimal view of the record returned by `POST /api/applications`; only the
/// identifier is needed client-side (it keys follow-up document uploads).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedApplication {
    pub application_id: i64,
}

/// A document attached to an application, shipped as multipart form data to
/// `POST /api/documents/upload`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentUpload {
    /// Backend document type marker, e.g. `NID_COPY` or `PASSPORT_PHOTO`.
    pub document_type: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}
