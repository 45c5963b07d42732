use std::collections::HashMap;

use crate::catalog;
use crate::dto::application::{ApplicationData, DocumentUpload};

/// In-progress service application form.
///
/// Extra-field values are keyed by the schema keys of the selected service.
/// Selecting a different service discards every entered value — the schemas
/// do not overlap meaningfully and stale values must not leak across
/// services.
#[derive(Clone, Debug, Default)]
pub struct ApplicationForm {
    service_id: i64,
    values: HashMap<String, String>,
    documents: Vec<DocumentUpload>,
}

impl ApplicationForm {
    pub fn new(service_id: i64) -> Self {
        Self {
            service_id,
            ..Self::default()
        }
    }

    pub fn service_id(&self) -> i64 {
        self.service_id
    }

    /// Switches the form to another service, resetting all extra-field
    /// values. Re-selecting the current service keeps the entered values.
    pub fn switch_service(&mut self, service_id: i64) {
        if service_id != self.service_id {
            self.service_id = service_id;
            self.values.clear();
        }
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn attach_document(&mut self, document: DocumentUpload) {
        self.documents.push(document);
    }

    pub fn documents(&self) -> &[DocumentUpload] {
        &self.documents
    }

    /// Labels of required schema fields that are still empty, in schema
    /// order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        catalog::resolve(self.service_id)
            .iter()
            .filter(|field| field.required)
            .filter(|field| {
                self.values
                    .get(field.key)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|field| field.label)
            .collect()
    }

    /// Assembles the wire payload.
    pub fn to_data(&self) -> ApplicationData {
        ApplicationData {
            service_id: self.service_id,
            service_specific_data: self.values.clone(),
        }
    }
}
