//! Backend collaborator interface.
//!
//! The portal backend is an external HTTP+JSON service; every call that needs
//! authentication forwards the opaque session token as a bearer credential.
//! Flows depend on these traits, never on the concrete transport, so tests
//! substitute mock backends at this seam.
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::application::Application;
use crate::domain::feedback::{FeedbackItem, FeedbackStatus};
use crate::domain::profile::CitizenProfile;
use crate::dto::admin::DashboardStats;
use crate::dto::application::{ApplicationData, CreatedApplication, DocumentUpload};
use crate::dto::auth::{AdminAuthResponse, AdminLoginData, AuthResponse, LoginData, SignUpData};
use crate::dto::feedback::FeedbackData;
use crate::dto::payment::PaymentData;

pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. Carries the response body text, surfaced to the
    /// user verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Transport failure (connection refused, timeout, malformed body).
    #[error("{0}")]
    Network(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Unauthenticated account endpoints.
#[async_trait]
pub trait AuthApi {
    async fn signup(&self, data: &SignUpData) -> ApiResult<()>;
    async fn login(&self, data: &LoginData) -> ApiResult<AuthResponse>;
    async fn admin_login(&self, data: &AdminLoginData) -> ApiResult<AdminAuthResponse>;
}

/// Citizen profile endpoints.
#[async_trait]
pub trait ProfileApi {
    /// Returns `None` when the backend answers 404 — an absent profile is a
    /// normal state, not an error.
    async fn get_my_profile(&self, token: &str) -> ApiResult<Option<CitizenProfile>>;
    async fn create_profile(&self, data: &CitizenProfile, token: &str)
    -> ApiResult<CitizenProfile>;
    async fn update_profile(&self, data: &CitizenProfile, token: &str)
    -> ApiResult<CitizenProfile>;
}

/// Citizen application endpoints.
#[async_trait]
pub trait ApplicationApi {
    async fn create_application(
        &self,
        data: &ApplicationData,
        token: &str,
    ) -> ApiResult<CreatedApplication>;
    async fn get_my_applications(&self, token: &str) -> ApiResult<Vec<Application>>;
}

/// Payment submission endpoint.
#[async_trait]
pub trait PaymentApi {
    async fn submit_payment(&self, data: &PaymentData, token: &str) -> ApiResult<()>;
}

/// Administrator review endpoints.
#[async_trait]
pub trait AdminApi {
    async fn get_all_applications(&self, token: &str) -> ApiResult<Vec<Application>>;
    async fn get_application_stats(&self, token: &str) -> ApiResult<DashboardStats>;
    async fn approve_application(&self, application_id: i64, token: &str) -> ApiResult<()>;
    async fn reject_application(&self, application_id: i64, token: &str) -> ApiResult<()>;
}

/// Feedback endpoints.
#[async_trait]
pub trait FeedbackApi {
    async fn submit_feedback(&self, data: &FeedbackData, token: &str) -> ApiResult<FeedbackItem>;
    async fn list_feedback(&self, token: &str) -> ApiResult<Vec<FeedbackItem>>;
    async fn update_feedback_status(
        &self,
        feedback_id: i64,
        status: FeedbackStatus,
        token: &str,
    ) -> ApiResult<FeedbackItem>;
}

/// Document upload endpoint (multipart).
#[async_trait]
pub trait DocumentApi {
    /// Uploads one document for an existing application and returns the
    /// backend's acknowledgement text.
    async fn upload_document(
        &self,
        application_id: i64,
        upload: &DocumentUpload,
        token: &str,
    ) -> ApiResult<String>;
}
