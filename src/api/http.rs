//! `reqwest`-backed implementation of the backend collaborator.
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::domain::application::Application;
use crate::domain::feedback::{FeedbackItem, FeedbackStatus};
use crate::domain::profile::CitizenProfile;
use crate::dto::admin::DashboardStats;
use crate::dto::application::{ApplicationData, CreatedApplication, DocumentUpload};
use crate::dto::auth::{AdminAuthResponse, AdminLoginData, AuthResponse, LoginData, SignUpData};
use crate::dto::feedback::{FeedbackData, FeedbackStatusUpdate};
use crate::dto::payment::PaymentData;

use super::{
    AdminApi, ApiError, ApiResult, ApplicationApi, AuthApi, DocumentApi, FeedbackApi, PaymentApi,
    ProfileApi,
};

/// HTTP client for the portal backend. No explicit request timeout is
/// applied; the transport's own connection behavior governs worst-case
/// latency.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Turns a non-2xx response into [`ApiError::Rejected`], carrying the body
/// text verbatim when the backend supplied one.
async fn ensure_success(response: Response, fallback: &str) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        Err(ApiError::Rejected(fallback.to_string()))
    } else {
        Err(ApiError::Rejected(body))
    }
}

#[async_trait]
impl AuthApi for HttpBackend {
    async fn signup(&self, data: &SignUpData) -> ApiResult<()> {
        let response = self
            .client
            .post(self.url("/api/auth/signup"))
            .json(data)
            .send()
            .await?;
        ensure_success(response, "Signup failed").await?;
        Ok(())
    }

    async fn login(&self, data: &LoginData) -> ApiResult<AuthResponse> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(data)
            .send()
            .await?;
        Ok(ensure_success(response, "Login failed").await?.json().await?)
    }

    async fn admin_login(&self, data: &AdminLoginData) -> ApiResult<AdminAuthResponse> {
        let response = self
            .client
            .post(self.url("/api/admin/login"))
            .json(data)
            .send()
            .await?;
        Ok(ensure_success(response, "Admin login failed")
            .await?
            .json()
            .await?)
    }
}

#[async_trait]
impl ProfileApi for HttpBackend {
    async fn get_my_profile(&self, token: &str) -> ApiResult<Option<CitizenProfile>> {
        let response = self
            .client
            .get(self.url("/api/citizen-profiles/me"))
            .bearer_auth(token)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(
            ensure_success(response, "Failed to fetch profile")
                .await?
                .json()
                .await?,
        ))
    }

    async fn create_profile(
        &self,
        data: &CitizenProfile,
        token: &str,
    ) -> ApiResult<CitizenProfile> {
        let response = self
            .client
            .post(self.url("/api/citizen-profiles"))
            .bearer_auth(token)
            .json(data)
            .send()
            .await?;
        Ok(ensure_success(response, "Profile creation failed")
            .await?
            .json()
            .await?)
    }

    async fn update_profile(
        &self,
        data: &CitizenProfile,
        token: &str,
    ) -> ApiResult<CitizenProfile> {
        let response = self
            .client
            .put(self.url("/api/citizen-profiles"))
            .bearer_auth(token)
            .json(data)
            .send()
            .await?;
        Ok(ensure_success(response, "Profile update failed")
            .await?
            .json()
            .await?)
    }
}

#[async_trait]
impl ApplicationApi for HttpBackend {
    async fn create_application(
        &self,
        data: &ApplicationData,
        token: &str,
    ) -> ApiResult<CreatedApplication> {
        let response = self
            .client
            .post(self.url("/api/applications"))
            .bearer_auth(token)
            .json(data)
            .send()
            .await?;
        Ok(ensure_success(response, "Application submission failed")
            .await?
            .json()
            .await?)
    }

    async fn get_my_applications(&self, token: &str) -> ApiResult<Vec<Application>> {
        let response = self
            .client
            .get(self.url("/api/applications/my-applications"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(ensure_success(response, "Failed to fetch applications")
            .await?
            .json()
            .await?)
    }
}

#[async_trait]
impl PaymentApi for HttpBackend {
    async fn submit_payment(&self, data: &PaymentData, token: &str) -> ApiResult<()> {
        let response = self
            .client
            .post(self.url("/api/payments"))
            .bearer_auth(token)
            .json(data)
            .send()
            .await?;
        ensure_success(response, "Payment submission failed").await?;
        Ok(())
    }
}

#[async_trait]
impl AdminApi for HttpBackend {
    async fn get_all_applications(&self, token: &str) -> ApiResult<Vec<Application>> {
        let response = self
            .client
            .get(self.url("/api/admin/applications"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(ensure_success(response, "Failed to fetch all applications")
            .await?
            .json()
            .await?)
    }

    async fn get_application_stats(&self, token: &str) -> ApiResult<DashboardStats> {
        let response = self
            .client
            .get(self.url("/api/admin/stats"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(ensure_success(response, "Failed to fetch stats")
            .await?
            .json()
            .await?)
    }

    async fn approve_application(&self, application_id: i64, token: &str) -> ApiResult<()> {
        let response = self
            .client
            .put(self.url(&format!("/api/admin/applications/{application_id}/approve")))
            .bearer_auth(token)
            .send()
            .await?;
        ensure_success(response, "Failed to approve application").await?;
        Ok(())
    }

    async fn reject_application(&self, application_id: i64, token: &str) -> ApiResult<()> {
        let response = self
            .client
            .put(self.url(&format!("/api/admin/applications/{application_id}/reject")))
            .bearer_auth(token)
            .send()
            .await?;
        ensure_success(response, "Failed to reject application").await?;
        Ok(())
    }
}

#[async_trait]
impl FeedbackApi for HttpBackend {
    async fn submit_feedback(&self, data: &FeedbackData, token: &str) -> ApiResult<FeedbackItem> {
        let response = self
            .client
            .post(self.url("/api/feedback"))
            .bearer_auth(token)
            .json(data)
            .send()
            .await?;
        Ok(ensure_success(response, "Feedback submission failed")
            .await?
            .json()
            .await?)
    }

    async fn list_feedback(&self, token: &str) -> ApiResult<Vec<FeedbackItem>> {
        let response = self
            .client
            .get(self.url("/api/feedback"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(ensure_success(response, "Failed to fetch feedback")
            .await?
            .json()
            .await?)
    }

    async fn update_feedback_status(
        &self,
        feedback_id: i64,
        status: FeedbackStatus,
        token: &str,
    ) -> ApiResult<FeedbackItem> {
        let response = self
            .client
            .put(self.url(&format!("/api/feedback/{feedback_id}/status")))
            .bearer_auth(token)
            .json(&FeedbackStatusUpdate { status })
            .send()
            .await?;
        Ok(ensure_success(response, "Failed to update feedback status")
            .await?
            .json()
            .await?)
    }
}

#[async_trait]
impl DocumentApi for HttpBackend {
    async fn upload_document(
        &self,
        application_id: i64,
        upload: &DocumentUpload,
        token: &str,
    ) -> ApiResult<String> {
        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .text("applicationId", application_id.to_string())
            .text("documentType", upload.document_type.clone())
            .part("file", part);

        let response = self
            .client
            .post(self.url("/api/documents/upload"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Ok(ensure_success(response, "Document upload failed")
            .await?
            .text()
            .await?)
    }
}
