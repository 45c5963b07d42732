//! Mock backend implementations for isolating flows in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::application::Application;
use crate::domain::feedback::{FeedbackItem, FeedbackStatus};
use crate::domain::profile::CitizenProfile;
use crate::dto::admin::DashboardStats;
use crate::dto::application::{ApplicationData, CreatedApplication, DocumentUpload};
use crate::dto::auth::{AdminAuthResponse, AdminLoginData, AuthResponse, LoginData, SignUpData};
use crate::dto::feedback::FeedbackData;
use crate::dto::payment::PaymentData;

use super::{
    AdminApi, ApiResult, ApplicationApi, AuthApi, DocumentApi, FeedbackApi, PaymentApi, ProfileApi,
};

mock! {
    pub Backend {}

    #[async_trait]
    impl AuthApi for Backend {
        async fn signup(&self, data: &SignUpData) -> ApiResult<()>;
        async fn login(&self, data: &LoginData) -> ApiResult<AuthResponse>;
        async fn admin_login(&self, data: &AdminLoginData) -> ApiResult<AdminAuthResponse>;
    }

    #[async_trait]
    impl ProfileApi for Backend {
        async fn get_my_profile(&self, token: &str) -> ApiResult<Option<CitizenProfile>>;
        async fn create_profile(
            &self,
            data: &CitizenProfile,
            token: &str,
        ) -> ApiResult<CitizenProfile>;
        async fn update_profile(
            &self,
            data: &CitizenProfile,
            token: &str,
        ) -> ApiResult<CitizenProfile>;
    }

    #[async_trait]
    impl ApplicationApi for Backend {
        async fn create_application(
            &self,
            data: &ApplicationData,
            token: &str,
        ) -> ApiResult<CreatedApplication>;
        async fn get_my_applications(&self, token: &str) -> ApiResult<Vec<Application>>;
    }

    #[async_trait]
    impl PaymentApi for Backend {
        async fn submit_payment(&self, data: &PaymentData, token: &str) -> ApiResult<()>;
    }

    #[async_trait]
    impl AdminApi for Backend {
        async fn get_all_applications(&self, token: &str) -> ApiResult<Vec<Application>>;
        async fn get_application_stats(&self, token: &str) -> ApiResult<DashboardStats>;
        async fn approve_application(&self, application_id: i64, token: &str) -> ApiResult<()>;
        async fn reject_application(&self, application_id: i64, token: &str) -> ApiResult<()>;
    }

    #[async_trait]
    impl FeedbackApi for Backend {
        async fn submit_feedback(&self, data: &FeedbackData, token: &str) -> ApiResult<FeedbackItem>;
        async fn list_feedback(&self, token: &str) -> ApiResult<Vec<FeedbackItem>>;
        async fn update_feedback_status(
            &self,
            feedback_id: i64,
            status: FeedbackStatus,
            token: &str,
        ) -> ApiResult<FeedbackItem>;
    }

    #[async_trait]
    impl DocumentApi for Backend {
        async fn upload_document(
            &self,
            application_id: i64,
            upload: &DocumentUpload,
            token: &str,
        ) -> ApiResult<String>;
    }
}
