//! Shared in-memory portal backend for integration tests.
//!
//! `FakePortal` implements every api trait over a mutex-guarded state map,
//! so full flows can run end-to-end without a network.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use govportal_client::api::{
    AdminApi, ApiError, ApiResult, ApplicationApi, AuthApi, DocumentApi, FeedbackApi, PaymentApi,
    ProfileApi,
};
use govportal_client::catalog;
use govportal_client::domain::application::{Application, ApplicationStatus, PaymentStatus};
use govportal_client::domain::feedback::{FeedbackItem, FeedbackStatus};
use govportal_client::domain::profile::{CitizenProfile, Gender, Religion};
use govportal_client::dto::admin::DashboardStats;
use govportal_client::dto::application::{ApplicationData, CreatedApplication, DocumentUpload};
use govportal_client::dto::auth::{
    AdminAuthResponse, AdminLoginData, AuthResponse, LoginData, SignUpData,
};
use govportal_client::dto::feedback::FeedbackData;
use govportal_client::dto::payment::PaymentData;
use govportal_client::forms::auth::{AdminLoginForm, LoginForm, SignupForm};
use govportal_client::forms::profile::ProfileForm;

pub const ADMIN_USERNAME: &str = "registrar";
pub const ADMIN_PASSWORD: &str = "letmein99";

const SUBMISSION_DATE: (i32, u32, u32) = (2025, 3, 14);

fn submission_date() -> NaiveDate {
    let (y, m, d) = SUBMISSION_DATE;
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

#[derive(Clone, Debug)]
struct Account {
    user_id: i64,
    email: String,
    phone: String,
    password: String,
}

#[derive(Default)]
struct PortalState {
    accounts: Vec<Account>,
    profiles: HashMap<i64, CitizenProfile>,
    applications: Vec<Application>,
    feedback: Vec<FeedbackItem>,
    uploads: Vec<(i64, String)>,
    next_user_id: i64,
    next_application_id: i64,
    next_feedback_id: i64,
}

/// In-memory stand-in for the portal backend.
#[derive(Default)]
pub struct FakePortal {
    inner: Mutex<PortalState>,
}

impl FakePortal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status pair of a stored application, for assertions.
    pub fn application_status(&self, application_id: i64) -> Option<(ApplicationStatus, PaymentStatus)> {
        self.inner
            .lock()
            .expect("lock poisoned")
            .applications
            .iter()
            .find(|app| app.application_id == application_id)
            .map(|app| (app.status, app.payment_status))
    }

    /// Documents received so far, as (application id, document type) pairs.
    pub fn uploads(&self) -> Vec<(i64, String)> {
        self.inner.lock().expect("lock poisoned").uploads.clone()
    }

    fn citizen_of(&self, token: &str) -> ApiResult<i64> {
        token
            .strip_prefix("citizen-token-")
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| ApiError::Rejected("Access denied".to_string()))
    }

    fn require_admin(&self, token: &str) -> ApiResult<()> {
        if token == "admin-token-1" {
            Ok(())
        } else {
            Err(ApiError::Rejected("Access denied".to_string()))
        }
    }
}

#[async_trait]
impl AuthApi for FakePortal {
    async fn signup(&self, data: &SignUpData) -> ApiResult<()> {
        let mut state = self.inner.lock().expect("lock poisoned");
        if state.accounts.iter().any(|account| account.email == data.email) {
            return Err(ApiError::Rejected("Email is already in use".to_string()));
        }
        state.next_user_id += 1;
        let account = Account {
            user_id: state.next_user_id,
            email: data.email.clone(),
            phone: data.phone.clone(),
            password: data.password.clone(),
        };
        state.accounts.push(account);
        Ok(())
    }

    async fn login(&self, data: &LoginData) -> ApiResult<AuthResponse> {
        let state = self.inner.lock().expect("lock poisoned");
        let account = state
            .accounts
            .iter()
            .find(|account| account.email == data.email && account.password == data.password)
            .ok_or_else(|| ApiError::Rejected("Invalid email or password".to_string()))?;
        Ok(AuthResponse {
            user_id: account.user_id,
            email: account.email.clone(),
            token: format!("citizen-token-{}", account.user_id),
        })
    }

    async fn admin_login(&self, data: &AdminLoginData) -> ApiResult<AdminAuthResponse> {
        if data.username == ADMIN_USERNAME && data.password == ADMIN_PASSWORD {
            Ok(AdminAuthResponse {
                admin_id: 1,
                username: data.username.clone(),
                token: "admin-token-1".to_string(),
            })
        } else {
            Err(ApiError::Rejected("Invalid admin credentials".to_string()))
        }
    }
}

#[async_trait]
impl ProfileApi for FakePortal {
    async fn get_my_profile(&self, token: &str) -> ApiResult<Option<CitizenProfile>> {
        let user_id = self.citizen_of(token)?;
        let state = self.inner.lock().expect("lock poisoned");
        Ok(state.profiles.get(&user_id).cloned())
    }

    async fn create_profile(
        &self,
        data: &CitizenProfile,
        token: &str,
    ) -> ApiResult<CitizenProfile> {
        let user_id = self.citizen_of(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        if state.profiles.contains_key(&user_id) {
            return Err(ApiError::Rejected("Profile already exists".to_string()));
        }
        state.profiles.insert(user_id, data.clone());
        Ok(data.clone())
    }

    async fn update_profile(
        &self,
        data: &CitizenProfile,
        token: &str,
    ) -> ApiResult<CitizenProfile> {
        let user_id = self.citizen_of(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        if !state.profiles.contains_key(&user_id) {
            return Err(ApiError::Rejected("Profile not found".to_string()));
        }
        state.profiles.insert(user_id, data.clone());
        Ok(data.clone())
    }
}

#[async_trait]
impl ApplicationApi for FakePortal {
    async fn create_application(
        &self,
        data: &ApplicationData,
        token: &str,
    ) -> ApiResult<CreatedApplication> {
        let user_id = self.citizen_of(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        if !state.profiles.contains_key(&user_id) {
            return Err(ApiError::Rejected(
                "Citizen profile required before applying".to_string(),
            ));
        }
        state.next_application_id += 1;
        let application = Application {
            application_id: state.next_application_id,
            user_id: Some(user_id),
            service_name: catalog::service_name(data.service_id).to_string(),
            submission_date: submission_date(),
            status: ApplicationStatus::Pending,
            payment_status: PaymentStatus::Pending,
        };
        state.applications.push(application);
        Ok(CreatedApplication {
            application_id: state.next_application_id,
        })
    }

    async fn get_my_applications(&self, token: &str) -> ApiResult<Vec<Application>> {
        let user_id = self.citizen_of(token)?;
        let state = self.inner.lock().expect("lock poisoned");
        Ok(state
            .applications
            .iter()
            .filter(|app| app.user_id == Some(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PaymentApi for FakePortal {
    async fn submit_payment(&self, data: &PaymentData, token: &str) -> ApiResult<()> {
        let user_id = self.citizen_of(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        let application = state
            .applications
            .iter_mut()
            .find(|app| app.application_id == data.application_id && app.user_id == Some(user_id))
            .ok_or_else(|| ApiError::Rejected("Application not found".to_string()))?;
        application.payment_status = PaymentStatus::Completed;
        Ok(())
    }
}

#[async_trait]
impl AdminApi for FakePortal {
    async fn get_all_applications(&self, token: &str) -> ApiResult<Vec<Application>> {
        self.require_admin(token)?;
        let state = self.inner.lock().expect("lock poisoned");
        Ok(state.applications.clone())
    }

    async fn get_application_stats(&self, token: &str) -> ApiResult<DashboardStats> {
        self.require_admin(token)?;
        let state = self.inner.lock().expect("lock poisoned");
        let count = |status: ApplicationStatus| {
            state
                .applications
                .iter()
                .filter(|app| app.status == status)
                .count() as u64
        };
        Ok(DashboardStats {
            total: state.applications.len() as u64,
            pending: count(ApplicationStatus::Pending),
            approved: count(ApplicationStatus::Approved),
            rejected: count(ApplicationStatus::Rejected),
        })
    }

    async fn approve_application(&self, application_id: i64, token: &str) -> ApiResult<()> {
        self.require_admin(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        let application = state
            .applications
            .iter_mut()
            .find(|app| app.application_id == application_id)
            .ok_or_else(|| ApiError::Rejected("Application not found".to_string()))?;
        application.status = ApplicationStatus::Approved;
        Ok(())
    }

    async fn reject_application(&self, application_id: i64, token: &str) -> ApiResult<()> {
        self.require_admin(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        let application = state
            .applications
            .iter_mut()
            .find(|app| app.application_id == application_id)
            .ok_or_else(|| ApiError::Rejected("Application not found".to_string()))?;
        application.status = ApplicationStatus::Rejected;
        Ok(())
    }
}

#[async_trait]
impl FeedbackApi for FakePortal {
    async fn submit_feedback(&self, data: &FeedbackData, token: &str) -> ApiResult<FeedbackItem> {
        let user_id = self.citizen_of(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        let user_email = state
            .accounts
            .iter()
            .find(|account| account.user_id == user_id)
            .map(|account| account.email.clone());
        state.next_feedback_id += 1;
        let item = FeedbackItem {
            id: state.next_feedback_id,
            user_email,
            feedback_type: data.feedback_type,
            subject: data.subject.clone(),
            message: data.message.clone(),
            status: FeedbackStatus::New,
            submission_date: timestamp(),
            updated_at: timestamp(),
        };
        state.feedback.push(item.clone());
        Ok(item)
    }

    async fn list_feedback(&self, token: &str) -> ApiResult<Vec<FeedbackItem>> {
        self.require_admin(token)?;
        let state = self.inner.lock().expect("lock poisoned");
        Ok(state.feedback.clone())
    }

    async fn update_feedback_status(
        &self,
        feedback_id: i64,
        status: FeedbackStatus,
        token: &str,
    ) -> ApiResult<FeedbackItem> {
        self.require_admin(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        let item = state
            .feedback
            .iter_mut()
            .find(|item| item.id == feedback_id)
            .ok_or_else(|| ApiError::Rejected("Feedback not found".to_string()))?;
        item.status = status;
        Ok(item.clone())
    }
}

#[async_trait]
impl DocumentApi for FakePortal {
    async fn upload_document(
        &self,
        application_id: i64,
        upload: &DocumentUpload,
        token: &str,
    ) -> ApiResult<String> {
        self.citizen_of(token)?;
        let mut state = self.inner.lock().expect("lock poisoned");
        if !state
            .applications
            .iter()
            .any(|app| app.application_id == application_id)
        {
            return Err(ApiError::Rejected("Application not found".to_string()));
        }
        state
            .uploads
            .push((application_id, upload.document_type.clone()));
        Ok(format!("File uploaded successfully: {}", upload.file_name))
    }
}

pub fn signup_form() -> SignupForm {
    SignupForm {
        email: "citizen@example.com".to_string(),
        phone: "+14155552671".to_string(),
        password: "secret123".to_string(),
    }
}

pub fn login_form() -> LoginForm {
    LoginForm {
        email: "citizen@example.com".to_string(),
        password: "secret123".to_string(),
    }
}

pub fn admin_login_form() -> AdminLoginForm {
    AdminLoginForm {
        username: ADMIN_USERNAME.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    }
}

pub fn profile_form() -> ProfileForm {
    ProfileForm {
        name: "Rahim Uddin".to_string(),
        fathers_name: "Karim Uddin".to_string(),
        mothers_name: "Fatima Begum".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).expect("valid date"),
        nid_number: "1990123456789".to_string(),
        gender: Gender::Male,
        religion: Religion::Islam,
        current_address: "12 Lake Road, Dhaka".to_string(),
        permanent_address: "Village Rampur, Comilla".to_string(),
        profession: "Teacher".to_string(),
    }
}
