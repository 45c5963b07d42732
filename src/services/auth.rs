use crate::api::AuthApi;
use crate::domain::navigation::View;
use crate::domain::session::{Identity, Role};
use crate::domain::types::{Email, PhoneNumber};
use crate::dto::auth::{AdminLoginData, LoginData, SignUpData};
use crate::forms::auth::{AdminLoginForm, LoginForm, SignupForm};
use crate::services::{FlowOutcome, ServiceError, ServiceResult, validate_form};
use crate::state::AppState;
use crate::storage::KeyValueStorage;

/// Registers a citizen account and moves to the login view so the new
/// account can sign in.
pub async fn signup<B, S>(
    api: &B,
    state: &mut AppState<S>,
    form: &SignupForm,
) -> ServiceResult<FlowOutcome<()>>
where
    B: AuthApi + ?Sized,
    S: KeyValueStorage,
{
    validate_form(form)?;
    let email = Email::new(form.email.as_str())?;
    let phone = PhoneNumber::new(form.phone.as_str())?;

    let issued = state.generation();
    let data = SignUpData {
        email: email.into_inner(),
        phone: phone.into_inner(),
        password: form.password.clone(),
    };
    api.signup(&data).await.map_err(|err| {
        log::error!("Signup failed: {err}");
        ServiceError::from(err)
    })?;

    if !state.is_current(issued) {
        log::warn!("Discarding stale signup completion");
        return Ok(FlowOutcome::Stale);
    }
    state.navigate(View::Login, None);
    Ok(FlowOutcome::Applied(()))
}

/// Authenticates a citizen, persists the session and moves to the dashboard.
pub async fn login<B, S>(
    api: &B,
    state: &mut AppState<S>,
    form: &LoginForm,
) -> ServiceResult<FlowOutcome<()>>
where
    B: AuthApi + ?Sized,
    S: KeyValueStorage,
{
    validate_form(form)?;
    let email = Email::new(form.email.as_str())?;

    let issued = state.generation();
    let data = LoginData {
        email: email.into_inner(),
        password: form.password.clone(),
    };
    let response = api.login(&data).await.map_err(|err| {
        log::error!("Login failed: {err}");
        ServiceError::from(err)
    })?;

    if !state.is_current(issued) {
        log::warn!("Discarding stale login completion");
        return Ok(FlowOutcome::Stale);
    }
    state.login(
        Identity {
            subject_id: response.user_id,
            display_identity: response.email,
        },
        response.token,
        Role::Citizen,
    )?;
    state.navigate(View::Dashboard, None);
    Ok(FlowOutcome::Applied(()))
}

/// Authenticates an administrator and moves to the admin dashboard.
pub async fn admin_login<B, S>(
    api: &B,
    state: &mut AppState<S>,
    form: &AdminLoginForm,
) -> ServiceResult<FlowOutcome<()>>
where
    B: AuthApi + ?Sized,
    S: KeyValueStorage,
{
    validate_form(form)?;

    let issued = state.generation();
    let data = AdminLoginData {
        username: form.username.clone(),
        password: form.password.clone(),
    };
    let response = api.admin_login(&data).await.map_err(|err| {
        log::error!("Admin login failed: {err}");
        ServiceError::from(err)
    })?;

    if !state.is_current(issued) {
        log::warn!("Discarding stale admin login completion");
        return Ok(FlowOutcome::Stale);
    }
    state.login(
        Identity {
            subject_id: response.admin_id,
            display_identity: response.username,
        },
        response.token,
        Role::Administrator,
    )?;
    state.navigate(View::AdminDashboard, None);
    Ok(FlowOutcome::Applied(()))
}

/// Clears the session and every persisted key. The navigation guard moves
/// the view off any now-forbidden page.
pub fn logout<S: KeyValueStorage>(state: &mut AppState<S>) -> ServiceResult<()> {
    state.logout()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::api::{ApiError, ApiResult};
    use crate::dto::auth::{AdminAuthResponse, AuthResponse};
    use crate::storage::memory::InMemoryStorage;

    #[derive(Default)]
    struct StubAuth {
        reject_login: bool,
        signups: Mutex<Vec<SignUpData>>,
    }

    #[async_trait]
    impl AuthApi for StubAuth {
        async fn signup(&self, data: &SignUpData) -> ApiResult<()> {
            self.signups
                .lock()
                .expect("lock poisoned")
                .push(data.clone());
            Ok(())
        }

        async fn login(&self, data: &LoginData) -> ApiResult<AuthResponse> {
            if self.reject_login {
                return Err(ApiError::Rejected("Invalid credentials".to_string()));
            }
            Ok(AuthResponse {
                user_id: 7,
                email: data.email.clone(),
                token: "citizen-token".to_string(),
            })
        }

        async fn admin_login(&self, data: &AdminLoginData) -> ApiResult<AdminAuthResponse> {
            Ok(AdminAuthResponse {
                admin_id: 1,
                username: data.username.clone(),
                token: "admin-token".to_string(),
            })
        }
    }

    fn signup_form() -> SignupForm {
        SignupForm {
            email: "Citizen@Example.com".to_string(),
            phone: "+1 415 555 2671".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn signup_normalizes_contact_details_and_moves_to_login() {
        let api = StubAuth::default();
        let mut state = AppState::new(InMemoryStorage::new());
        state.navigate(View::Signup, None);

        let outcome = signup(&api, &mut state, &signup_form())
            .await
            .expect("signup failed");

        assert!(!outcome.is_stale());
        assert_eq!(state.view(), View::Login);
        let recorded = api.signups.lock().expect("lock poisoned");
        assert_eq!(recorded[0].email, "citizen@example.com");
        assert_eq!(recorded[0].phone, "+14155552671");
    }

    #[tokio::test]
    async fn signup_rejects_an_invalid_email_without_calling_the_backend() {
        let api = StubAuth::default();
        let mut state = AppState::new(InMemoryStorage::new());
        let form = SignupForm {
            email: "not-an-email".to_string(),
            ..signup_form()
        };

        let result = signup(&api, &mut state, &form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(api.signups.lock().expect("lock poisoned").is_empty());
    }

    #[tokio::test]
    async fn login_stores_the_session_and_moves_to_the_dashboard() {
        let api = StubAuth::default();
        let mut state = AppState::new(InMemoryStorage::new());
        let form = LoginForm {
            email: "citizen@example.com".to_string(),
            password: "secret123".to_string(),
        };

        login(&api, &mut state, &form).await.expect("login failed");

        assert_eq!(state.view(), View::Dashboard);
        let session = state.session().expect("session missing");
        assert_eq!(session.role, Role::Citizen);
        assert_eq!(session.token, "citizen-token");
        assert_eq!(session.identity.subject_id, 7);
    }

    #[tokio::test]
    async fn rejected_login_surfaces_the_backend_message_verbatim() {
        let api = StubAuth {
            reject_login: true,
            ..StubAuth::default()
        };
        let mut state = AppState::new(InMemoryStorage::new());
        state.navigate(View::Login, None);
        let form = LoginForm {
            email: "citizen@example.com".to_string(),
            password: "wrong".to_string(),
        };

        let err = login(&api, &mut state, &form).await.expect_err("must fail");

        assert_eq!(err.to_string(), "Invalid credentials");
        // Still on the login view, no session.
        assert_eq!(state.view(), View::Login);
        assert!(state.session().is_none());
    }

    #[tokio::test]
    async fn admin_login_yields_an_administrator_session() {
        let api = StubAuth::default();
        let mut state = AppState::new(InMemoryStorage::new());
        let form = AdminLoginForm {
            username: "registrar".to_string(),
            password: "secret123".to_string(),
        };

        admin_login(&api, &mut state, &form)
            .await
            .expect("admin login failed");

        assert_eq!(state.view(), View::AdminDashboard);
        let session = state.session().expect("session missing");
        assert_eq!(session.role, Role::Administrator);
        assert_eq!(session.identity.display_identity, "registrar");
    }

    #[tokio::test]
    async fn logout_clears_the_session_and_guard_redirects() {
        let api = StubAuth::default();
        let mut state = AppState::new(InMemoryStorage::new());
        let form = LoginForm {
            email: "citizen@example.com".to_string(),
            password: "secret123".to_string(),
        };
        login(&api, &mut state, &form).await.expect("login failed");

        logout(&mut state).expect("logout failed");

        assert!(state.session().is_none());
        assert_eq!(state.view(), View::Login);
    }
}
