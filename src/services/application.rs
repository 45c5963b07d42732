use crate::api::{ApplicationApi, DocumentApi, ProfileApi};
use crate::catalog;
use crate::domain::application::Application;
use crate::domain::navigation::View;
use crate::domain::profile::CitizenProfile;
use crate::dto::application::CreatedApplication;
use crate::forms::application::ApplicationForm;
use crate::services::{FlowOutcome, ServiceError, ServiceResult, require_token};
use crate::state::AppState;
use crate::storage::KeyValueStorage;

/// Data the citizen dashboard renders: the profile (if any) and the caller's
/// applications. Without a profile the dashboard shows the create-profile
/// prompt and no applications are fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct CitizenDashboard {
    pub profile: Option<CitizenProfile>,
    pub applications: Vec<Application>,
}

impl CitizenDashboard {
    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}

/// Loads the citizen dashboard, refreshing the cached profile on the way.
pub async fn load_dashboard<B, S>(
    api: &B,
    state: &mut AppState<S>,
) -> ServiceResult<FlowOutcome<CitizenDashboard>>
where
    B: ProfileApi + ApplicationApi + ?Sized,
    S: KeyValueStorage,
{
    let token = require_token(state)?;
    let issued = state.generation();

    let profile = api.get_my_profile(&token).await.map_err(|err| {
        log::error!("Failed to fetch profile: {err}");
        ServiceError::from(err)
    })?;
    let applications = match &profile {
        Some(_) => api.get_my_applications(&token).await.map_err(|err| {
            log::error!("Failed to fetch applications: {err}");
            ServiceError::from(err)
        })?,
        None => Vec::new(),
    };

    if !state.is_current(issued) {
        log::warn!("Discarding stale dashboard load");
        return Ok(FlowOutcome::Stale);
    }
    match &profile {
        Some(profile) => state.cache_profile(profile)?,
        None => state.clear_cached_profile()?,
    }
    Ok(FlowOutcome::Applied(CitizenDashboard {
        profile,
        applications,
    }))
}

/// Submits a service application, uploads any attached documents, then moves
/// to the dashboard.
pub async fn submit<B, S>(
    api: &B,
    state: &mut AppState<S>,
    form: &ApplicationForm,
) -> ServiceResult<FlowOutcome<CreatedApplication>>
where
    B: ApplicationApi + DocumentApi + ?Sized,
    S: KeyValueStorage,
{
    if catalog::find(form.service_id()).is_none() {
        return Err(ServiceError::Form(
            "Please select a service to begin".to_string(),
        ));
    }
    let missing = form.missing_required();
    if !missing.is_empty() {
        return Err(ServiceError::Form(format!(
            "Required fields are missing: {}",
            missing.join(", ")
        )));
    }

    let token = require_token(state)?;
    let issued = state.generation();

    let created = api
        .create_application(&form.to_data(), &token)
        .await
        .map_err(|err| {
            log::error!("Failed to submit application: {err}");
            ServiceError::from(err)
        })?;

    for document in form.documents() {
        api.upload_document(created.application_id, document, &token)
            .await
            .map_err(|err| {
                log::error!(
                    "Failed to upload document {}: {err}",
                    document.document_type
                );
                ServiceError::from(err)
            })?;
    }

    if !state.is_current(issued) {
        log::warn!("Discarding stale application completion");
        return Ok(FlowOutcome::Stale);
    }
    state.navigate(View::Dashboard, None);
    Ok(FlowOutcome::Applied(created))
}
