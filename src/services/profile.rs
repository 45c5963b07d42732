use crate::api::ProfileApi;
use crate::domain::navigation::View;
use crate::domain::profile::CitizenProfile;
use crate::forms::profile::ProfileForm;
use crate::services::{FlowOutcome, ServiceError, ServiceResult, require_token, validate_form};
use crate::state::AppState;
use crate::storage::KeyValueStorage;

/// Whether the profile form mounts in create or update mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileMode {
    Create,
    Update,
}

/// Mode at mount time, seeded from the local cache. This is a hint for the
/// UI only; [`save`] re-checks existence against the backend before choosing
/// the verb, since the cache can be stale.
pub fn mount_mode<S: KeyValueStorage>(state: &AppState<S>) -> ProfileMode {
    if state.cached_profile().is_some() {
        ProfileMode::Update
    } else {
        ProfileMode::Create
    }
}

/// Fetches the caller's profile. A backend 404 means "no profile yet" and
/// clears the cache; it is not an error.
pub async fn load<B, S>(
    api: &B,
    state: &mut AppState<S>,
) -> ServiceResult<FlowOutcome<Option<CitizenProfile>>>
where
    B: ProfileApi + ?Sized,
    S: KeyValueStorage,
{
    let token = require_token(state)?;
    let issued = state.generation();

    let fetched = api.get_my_profile(&token).await.map_err(|err| {
        log::error!("Failed to fetch profile: {err}");
        ServiceError::from(err)
    })?;

    if !state.is_current(issued) {
        log::warn!("Discarding stale profile fetch");
        return Ok(FlowOutcome::Stale);
    }
    match &fetched {
        Some(profile) => state.cache_profile(profile)?,
        None => state.clear_cached_profile()?,
    }
    Ok(FlowOutcome::Applied(fetched))
}

/// Creates or updates the profile, then moves to the dashboard.
///
/// The create-vs-update decision is made from a fresh existence check rather
/// than the cached mount mode, so a stale cache cannot select the wrong
/// verb.
pub async fn save<B, S>(
    api: &B,
    state: &mut AppState<S>,
    form: &ProfileForm,
) -> ServiceResult<FlowOutcome<CitizenProfile>>
where
    B: ProfileApi + ?Sized,
    S: KeyValueStorage,
{
    validate_form(form)?;
    let token = require_token(state)?;
    let issued = state.generation();

    let exists = api
        .get_my_profile(&token)
        .await
        .map_err(|err| {
            log::error!("Failed to check profile existence: {err}");
            ServiceError::from(err)
        })?
        .is_some();

    let payload = CitizenProfile::from(form);
    let saved = if exists {
        api.update_profile(&payload, &token).await
    } else {
        api.create_profile(&payload, &token).await
    }
    .map_err(|err| {
        log::error!("Failed to save profile: {err}");
        ServiceError::from(err)
    })?;

    if !state.is_current(issued) {
        log::warn!("Discarding stale profile save completion");
        return Ok(FlowOutcome::Stale);
    }
    state.cache_profile(&saved)?;
    state.navigate(View::Dashboard, None);
    Ok(FlowOutcome::Applied(saved))
}
