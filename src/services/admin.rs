use crate::api::{AdminApi, FeedbackApi};
use crate::domain::application::{Application, ApplicationStatus};
use crate::domain::feedback::{FeedbackItem, FeedbackStatus};
use crate::domain::session::Role;
use crate::dto::admin::DashboardStats;
use crate::services::{ServiceError, ServiceResult};
use crate::state::AppState;
use crate::storage::KeyValueStorage;

/// Status filter applied to the admin application table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Status(ApplicationStatus),
}

/// Everything the admin dashboard renders, loaded in one shot.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminDashboardData {
    pub stats: DashboardStats,
    pub applications: Vec<Application>,
    pub feedback: Vec<FeedbackItem>,
    /// Per-service application counts for the analytics chart, in first
    /// appearance order.
    pub service_counts: Vec<(String, usize)>,
}

fn require_admin_token<S: KeyValueStorage>(state: &AppState<S>) -> ServiceResult<String> {
    match state.session() {
        Some(session) if session.role == Role::Administrator => Ok(session.token.clone()),
        _ => Err(ServiceError::Unauthorized),
    }
}

/// Loads stats, the full application list and the feedback list with three
/// concurrent reads. Any single failure abandons the whole load; no partial
/// dashboard is published.
pub async fn load_all<B, S>(api: &B, state: &AppState<S>) -> ServiceResult<AdminDashboardData>
where
    B: AdminApi + FeedbackApi + ?Sized,
    S: KeyValueStorage,
{
    let token = require_admin_token(state)?;

    let (stats, applications, feedback) = tokio::try_join!(
        api.get_application_stats(&token),
        api.get_all_applications(&token),
        api.list_feedback(&token),
    )
    .map_err(|err| {
        log::error!("Failed to load admin dashboard: {err}");
        ServiceError::from(err)
    })?;

    let service_counts = count_by_service(&applications);
    Ok(AdminDashboardData {
        stats,
        applications,
        feedback,
        service_counts,
    })
}

/// Per-service application counts, keyed by service name in first appearance
/// order.
fn count_by_service(applications: &[Application]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for application in applications {
        match counts
            .iter_mut()
            .find(|(name, _)| *name == application.service_name)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((application.service_name.clone(), 1)),
        }
    }
    counts
}

/// Pure, client-side filter over the loaded application list. The status
/// filter is an exact match (or passthrough for `All`); the search term is a
/// substring match against the stringified owning user id. Both compose by
/// conjunction, order is preserved and the base list is never mutated.
pub fn filter_applications(
    applications: &[Application],
    status: StatusFilter,
    search: &str,
) -> Vec<Application> {
    applications
        .iter()
        .filter(|application| match status {
            StatusFilter::All => true,
            StatusFilter::Status(wanted) => application.status == wanted,
        })
        .filter(|application| {
            if search.is_empty() {
                return true;
            }
            application
                .user_id
                .map(|id| id.to_string().contains(search))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Approves an application, then unconditionally reloads the dashboard so
/// the displayed stats stay consistent with backend truth.
pub async fn approve<B, S>(
    api: &B,
    state: &AppState<S>,
    application_id: i64,
) -> ServiceResult<AdminDashboardData>
where
    B: AdminApi + FeedbackApi + ?Sized,
    S: KeyValueStorage,
{
    let token = require_admin_token(state)?;
    api.approve_application(application_id, &token)
        .await
        .map_err(|err| {
            log::error!("Failed to approve application {application_id}: {err}");
            ServiceError::from(err)
        })?;
    load_all(api, state).await
}

/// Rejects an application, then unconditionally reloads the dashboard.
pub async fn reject<B, S>(
    api: &B,
    state: &AppState<S>,
    application_id: i64,
) -> ServiceResult<AdminDashboardData>
where
    B: AdminApi + FeedbackApi + ?Sized,
    S: KeyValueStorage,
{
    let token = require_admin_token(state)?;
    api.reject_application(application_id, &token)
        .await
        .map_err(|err| {
            log::error!("Failed to reject application {application_id}: {err}");
            ServiceError::from(err)
        })?;
    load_all(api, state).await
}

/// Moves a feedback entry to a new resolution status, then reloads.
pub async fn set_feedback_status<B, S>(
    api: &B,
    state: &AppState<S>,
    feedback_id: i64,
    status: FeedbackStatus,
) -> ServiceResult<AdminDashboardData>
where
    B: AdminApi + FeedbackApi + ?Sized,
    S: KeyValueStorage,
{
    let token = require_admin_token(state)?;
    api.update_feedback_status(feedback_id, status, &token)
        .await
        .map_err(|err| {
            log::error!("Failed to update feedback {feedback_id}: {err}");
            ServiceError::from(err)
        })?;
    load_all(api, state).await
}
