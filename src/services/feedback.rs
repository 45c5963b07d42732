use crate::api::FeedbackApi;
use crate::domain::feedback::FeedbackItem;
use crate::domain::navigation::View;
use crate::domain::types::FeedbackMessage;
use crate::dto::feedback::FeedbackData;
use crate::forms::feedback::FeedbackForm;
use crate::services::{FlowOutcome, ServiceError, ServiceResult, require_token, validate_form};
use crate::state::AppState;
use crate::storage::KeyValueStorage;

/// Submits a complaint or suggestion, then returns to the home view. The
/// message is sanitized before it leaves the client.
pub async fn submit<B, S>(
    api: &B,
    state: &mut AppState<S>,
    form: &FeedbackForm,
) -> ServiceResult<FlowOutcome<FeedbackItem>>
where
    B: FeedbackApi + ?Sized,
    S: KeyValueStorage,
{
    validate_form(form)?;
    let message = FeedbackMessage::new(form.message.as_str())?;
    let token = require_token(state)?;
    let issued = state.generation();

    let data = FeedbackData {
        feedback_type: form.feedback_type,
        subject: form.subject.trim().to_string(),
        message: message.into_inner(),
    };
    let saved = api.submit_feedback(&data, &token).await.map_err(|err| {
        log::error!("Failed to submit feedback: {err}");
        ServiceError::from(err)
    })?;

    if !state.is_current(issued) {
        log::warn!("Discarding stale feedback completion");
        return Ok(FlowOutcome::Stale);
    }
    state.navigate(View::Home, None);
    Ok(FlowOutcome::Applied(saved))
}
