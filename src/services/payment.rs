use crate::api::PaymentApi;
use crate::domain::navigation::{NavPayload, View};
use crate::dto::payment::PaymentData;
use crate::forms::payment::PaymentForm;
use crate::services::{FlowOutcome, ServiceError, ServiceResult, require_token, validate_form};
use crate::state::AppState;
use crate::storage::KeyValueStorage;

/// Submits the payment transaction id for the application carried in the
/// navigation payload, then moves to the dashboard.
pub async fn submit<B, S>(
    api: &B,
    state: &mut AppState<S>,
    form: &PaymentForm,
) -> ServiceResult<FlowOutcome<()>>
where
    B: PaymentApi + ?Sized,
    S: KeyValueStorage,
{
    let application = match state.payload() {
        Some(NavPayload::Application(application)) => application.clone(),
        _ => {
            return Err(ServiceError::Form(
                "No application selected for payment".to_string(),
            ));
        }
    };
    validate_form(form)?;
    let token = require_token(state)?;
    let issued = state.generation();

    let data = PaymentData {
        application_id: application.application_id,
        amount: form.amount,
        payment_method: form.payment_method,
        transaction_id: form.transaction_id.clone(),
    };
    api.submit_payment(&data, &token).await.map_err(|err| {
        log::error!("Failed to submit payment: {err}");
        ServiceError::from(err)
    })?;

    if !state.is_current(issued) {
        log::warn!("Discarding stale payment completion");
        return Ok(FlowOutcome::Stale);
    }
    state.navigate(View::Dashboard, None);
    Ok(FlowOutcome::Applied(()))
}
