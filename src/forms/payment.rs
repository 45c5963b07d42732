use serde::Deserialize;
use validator::Validate;

use crate::dto::payment::PaymentMethod;

/// Flat fee charged per application.
pub const DEFAULT_SERVICE_FEE: f64 = 200.0;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for submitting a payment transaction id.
pub struct PaymentForm {
    #[validate(range(min = 0.01))]
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[validate(length(min = 1))]
    pub transaction_id: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            amount: DEFAULT_SERVICE_FEE,
            payment_method: PaymentMethod::default(),
            transaction_id: String::new(),
        }
    }
}
