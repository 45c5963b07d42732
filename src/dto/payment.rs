use serde::{Deserialize, Serialize};

/// Payment channels accepted by the portal.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Bkash,
    Nagad,
    Rocket,
}

/// Body of `POST /api/payments`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub application_id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub transaction_id: String,
}
