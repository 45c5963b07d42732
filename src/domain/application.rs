use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review status assigned by the backend; read-only on the client.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "PENDING"),
            ApplicationStatus::Approved => write!(f, "APPROVED"),
            ApplicationStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Payment progress for an application; mutated only by the backend.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// Service application as listed by the backend. Citizen listings omit the
/// owning user id; the admin listing carries it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub service_name: String,
    pub submission_date: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}
