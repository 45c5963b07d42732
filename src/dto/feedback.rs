use serde::Serialize;

use crate::domain::feedback::{FeedbackStatus, FeedbackType};

/// Body of `POST /api/feedback`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    pub feedback_type: FeedbackType,
    pub subject: String,
    pub message: String,
}

/// Body of `PUT /api/feedback/{id}/status`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FeedbackStatusUpdate {
    pub status: FeedbackStatus,
}
