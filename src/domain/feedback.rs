use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeedbackType {
    #[default]
    Complaint,
    Suggestion,
}

impl Display for FeedbackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackType::Complaint => write!(f, "Complaint"),
            FeedbackType::Suggestion => write!(f, "Suggestion"),
        }
    }
}

/// Resolution state, mutated only by an administrator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeedbackStatus {
    New,
    #[serde(rename = "In_Progress")]
    InProgress,
    Resolved,
}

impl Display for FeedbackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackStatus::New => write!(f, "New"),
            FeedbackStatus::InProgress => write!(f, "In Progress"),
            FeedbackStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// Feedback entry as listed by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: i64,
    #[serde(default)]
    pub user_email: Option<String>,
    pub feedback_type: FeedbackType,
    pub subject: String,
    pub message: String,
    pub status: FeedbackStatus,
    pub submission_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
