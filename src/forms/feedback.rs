use serde::Deserialize;
use validator::Validate;

use crate::domain::feedback::FeedbackType;

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Form data for submitting a complaint or suggestion.
pub struct FeedbackForm {
    pub feedback_type: FeedbackType,
    #[validate(length(min = 1, max = 255))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}
