use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for creating a citizen account.
pub struct SignupForm {
    #[validate(email)]
    pub email: String,
    /// Contact phone number; normalized to E.164 before submission.
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for a citizen login.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for an administrator login.
pub struct AdminLoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
