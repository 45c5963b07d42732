use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SignUpData {
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/admin/login`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AdminLoginData {
    pub username: String,
    pub password: String,
}

/// Successful citizen login response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_id: i64,
    pub email: String,
    pub token: String,
}

/// Successful administrator login response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminAuthResponse {
    pub admin_id: i64,
    pub username: String,
    pub token: String,
}
