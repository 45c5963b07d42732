//! Wire payloads exchanged with the backend. Field names follow the
//! backend's camelCase JSON.
pub mod admin;
pub mod application;
pub mod auth;
pub mod feedback;
pub mod payment;
