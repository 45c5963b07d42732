pub mod application;
pub mod auth;
pub mod feedback;
pub mod payment;
pub mod profile;
