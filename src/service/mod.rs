pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod gateway;
pub mod generation;
pub mod payment;
pub mod plan;
pub mod settings;
pub mod usage;
pub mod user;
