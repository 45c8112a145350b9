pub mod admin;
pub mod auth;
pub mod docs;
pub mod error;
pub mod gateway;
pub mod generation;
pub mod payment;
pub mod plan;
pub mod profile;
pub mod request;
pub mod response;
pub mod settings;
pub mod usage;
