pub mod admin;
pub mod db;
pub mod gateway;
pub mod generation;
pub mod models;
pub mod payment;
pub mod plan;
pub mod seed;
pub mod settings;
pub mod usage;
pub mod user;
