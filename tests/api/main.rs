mod admin;
mod auth;
mod generation;
mod helpers;
mod payment;
