pub mod bcrypt;
pub mod error;
pub mod jwt;
pub mod service;
