pub mod admin_auth;
pub mod jwt_auth;
