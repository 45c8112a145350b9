pub mod admins;
pub mod dashboard;
pub mod gateways;
pub mod payments;
pub mod plans;
pub mod settings;
pub mod users;
