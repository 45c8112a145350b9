use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum AdminError {
    #[snafu(display("admin with id {id} not found"))]
    NotFound { id: i64 },
    #[snafu(display("email already exist"))]
    EmailTaken,
    #[snafu(display("you do not have permission to do this"))]
    Forbidden,
    #[snafu(display("at least one main admin must remain"))]
    LastMainAdmin,
    #[snafu(display("{message}"))]
    Unexpected {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
