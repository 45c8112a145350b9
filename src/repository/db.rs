use snafu::Snafu;

#[derive(Clone, Default)]
pub struct Repository {}

impl Repository {
    pub fn new() -> Self {
        Repository {}
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum DbError {
    #[snafu(display("row not found"))]
    RowNotFound,
    #[snafu(display("{field} already exists"))]
    UniqueViolation { field: String },
}
