use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum GatewayError {
    #[snafu(display("gateway with id {id} not found"))]
    NotFound { id: i64 },
    #[snafu(display("gateway {name} already exists"))]
    NameTaken { name: String },
}
