use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum AuthError {
    #[snafu(display("email already exist"))]
    EmailAlreadyTaken,
    #[snafu(display("password and confirm password do not match"))]
    PasswordMismatch,
    #[snafu(display("invalid credentials"))]
    InvalidCredentials,
    #[snafu(display("current password is wrong"))]
    WrongPassword,
    #[snafu(display("invalid token"))]
    InvalidToken,
    #[snafu(display("your account has been banned"))]
    Banned,
    #[snafu(display("{message}"))]
    Unexpected {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
