pub use ::bcrypt::BcryptError;

pub fn encrypt_password(pass: &str, cost: u32) -> Result<String, BcryptError> {
    let hashed = ::bcrypt::hash(pass, cost)?;
    Ok(hashed)
}

pub fn verify_password(pass: &str, encoded_password: &str) -> Result<bool, BcryptError> {
    let is_verified = ::bcrypt::verify(pass, encoded_password)?;
    Ok(is_verified)
}
