use config::Config;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub auth: AuthConfig,
    pub admin: AdminConfig,
    pub image_api: ImageApiConfig,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub address: String,
    /// Largest accepted request body, in bytes.
    pub body_limit: usize,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
}

/// Main admin account seeded into the store on startup.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct AdminConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ImageApiConfig {
    pub url: String,
    pub key: String,
    pub imagen_model: String,
    pub edit_model: String,
    pub timeout_secs: u64,
}

impl Settings {
    /// Defaults, then an optional `config.{yaml,toml,json}` next to the binary,
    /// then `APP__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        let cfg = Config::builder()
            .set_default("server.address", "127.0.0.1:8080")?
            .set_default("server.body_limit", 10 * 1024 * 1024)?
            .set_default("jwt.secret", "change-me")?
            .set_default("auth.bcrypt_cost", bcrypt::DEFAULT_COST as i64)?
            .set_default("admin.name", "ItzGen Admin")?
            .set_default("admin.email", "id@itzgen.bd")?
            .set_default("admin.password", "change-me-admin")?
            .set_default("image_api.url", "https://generativelanguage.googleapis.com")?
            .set_default("image_api.key", "")?
            .set_default("image_api.imagen_model", "imagen-4.0-generate-001")?
            .set_default("image_api.edit_model", "gemini-2.5-flash-image")?
            .set_default("image_api.timeout_secs", 120)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        cfg.try_deserialize::<Settings>()
    }
}
