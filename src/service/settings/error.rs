use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("glow opacity must be between 0 and 100"))]
    InvalidOpacity,
    #[snafu(display("glow needs an existing plan"))]
    GlowPlanNotFound,
}
