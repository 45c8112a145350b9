use bigdecimal::BigDecimal;

use super::models::{Limit, PlanGlow, PlanLimits, PlanName, SiteSettings};
use super::plan::CreatePlanArgs;

pub const DEFAULT_GLOW_COLOR: &str = "#A259FF";
pub const DEFAULT_GLOW_OPACITY: u8 = 75;

fn plan(
    name: PlanName,
    price: i64,
    limits: (Limit, Limit, Limit),
    description: &str,
) -> CreatePlanArgs {
    CreatePlanArgs {
        name,
        price: BigDecimal::from(price),
        limits: PlanLimits {
            image: limits.0,
            thumbnail: limits.1,
            switch: limits.2,
        },
        description: description.to_string(),
    }
}

pub fn default_plans() -> Vec<CreatePlanArgs> {
    use Limit::{Limited, Unlimited};
    vec![
        plan(
            PlanName::Free,
            0,
            (Limited(5), Limited(2), Limited(3)),
            "Default trial plan",
        ),
        plan(
            PlanName::Go,
            49,
            (Limited(15), Limited(5), Limited(8)),
            "Beginner creator tier",
        ),
        plan(
            PlanName::Plus,
            99,
            (Limited(35), Limited(10), Limited(15)),
            "Regular content maker",
        ),
        plan(
            PlanName::Pro,
            199,
            (Limited(70), Limited(20), Limited(30)),
            "For professionals",
        ),
        plan(
            PlanName::Ultimate,
            349,
            (Unlimited, Unlimited, Unlimited),
            "Agency or business users",
        ),
    ]
}

pub fn default_gateways() -> Vec<(&'static str, &'static str)> {
    vec![
        ("bKash", "01234567890"),
        ("Nagad", "01234567891"),
        ("Rocket", "01234567892"),
    ]
}

pub fn default_settings() -> SiteSettings {
    SiteSettings {
        name: "ItzGen".to_string(),
        logo: String::new(),
        contact_email: "support@itzgen.bd".to_string(),
        plan_glow: PlanGlow {
            enabled: false,
            plan_id: None,
            color: DEFAULT_GLOW_COLOR.to_string(),
            opacity: DEFAULT_GLOW_OPACITY,
        },
    }
}
