use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum PlanName {
    Free,
    Go,
    Plus,
    Pro,
    Ultimate,
}

impl Display for PlanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlanName::Free => "Free",
            PlanName::Go => "Go",
            PlanName::Plus => "Plus",
            PlanName::Pro => "Pro",
            PlanName::Ultimate => "Ultimate",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlanName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(PlanName::Free),
            "go" => Ok(PlanName::Go),
            "plus" => Ok(PlanName::Plus),
            "pro" => Ok(PlanName::Pro),
            "ultimate" => Ok(PlanName::Ultimate),
            _ => Err(format!("unknown plan name {s}")),
        }
    }
}

/// A daily allowance: a fixed count or no cap at all.
/// On the wire it is either a number or the string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LimitRepr", into = "LimitRepr")]
pub enum Limit {
    Limited(u32),
    Unlimited,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum LimitRepr {
    Count(u32),
    Keyword(UnlimitedKeyword),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum UnlimitedKeyword {
    Unlimited,
}

impl From<LimitRepr> for Limit {
    fn from(repr: LimitRepr) -> Self {
        match repr {
            LimitRepr::Count(n) => Limit::Limited(n),
            LimitRepr::Keyword(UnlimitedKeyword::Unlimited) => Limit::Unlimited,
        }
    }
}

impl From<Limit> for LimitRepr {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Limited(n) => LimitRepr::Count(n),
            Limit::Unlimited => LimitRepr::Keyword(UnlimitedKeyword::Unlimited),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    Image,
    Thumbnail,
    Switch,
}

impl Display for GenerationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GenerationType::Image => "image",
            GenerationType::Thumbnail => "thumbnail",
            GenerationType::Switch => "switch",
        };
        write!(f, "{}", s)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct PlanLimits {
    #[schema(value_type = Object)]
    pub image: Limit,
    #[schema(value_type = Object)]
    pub thumbnail: Limit,
    #[schema(value_type = Object)]
    pub switch: Limit,
}

impl PlanLimits {
    pub fn get(&self, kind: GenerationType) -> Limit {
        match kind {
            GenerationType::Image => self.image,
            GenerationType::Thumbnail => self.thumbnail,
            GenerationType::Switch => self.switch,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Plan {
    pub id: i64,
    pub name: PlanName,
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub limits: PlanLimits,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
pub struct Usage {
    pub image: u32,
    pub thumbnail: u32,
    pub switch: u32,
}

impl Usage {
    pub fn get(&self, kind: GenerationType) -> u32 {
        match kind {
            GenerationType::Image => self.image,
            GenerationType::Thumbnail => self.thumbnail,
            GenerationType::Switch => self.switch,
        }
    }

    pub fn increment(&mut self, kind: GenerationType) {
        let counter = match kind {
            GenerationType::Image => &mut self.image,
            GenerationType::Thumbnail => &mut self.thumbnail,
            GenerationType::Switch => &mut self.switch,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Counters of one user for one UTC day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUsage {
    pub user_id: i64,
    pub day: chrono::NaiveDate,
    pub usage: Usage,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub plan: PlanName,
    pub is_banned: bool,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Generation {
    pub id: Uuid,
    pub user_id: i64,
    pub kind: GenerationType,
    pub prompt: String,
    pub image_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Approved => "APPROVED",
            PaymentStatus::Rejected => "REJECTED",
        };
        write!(f, "{}", s)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Payment {
    pub id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub plan_name: PlanName,
    #[schema(value_type = String)]
    pub amount: BigDecimal,
    pub method: String,
    pub transaction_id: String,
    pub sender_number: String,
    pub status: PaymentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Gateway {
    pub id: i64,
    pub name: String,
    pub number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    MainAdmin,
    Moderator,
    Support,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PlanGlow {
    pub enabled: bool,
    pub plan_id: Option<i64>,
    pub color: String,
    pub opacity: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SiteSettings {
    pub name: String,
    pub logo: String,
    pub contact_email: String,
    pub plan_glow: PlanGlow,
}
