use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::client::memory::MemoryDb;
use crate::repository::{
    db::Repository,
    models::{PlanGlow, SiteSettings},
};

use super::error::SettingsError;

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsParams {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[validate(email)]
    pub contact_email: String,
    pub plan_glow: PlanGlow,
}

impl From<UpdateSettingsParams> for SiteSettings {
    fn from(params: UpdateSettingsParams) -> Self {
        SiteSettings {
            name: params.name,
            logo: params.logo,
            contact_email: params.contact_email,
            plan_glow: params.plan_glow,
        }
    }
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository) -> Self {
        Service { db, repo }
    }

    pub async fn get_settings(&self) -> SiteSettings {
        let db = self.db.acquire().await;
        self.repo.get_settings(&db)
    }

    /// Replace the site settings. An enabled glow must point at a plan in
    /// the catalog.
    pub async fn update_settings(
        &self,
        settings: SiteSettings,
    ) -> Result<SiteSettings, SettingsError> {
        if settings.plan_glow.opacity > 100 {
            return Err(SettingsError::InvalidOpacity);
        }
        let mut db = self.db.begin().await;
        if let Some(plan_id) = settings.plan_glow.plan_id {
            self.repo
                .get_plan_by_id(&db, plan_id)
                .map_err(|_| SettingsError::GlowPlanNotFound)?;
        } else if settings.plan_glow.enabled {
            return Err(SettingsError::GlowPlanNotFound);
        }
        let settings = self.repo.update_settings(&mut db, settings);
        info!(name = %settings.name, glow = settings.plan_glow.enabled, "site settings updated");
        Ok(settings)
    }
}
