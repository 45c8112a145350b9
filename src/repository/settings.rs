use crate::client::memory::Tables;

use super::{db::Repository, models::SiteSettings};

impl Repository {
    pub fn get_settings(&self, db: &Tables) -> SiteSettings {
        db.settings.clone()
    }

    pub fn update_settings(&self, db: &mut Tables, settings: SiteSettings) -> SiteSettings {
        db.settings = settings.clone();
        settings
    }

    pub fn disable_plan_glow_for(&self, db: &mut Tables, plan_id: i64) {
        if db.settings.plan_glow.plan_id == Some(plan_id) {
            db.settings.plan_glow.enabled = false;
            db.settings.plan_glow.plan_id = None;
        }
    }
}
