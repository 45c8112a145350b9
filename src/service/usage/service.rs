use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::client::memory::{MemoryDb, Tables};
use crate::repository::{
    db::Repository,
    generation::CreateGenerationArgs,
    models::{Generation, GenerationType, Limit, Plan, Usage},
};

use super::error::UsageError;

/// Allow a new generation of `kind`?
///
/// Without a plan nothing is allowed. An unlimited feature is always allowed,
/// otherwise the count so far must be strictly below the limit.
pub fn can_generate(plan: Option<&Plan>, usage: &Usage, kind: GenerationType) -> bool {
    let plan = match plan {
        None => return false,
        Some(p) => p,
    };
    match plan.limits.get(kind) {
        Limit::Unlimited => true,
        Limit::Limited(limit) => usage.get(kind) < limit,
    }
}

/// Days are UTC calendar days.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
}

#[derive(Debug)]
pub struct NewGeneration {
    pub kind: GenerationType,
    pub prompt: String,
    pub image_url: String,
}

/// `None` means unlimited.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Remaining {
    pub image: Option<u32>,
    pub thumbnail: Option<u32>,
    pub switch: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsageStatus {
    pub plan: Option<Plan>,
    pub usage: Usage,
    pub remaining: Remaining,
}

fn remaining(plan: Option<&Plan>, usage: &Usage, kind: GenerationType) -> Option<u32> {
    match plan.map(|p| p.limits.get(kind)) {
        None => Some(0),
        Some(Limit::Unlimited) => None,
        Some(Limit::Limited(limit)) => Some(limit.saturating_sub(usage.get(kind))),
    }
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository) -> Self {
        Service { db, repo }
    }

    fn resolve_plan(&self, db: &Tables, user_id: i64) -> Result<Option<Plan>, UsageError> {
        let user = self
            .repo
            .get_user_by_id(db, user_id)
            .map_err(|_| UsageError::UserNotFound { id: user_id })?;
        Ok(self.repo.get_plan_by_name(db, user.plan).ok())
    }

    pub async fn get_usage(&self, user_id: i64) -> Usage {
        let db = self.db.acquire().await;
        self.repo.get_usage(&db, user_id, today())
    }

    pub async fn get_usage_status(&self, user_id: i64) -> Result<UsageStatus, UsageError> {
        let db = self.db.acquire().await;
        let plan = self.resolve_plan(&db, user_id)?;
        let usage = self.repo.get_usage(&db, user_id, today());
        let remaining = Remaining {
            image: remaining(plan.as_ref(), &usage, GenerationType::Image),
            thumbnail: remaining(plan.as_ref(), &usage, GenerationType::Thumbnail),
            switch: remaining(plan.as_ref(), &usage, GenerationType::Switch),
        };
        Ok(UsageStatus {
            plan,
            usage,
            remaining,
        })
    }

    /// Read-only quota check, used to fail fast before calling out.
    pub async fn check_quota(&self, user_id: i64, kind: GenerationType) -> Result<(), UsageError> {
        let db = self.db.acquire().await;
        let plan = self.resolve_plan(&db, user_id)?;
        let usage = self.repo.get_usage(&db, user_id, today());
        ensure_allowed(plan.as_ref(), &usage, kind)
    }

    /// Record a finished generation and count it.
    ///
    /// The quota is checked again under the write guard, and the log entry and
    /// the counter move together or not at all.
    pub async fn add_generation(
        &self,
        user_id: i64,
        generation: NewGeneration,
    ) -> Result<Generation, UsageError> {
        let day = today();
        let mut db = self.db.begin().await;
        let plan = self.resolve_plan(&db, user_id)?;
        let usage = self.repo.get_usage(&db, user_id, day);
        if let Err(e) = ensure_allowed(plan.as_ref(), &usage, generation.kind) {
            warn!(user_id, kind = %generation.kind, "generation rejected: {}", e);
            return Err(e);
        }

        let kind = generation.kind;
        let record = self.repo.create_generation(
            &mut db,
            CreateGenerationArgs {
                user_id,
                kind,
                prompt: generation.prompt,
                image_url: generation.image_url,
            },
        );
        let usage = self.repo.increment_usage(&mut db, user_id, day, kind);
        info!(user_id, %kind, used = usage.get(kind), "generation recorded");
        Ok(record)
    }

    /// Zero the counters. Recorded generations stay.
    pub async fn reset_usage(&self, user_id: i64) -> Result<Usage, UsageError> {
        let mut db = self.db.begin().await;
        self.repo
            .get_user_by_id(&db, user_id)
            .map_err(|_| UsageError::UserNotFound { id: user_id })?;
        let usage = self.repo.reset_usage(&mut db, user_id, today());
        info!(user_id, "usage reset");
        Ok(usage)
    }

    /// Newest first.
    pub async fn list_generations(&self, user_id: i64) -> Vec<Generation> {
        let db = self.db.acquire().await;
        self.repo.get_generations_by_user_id(&db, user_id)
    }
}

fn ensure_allowed(
    plan: Option<&Plan>,
    usage: &Usage,
    kind: GenerationType,
) -> Result<(), UsageError> {
    if plan.is_none() {
        return Err(UsageError::NoActivePlan);
    }
    if !can_generate(plan, usage, kind) {
        return Err(UsageError::LimitReached { kind });
    }
    Ok(())
}
