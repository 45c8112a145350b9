use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::client::memory::MemoryDb;
use crate::repository::{
    db::{DbError, Repository},
    models::{PlanName, User},
    user::{CreateUserArgs, UpdateUserArgs},
};

use super::error::UserError;

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
}

#[derive(Debug)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub encrypted_password: String,
}

/// Back-office edit of a user. Absent fields are left as they are.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserParams {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub plan: Option<PlanName>,
    pub is_banned: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNameParams {
    #[validate(length(min = 1))]
    pub name: String,
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository) -> Self {
        Service { db, repo }
    }

    pub async fn list_users(&self) -> Vec<User> {
        let db = self.db.acquire().await;
        self.repo.get_users(&db)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User, UserError> {
        let db = self.db.acquire().await;
        self.repo
            .get_user_by_id(&db, id)
            .map_err(|_| UserError::NotFound { id })
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        let db = self.db.acquire().await;
        self.repo
            .get_user_by_email(&db, email)
            .map_err(|_| UserError::EmailNotFound {
                email: email.to_string(),
            })
    }

    /// New accounts start on the Free plan.
    /// Emails are unique across users and admins.
    pub async fn create_user(&self, params: CreateUserParams) -> Result<User, UserError> {
        let mut db = self.db.begin().await;
        if self.repo.get_admin_by_email(&db, &params.email).is_ok() {
            return Err(UserError::EmailTaken);
        }
        let user = self
            .repo
            .create_user(
                &mut db,
                CreateUserArgs {
                    name: params.name,
                    email: params.email,
                    password: params.encrypted_password,
                    plan: PlanName::Free,
                },
            )
            .map_err(|_| UserError::EmailTaken)?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    pub async fn update_user(&self, id: i64, params: UpdateUserParams) -> Result<User, UserError> {
        let mut db = self.db.begin().await;
        if let Some(name) = params.plan {
            self.repo
                .get_plan_by_name(&db, name)
                .map_err(|_| UserError::PlanNotFound { name })?;
        }
        let user = self
            .repo
            .update_user(
                &mut db,
                id,
                UpdateUserArgs {
                    name: params.name,
                    plan: params.plan,
                    is_banned: params.is_banned,
                    ..Default::default()
                },
            )
            .map_err(|_| UserError::NotFound { id })?;
        info!(user_id = id, plan = %user.plan, is_banned = user.is_banned, "user updated");
        Ok(user)
    }

    pub async fn update_name(&self, id: i64, name: String) -> Result<User, UserError> {
        self.update_user(
            id,
            UpdateUserParams {
                name: Some(name),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_password(&self, id: i64, encrypted_password: String) -> Result<(), UserError> {
        let mut db = self.db.begin().await;
        self.repo
            .update_user(
                &mut db,
                id,
                UpdateUserArgs {
                    password: Some(encrypted_password),
                    ..Default::default()
                },
            )
            .map_err(|e| match e {
                DbError::RowNotFound => UserError::NotFound { id },
                DbError::UniqueViolation { .. } => UserError::EmailTaken,
            })?;
        Ok(())
    }
}
