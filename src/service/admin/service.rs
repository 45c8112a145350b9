use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use validator::Validate;

use crate::client::memory::{MemoryDb, Tables};
use crate::config::AdminConfig;
use crate::repository::{
    admin::{CreateAdminArgs, UpdateAdminArgs},
    db::{DbError, Repository},
    models::{AdminRole, AdminUser},
};
use crate::service::auth::bcrypt;

use super::error::AdminError;

/// Back-office areas an admin may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewUsers,
    ManageUsers,
    ViewPayments,
    DecidePayments,
    ManagePlans,
    ManageGateways,
    ManageAdmins,
    ManageSettings,
    ViewDashboard,
}

pub fn role_can(role: AdminRole, capability: Capability) -> bool {
    use Capability::*;
    match role {
        AdminRole::MainAdmin => true,
        AdminRole::Moderator => !matches!(capability, ManageAdmins | ManageSettings),
        AdminRole::Support => matches!(capability, ViewUsers | ViewPayments | ViewDashboard),
    }
}

pub fn authorize(admin: &AdminUser, capability: Capability) -> Result<(), AdminError> {
    if !role_can(admin.role, capability) {
        info!(admin_id = admin.id, ?capability, "admin action forbidden");
        return Err(AdminError::Forbidden);
    }
    Ok(())
}

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
    bcrypt_cost: u32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdminParams {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: AdminRole,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAdminParams {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    pub role: Option<AdminRole>,
}

fn unexpected(message: &str, e: bcrypt::BcryptError) -> AdminError {
    error!("{} due to err: {}", message, e);
    AdminError::Unexpected {
        message: message.to_string(),
        source: Box::new(e) as Box<dyn std::error::Error + Send + Sync>,
    }
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository, bcrypt_cost: u32) -> Self {
        Service {
            db,
            repo,
            bcrypt_cost,
        }
    }

    pub async fn list_admins(&self) -> Vec<AdminUser> {
        let db = self.db.acquire().await;
        self.repo.get_admins(&db)
    }

    pub async fn get_admin_by_id(&self, id: i64) -> Result<AdminUser, AdminError> {
        let db = self.db.acquire().await;
        self.repo
            .get_admin_by_id(&db, id)
            .map_err(|_| AdminError::NotFound { id })
    }

    pub async fn get_admin_by_email(&self, email: &str) -> Option<AdminUser> {
        let db = self.db.acquire().await;
        self.repo.get_admin_by_email(&db, email).ok()
    }

    /// Emails are unique across admins and users.
    pub async fn create_admin(&self, params: CreateAdminParams) -> Result<AdminUser, AdminError> {
        let password = bcrypt::encrypt_password(&params.password, self.bcrypt_cost)
            .map_err(|e| unexpected("cannot encrypt password", e))?;
        let mut db = self.db.begin().await;
        if self.repo.get_user_by_email(&db, &params.email).is_ok() {
            return Err(AdminError::EmailTaken);
        }
        let admin = self
            .repo
            .create_admin(
                &mut db,
                CreateAdminArgs {
                    name: params.name,
                    email: params.email,
                    role: params.role,
                    password,
                },
            )
            .map_err(|_| AdminError::EmailTaken)?;
        info!(admin_id = admin.id, role = ?admin.role, "admin created");
        Ok(admin)
    }

    pub async fn update_admin(
        &self,
        id: i64,
        params: UpdateAdminParams,
    ) -> Result<AdminUser, AdminError> {
        let password = match params.password {
            Some(p) => Some(
                bcrypt::encrypt_password(&p, self.bcrypt_cost)
                    .map_err(|e| unexpected("cannot encrypt password", e))?,
            ),
            None => None,
        };
        let mut db = self.db.begin().await;
        let current = self
            .repo
            .get_admin_by_id(&db, id)
            .map_err(|_| AdminError::NotFound { id })?;
        if let Some(email) = &params.email {
            if self.repo.get_user_by_email(&db, email).is_ok() {
                return Err(AdminError::EmailTaken);
            }
        }
        let demoted = params.role.is_some_and(|r| r != AdminRole::MainAdmin);
        if current.role == AdminRole::MainAdmin && demoted {
            self.ensure_not_last_main_admin(&db)?;
        }
        let admin = self
            .repo
            .update_admin(
                &mut db,
                id,
                UpdateAdminArgs {
                    name: params.name,
                    email: params.email,
                    role: params.role,
                    password,
                },
            )
            .map_err(|e| match e {
                DbError::RowNotFound => AdminError::NotFound { id },
                DbError::UniqueViolation { .. } => AdminError::EmailTaken,
            })?;
        info!(admin_id = id, role = ?admin.role, "admin updated");
        Ok(admin)
    }

    pub async fn delete_admin(&self, id: i64) -> Result<AdminUser, AdminError> {
        let mut db = self.db.begin().await;
        let admin = self
            .repo
            .get_admin_by_id(&db, id)
            .map_err(|_| AdminError::NotFound { id })?;
        if admin.role == AdminRole::MainAdmin {
            self.ensure_not_last_main_admin(&db)?;
        }
        let admin = self
            .repo
            .delete_admin(&mut db, id)
            .map_err(|_| AdminError::NotFound { id })?;
        info!(admin_id = id, "admin deleted");
        Ok(admin)
    }

    /// Seed the configured main admin unless an admin with that email exists.
    pub async fn ensure_main_admin(&self, cfg: &AdminConfig) -> Result<AdminUser, AdminError> {
        if let Some(admin) = self.get_admin_by_email(&cfg.email).await {
            return Ok(admin);
        }
        self.create_admin(CreateAdminParams {
            name: cfg.name.clone(),
            email: cfg.email.clone(),
            password: cfg.password.clone(),
            role: AdminRole::MainAdmin,
        })
        .await
    }

    fn ensure_not_last_main_admin(&self, db: &Tables) -> Result<(), AdminError> {
        if self.repo.count_admins_with_role(db, AdminRole::MainAdmin) <= 1 {
            return Err(AdminError::LastMainAdmin);
        }
        Ok(())
    }
}
