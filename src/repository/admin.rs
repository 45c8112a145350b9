use crate::client::memory::Tables;

use super::{
    db::{DbError, Repository},
    models::{AdminRole, AdminUser},
};

pub struct CreateAdminArgs {
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub password: String,
}

#[derive(Debug, Default)]
pub struct UpdateAdminArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<AdminRole>,
    pub password: Option<String>,
}

impl Repository {
    pub fn get_admins(&self, db: &Tables) -> Vec<AdminUser> {
        db.admins.clone()
    }

    pub fn get_admin_by_id(&self, db: &Tables, id: i64) -> Result<AdminUser, DbError> {
        db.admins
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn get_admin_by_email(&self, db: &Tables, email: &str) -> Result<AdminUser, DbError> {
        db.admins
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn create_admin(&self, db: &mut Tables, args: CreateAdminArgs) -> Result<AdminUser, DbError> {
        if db
            .admins
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(&args.email))
        {
            return Err(DbError::UniqueViolation {
                field: "email".to_string(),
            });
        }
        let admin = AdminUser {
            id: db.next_id(),
            name: args.name,
            email: args.email,
            role: args.role,
            password: args.password,
        };
        db.admins.push(admin.clone());
        Ok(admin)
    }

    pub fn update_admin(
        &self,
        db: &mut Tables,
        id: i64,
        args: UpdateAdminArgs,
    ) -> Result<AdminUser, DbError> {
        if let Some(email) = &args.email {
            if db
                .admins
                .iter()
                .any(|a| a.id != id && a.email.eq_ignore_ascii_case(email))
            {
                return Err(DbError::UniqueViolation {
                    field: "email".to_string(),
                });
            }
        }
        let admin = db
            .admins
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DbError::RowNotFound)?;
        if let Some(name) = args.name {
            admin.name = name;
        }
        if let Some(email) = args.email {
            admin.email = email;
        }
        if let Some(role) = args.role {
            admin.role = role;
        }
        if let Some(password) = args.password {
            admin.password = password;
        }
        Ok(admin.clone())
    }

    pub fn delete_admin(&self, db: &mut Tables, id: i64) -> Result<AdminUser, DbError> {
        let position = db
            .admins
            .iter()
            .position(|a| a.id == id)
            .ok_or(DbError::RowNotFound)?;
        Ok(db.admins.remove(position))
    }

    pub fn count_admins_with_role(&self, db: &Tables, role: AdminRole) -> usize {
        db.admins.iter().filter(|a| a.role == role).count()
    }
}
