use crate::client::memory::Tables;

use super::{
    db::{DbError, Repository},
    models::{PlanName, User},
};

pub struct CreateUserArgs {
    pub name: String,
    pub email: String,
    pub password: String,
    pub plan: PlanName,
}

/// Only the `Some` fields are written.
#[derive(Debug, Default)]
pub struct UpdateUserArgs {
    pub name: Option<String>,
    pub password: Option<String>,
    pub plan: Option<PlanName>,
    pub is_banned: Option<bool>,
}

impl Repository {
    pub fn get_users(&self, db: &Tables) -> Vec<User> {
        db.users.clone()
    }

    pub fn get_user_by_id(&self, db: &Tables, id: i64) -> Result<User, DbError> {
        db.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn get_user_by_email(&self, db: &Tables, email: &str) -> Result<User, DbError> {
        db.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn create_user(&self, db: &mut Tables, args: CreateUserArgs) -> Result<User, DbError> {
        if db
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&args.email))
        {
            return Err(DbError::UniqueViolation {
                field: "email".to_string(),
            });
        }
        let user = User {
            id: db.next_id(),
            name: args.name,
            email: args.email,
            password: args.password,
            plan: args.plan,
            is_banned: false,
            joined_at: chrono::Utc::now(),
        };
        db.users.push(user.clone());
        Ok(user)
    }

    pub fn update_user(
        &self,
        db: &mut Tables,
        id: i64,
        args: UpdateUserArgs,
    ) -> Result<User, DbError> {
        let user = db
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DbError::RowNotFound)?;
        if let Some(name) = args.name {
            user.name = name;
        }
        if let Some(password) = args.password {
            user.password = password;
        }
        if let Some(plan) = args.plan {
            user.plan = plan;
        }
        if let Some(is_banned) = args.is_banned {
            user.is_banned = is_banned;
        }
        Ok(user.clone())
    }

    /// Returns how many users were moved.
    pub fn move_users_to_plan(&self, db: &mut Tables, from: PlanName, to: PlanName) -> usize {
        let mut moved = 0;
        for user in db.users.iter_mut().filter(|u| u.plan == from) {
            user.plan = to;
            moved += 1;
        }
        moved
    }
}
