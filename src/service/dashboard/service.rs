use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::client::memory::MemoryDb;
use crate::repository::{db::Repository, models::PaymentStatus};

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_users: usize,
    pub pending_payments: usize,
    #[schema(value_type = String)]
    pub total_revenue: BigDecimal,
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository) -> Self {
        Service { db, repo }
    }

    /// Revenue is the sum of approved payments.
    pub async fn get_stats(&self) -> DashboardStats {
        let db = self.db.acquire().await;
        let payments = self.repo.get_payments(&db);
        let pending_payments = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Pending)
            .count();
        let total_revenue = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Approved)
            .fold(BigDecimal::from(0), |acc, p| acc + &p.amount);
        DashboardStats {
            total_users: self.repo.get_users(&db).len(),
            pending_payments,
            total_revenue,
        }
    }
}
