use bigdecimal::BigDecimal;

use crate::client::memory::Tables;

use super::{
    db::{DbError, Repository},
    models::{Payment, PaymentStatus, PlanName},
};

pub struct CreatePaymentArgs {
    pub user_id: i64,
    pub user_email: String,
    pub plan_name: PlanName,
    pub amount: BigDecimal,
    pub method: String,
    pub transaction_id: String,
    pub sender_number: String,
    pub status: PaymentStatus,
}

impl Repository {
    pub fn create_payment(&self, db: &mut Tables, args: CreatePaymentArgs) -> Payment {
        let payment = Payment {
            id: db.next_id(),
            user_id: args.user_id,
            user_email: args.user_email,
            plan_name: args.plan_name,
            amount: args.amount,
            method: args.method,
            transaction_id: args.transaction_id,
            sender_number: args.sender_number,
            status: args.status,
            created_at: chrono::Utc::now(),
        };
        db.payments.insert(0, payment.clone());
        payment
    }

    pub fn get_payment_by_id(&self, db: &Tables, id: i64) -> Result<Payment, DbError> {
        db.payments
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn get_payments(&self, db: &Tables) -> Vec<Payment> {
        db.payments.clone()
    }

    pub fn get_payments_by_user_id(&self, db: &Tables, user_id: i64) -> Vec<Payment> {
        db.payments
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn update_payment_status(
        &self,
        db: &mut Tables,
        id: i64,
        status: PaymentStatus,
    ) -> Result<Payment, DbError> {
        let payment = db
            .payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DbError::RowNotFound)?;
        payment.status = status;
        Ok(payment.clone())
    }
}
