use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;
use validator::Validate;

use crate::client::memory::MemoryDb;
use crate::repository::{
    db::Repository,
    models::{Payment, PaymentStatus, PlanName, User},
    payment::CreatePaymentArgs,
    user::UpdateUserArgs,
};

use super::error::PaymentError;

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
}

#[derive(Debug)]
pub struct SubmitPaymentParams {
    pub user_id: i64,
    pub user_email: String,
    pub plan_name: PlanName,
    pub amount: BigDecimal,
    pub method: String,
    pub transaction_id: String,
    pub sender_number: String,
}

/// What a user fills in after sending money to one of the gateways.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlanPaymentParams {
    pub plan_name: PlanName,
    #[validate(length(min = 1))]
    pub method: String,
    #[validate(length(min = 1))]
    pub transaction_id: String,
    #[validate(length(min = 1))]
    pub sender_number: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DecidePaymentParams {
    pub status: PaymentStatus,
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository) -> Self {
        Service { db, repo }
    }

    /// Record a payment claim as Pending. Fields are validated by the caller.
    pub async fn submit_payment(&self, params: SubmitPaymentParams) -> Payment {
        let mut db = self.db.begin().await;
        let payment = self.repo.create_payment(
            &mut db,
            CreatePaymentArgs {
                user_id: params.user_id,
                user_email: params.user_email,
                plan_name: params.plan_name,
                amount: params.amount,
                method: params.method,
                transaction_id: params.transaction_id,
                sender_number: params.sender_number,
                status: PaymentStatus::Pending,
            },
        );
        info!(
            payment_id = payment.id,
            user_id = payment.user_id,
            plan = %payment.plan_name,
            "payment submitted"
        );
        payment
    }

    /// Checks the claim against the catalog and the gateways, then submits it
    /// with the catalog price as the amount.
    pub async fn request_plan_payment(
        &self,
        user: &User,
        params: PlanPaymentParams,
    ) -> Result<Payment, PaymentError> {
        let (amount, method) = {
            let db = self.db.acquire().await;
            let plan = self
                .repo
                .get_plan_by_name(&db, params.plan_name)
                .map_err(|_| PaymentError::PlanNotFound {
                    name: params.plan_name,
                })?;
            if plan.name == PlanName::Free {
                return Err(PaymentError::InvalidPlan {
                    message: "the Free plan does not need a payment".to_string(),
                });
            }
            if plan.name == user.plan {
                return Err(PaymentError::InvalidPlan {
                    message: format!("you are already on the {} plan", plan.name),
                });
            }
            let gateway = self
                .repo
                .get_gateway_by_name(&db, &params.method)
                .map_err(|_| PaymentError::InvalidMethod {
                    method: params.method.clone(),
                })?;
            (plan.price, gateway.name)
        };

        let payment = self
            .submit_payment(SubmitPaymentParams {
                user_id: user.id,
                user_email: user.email.clone(),
                plan_name: params.plan_name,
                amount,
                method,
                transaction_id: params.transaction_id,
                sender_number: params.sender_number,
            })
            .await;
        Ok(payment)
    }

    /// Move a Pending payment to Approved or Rejected. Approval switches the
    /// owner's plan under the same write, so either both change or neither.
    pub async fn decide_payment(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> Result<Payment, PaymentError> {
        if status == PaymentStatus::Pending {
            return Err(PaymentError::InvalidTransition);
        }
        let mut db = self.db.begin().await;
        let payment = self
            .repo
            .get_payment_by_id(&db, id)
            .map_err(|_| PaymentError::NotFound { id })?;
        if payment.status != PaymentStatus::Pending {
            warn!(payment_id = id, status = %payment.status, "payment already decided");
            return Err(PaymentError::AlreadyDecided {
                id,
                status: payment.status,
            });
        }

        if status == PaymentStatus::Approved {
            self.repo
                .get_plan_by_name(&db, payment.plan_name)
                .map_err(|_| PaymentError::PlanNotFound {
                    name: payment.plan_name,
                })?;
            let user = self
                .repo
                .get_user_by_email(&db, &payment.user_email)
                .map_err(|_| PaymentError::UserNotFound {
                    email: payment.user_email.clone(),
                })?;
            self.repo
                .update_user(
                    &mut db,
                    user.id,
                    UpdateUserArgs {
                        plan: Some(payment.plan_name),
                        ..Default::default()
                    },
                )
                .map_err(|_| PaymentError::UserNotFound {
                    email: payment.user_email.clone(),
                })?;
        }

        let payment = self
            .repo
            .update_payment_status(&mut db, id, status)
            .map_err(|_| PaymentError::NotFound { id })?;
        info!(payment_id = id, %status, "payment decided");
        Ok(payment)
    }

    /// Newest first.
    pub async fn list_payments(&self) -> Vec<Payment> {
        let db = self.db.acquire().await;
        self.repo.get_payments(&db)
    }

    pub async fn list_user_payments(&self, user_id: i64) -> Vec<Payment> {
        let db = self.db.acquire().await;
        self.repo.get_payments_by_user_id(&db, user_id)
    }
}
