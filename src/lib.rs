pub mod client;
pub mod config;
pub mod handler;
pub mod http_server;
pub mod middleware;
pub mod repository;
pub mod service;
pub mod telemetry;

use crate::service::admin::service::Service as AdminService;
use crate::service::auth::service::Service as AuthService;
use crate::service::dashboard::service::Service as DashboardService;
use crate::service::gateway::service::Service as GatewayService;
use crate::service::generation::service::Service as GenerationService;
use crate::service::payment::service::Service as PaymentService;
use crate::service::plan::service::Service as PlanService;
use crate::service::settings::service::Service as SettingsService;
use crate::service::usage::service::Service as UsageService;
use crate::service::user::service::Service as UserService;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub plan_service: PlanService,
    pub usage_service: UsageService,
    pub generation_service: GenerationService,
    pub payment_service: PaymentService,
    pub gateway_service: GatewayService,
    pub admin_service: AdminService,
    pub settings_service: SettingsService,
    pub dashboard_service: DashboardService,
}
