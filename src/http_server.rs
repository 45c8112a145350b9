use crate::{config::Settings, handler, middleware, AppState, SharedState};

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use snafu::{ResultExt, Snafu};
use std::sync::Arc;
use tokio::{io, net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::client::image_api::ImageApiClient;
use crate::client::memory::{new_memory_db, MemoryDb};
use crate::handler::docs::ApiDoc;
use crate::repository::db::Repository;
use crate::service::admin::error::AdminError;
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

#[derive(Debug, Snafu)]
pub enum ServerError {
    #[snafu(display("cannot build image api client: {source}"))]
    ImageClient { source: reqwest::Error },
    #[snafu(display("cannot seed main admin: {source}"))]
    MainAdmin { source: AdminError },
    #[snafu(display("cannot bind listener: {source}"))]
    Bind { source: io::Error },
}

pub struct HttpServer {
    router: Router,
    listener: TcpListener,
    port: u16,
    db: MemoryDb,
}

impl HttpServer {
    pub async fn build(cfg: Settings) -> Result<Self, ServerError> {
        let repo = Repository::new();
        let db = new_memory_db();
        let image_api = ImageApiClient::new(&cfg.image_api).context(ImageClientSnafu)?;

        let user_service = UserService::new(db.clone(), repo.clone());
        let plan_service = PlanService::new(db.clone(), repo.clone());
        let usage_service = UsageService::new(db.clone(), repo.clone());
        let generation_service = GenerationService::new(usage_service.clone(), image_api);
        let payment_service = PaymentService::new(db.clone(), repo.clone());
        let gateway_service = GatewayService::new(db.clone(), repo.clone());
        let settings_service = SettingsService::new(db.clone(), repo.clone());
        let dashboard_service = DashboardService::new(db.clone(), repo.clone());
        let admin_service = AdminService::new(db.clone(), repo.clone(), cfg.auth.bcrypt_cost);
        admin_service
            .ensure_main_admin(&cfg.admin)
            .await
            .context(MainAdminSnafu)?;
        let auth_service = AuthService::new(
            user_service.clone(),
            admin_service.clone(),
            cfg.jwt.secret,
            cfg.auth.bcrypt_cost,
        );

        let app_state = AppState {
            auth_service,
            user_service,
            plan_service,
            usage_service,
            generation_service,
            payment_service,
            gateway_service,
            admin_service,
            settings_service,
            dashboard_service,
        };
        let shared_state = Arc::new(RwLock::new(app_state));

        let router = get_router(shared_state, cfg.server.body_limit);
        let listener = TcpListener::bind(&cfg.server.address)
            .await
            .context(BindSnafu)?;
        let port = listener.local_addr().context(BindSnafu)?.port();
        tracing::info!(port, "http server is ready");
        Ok(HttpServer {
            router,
            listener,
            port,
            db,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle on the store the server runs on.
    pub fn db(&self) -> MemoryDb {
        self.db.clone()
    }

    pub async fn run(self) -> Result<(), io::Error> {
        axum::serve(self.listener, self.router).await
    }
}

/// `body_limit` is in bytes.
pub fn get_router(shared_state: SharedState, body_limit: usize) -> Router {
    let user_auth = || {
        axum_middleware::from_fn_with_state(
            shared_state.clone(),
            middleware::jwt_auth::auth_middleware,
        )
    };

    let auth_routes = Router::new()
        .route("/register", post(handler::auth::register))
        .route("/login", post(handler::auth::login));

    let plan_routes = Router::new()
        .route("/options", get(handler::plan::plan_options))
        .layer(user_auth())
        .route("/", get(handler::plan::plans_list));

    let profile_routes = Router::new()
        .route("/", get(handler::profile::profile))
        .route("/name", put(handler::profile::update_name))
        .route("/password", put(handler::profile::change_password))
        .layer(user_auth());

    let generation_routes = Router::new()
        .route("/", get(handler::generation::generations_list))
        .route("/image", post(handler::generation::generate_image))
        .route("/thumbnail", post(handler::generation::generate_thumbnail))
        .route("/switch", post(handler::generation::switch_images))
        .layer(user_auth());

    let payment_routes = Router::new()
        .route(
            "/",
            get(handler::payment::payments_list).post(handler::payment::submit_payment),
        )
        .layer(user_auth());

    let usage_routes = Router::new()
        .route("/", get(handler::usage::usage_status))
        .layer(user_auth());

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/plans", plan_routes)
        .nest("/profile", profile_routes)
        .nest("/usage", usage_routes)
        .nest("/generations", generation_routes)
        .nest("/payments", payment_routes)
        .route("/gateways", get(handler::gateway::gateways_list))
        .route("/settings", get(handler::settings::site_settings))
        .nest("/admin", admin_router(shared_state.clone()));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

fn admin_router(shared_state: SharedState) -> Router<SharedState> {
    use handler::admin;

    Router::new()
        .route("/dashboard", get(admin::dashboard::dashboard))
        .route("/users", get(admin::users::users_list))
        .route(
            "/users/:id",
            get(admin::users::user_detail).put(admin::users::update_user),
        )
        .route("/users/:id/usage/reset", post(admin::users::reset_usage))
        .route("/payments", get(admin::payments::payments_list))
        .route(
            "/payments/:id/decision",
            post(admin::payments::decide_payment),
        )
        .route(
            "/plans",
            get(admin::plans::plans_list).post(admin::plans::create_plan),
        )
        .route(
            "/plans/:id",
            put(admin::plans::update_plan).delete(admin::plans::delete_plan),
        )
        .route("/plans/:id/move", post(admin::plans::move_plan))
        .route(
            "/gateways",
            get(handler::gateway::gateways_list).post(admin::gateways::create_gateway),
        )
        .route(
            "/gateways/:id",
            put(admin::gateways::update_gateway).delete(admin::gateways::delete_gateway),
        )
        .route(
            "/admins",
            get(admin::admins::admins_list).post(admin::admins::create_admin),
        )
        .route(
            "/admins/:id",
            put(admin::admins::update_admin).delete(admin::admins::delete_admin),
        )
        .route(
            "/settings",
            get(handler::settings::site_settings).put(admin::settings::update_settings),
        )
        .layer(axum_middleware::from_fn_with_state(
            shared_state,
            middleware::admin_auth::admin_auth_middleware,
        ))
}
