use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::repository::models::{
    AdminRole, AdminUser, Gateway, Generation, GenerationType, Payment, PaymentStatus, Plan,
    PlanGlow, PlanLimits, PlanName, SiteSettings, Usage, User,
};
use crate::service::{
    admin::service::{CreateAdminParams, UpdateAdminParams},
    auth::service::{
        AccountType, ChangePasswordParams, LoginParams, LoginResult, RegisterParams,
        RegisterResult,
    },
    dashboard::service::DashboardStats,
    gateway::service::GatewayParams,
    generation::{
        prompt::{AspectRatio, ImageQuality, Style, SwitchMode},
        service::{GenerateImageParams, GenerateThumbnailParams, ImageInput, SwitchImagesParams},
    },
    payment::service::{DecidePaymentParams, PlanPaymentParams},
    plan::service::{MoveDirection, MovePlanParams, PlanAction, PlanOption, PlanParams},
    settings::service::UpdateSettingsParams,
    usage::service::{Remaining, UsageStatus},
    user::service::{UpdateNameParams, UpdateUserParams},
};

use super::{admin, auth, gateway, generation, payment, plan, profile, settings, usage};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        plan::plans_list,
        plan::plan_options,
        gateway::gateways_list,
        settings::site_settings,
        profile::profile,
        profile::update_name,
        profile::change_password,
        usage::usage_status,
        generation::generations_list,
        generation::generate_image,
        generation::generate_thumbnail,
        generation::switch_images,
        payment::submit_payment,
        payment::payments_list,
        admin::dashboard::dashboard,
        admin::users::users_list,
        admin::users::update_user,
        admin::payments::payments_list,
        admin::payments::decide_payment,
        admin::plans::create_plan,
        admin::plans::delete_plan,
        admin::plans::move_plan,
        admin::admins::create_admin,
        admin::settings::update_settings,
    ),
    components(schemas(
        AdminRole,
        AdminUser,
        Gateway,
        Generation,
        GenerationType,
        Payment,
        PaymentStatus,
        Plan,
        PlanGlow,
        PlanLimits,
        PlanName,
        SiteSettings,
        Usage,
        User,
        CreateAdminParams,
        UpdateAdminParams,
        AccountType,
        ChangePasswordParams,
        LoginParams,
        LoginResult,
        RegisterParams,
        RegisterResult,
        DashboardStats,
        GatewayParams,
        AspectRatio,
        ImageQuality,
        Style,
        SwitchMode,
        GenerateImageParams,
        GenerateThumbnailParams,
        ImageInput,
        SwitchImagesParams,
        DecidePaymentParams,
        PlanPaymentParams,
        MoveDirection,
        MovePlanParams,
        PlanAction,
        PlanOption,
        PlanParams,
        UpdateSettingsParams,
        Remaining,
        UsageStatus,
        UpdateNameParams,
        UpdateUserParams,
    )),
    modifiers(&SecurityAddon),
    tags((name = "itzgen", description = "image generation and back-office api"))
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
