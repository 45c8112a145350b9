use bigdecimal::BigDecimal;
use serde_json::{json, Value};

use itzgen::repository::models::{AdminUser, Gateway, Payment, Plan, PlanName, SiteSettings, User};
use itzgen::service::dashboard::service::DashboardStats;

use crate::helpers::{read_data, read_message, spawn_app, ADMIN_EMAIL};

#[tokio::test]
async fn support_can_look_but_not_touch() {
    let app = spawn_app().await;
    let (user_id, token) = app.new_user().await;
    let support = app.admin_token_with_role("support").await;
    let payment: Payment = read_data(
        app.post(
            "/payments",
            Some(&token),
            &json!({"plan_name": "Go", "method": "bKash", "transaction_id": "T1", "sender_number": "017"}),
        )
        .await,
    )
    .await;

    let response = app.get("/admin/users", Some(&support)).await;
    assert_eq!(200, response.status().as_u16());
    let response = app.get("/admin/payments", Some(&support)).await;
    assert_eq!(200, response.status().as_u16());
    let response = app.get("/admin/dashboard", Some(&support)).await;
    assert_eq!(200, response.status().as_u16());

    let test_cases = vec![
        (
            reqwest::Method::POST,
            format!("/admin/payments/{}/decision", payment.id),
            json!({"status": "APPROVED"}),
        ),
        (
            reqwest::Method::PUT,
            format!("/admin/users/{}", user_id),
            json!({"is_banned": true}),
        ),
        (
            reqwest::Method::POST,
            "/admin/plans/1/move".to_string(),
            json!({"direction": "down"}),
        ),
        (
            reqwest::Method::POST,
            "/admin/gateways".to_string(),
            json!({"name": "Upay", "number": "019"}),
        ),
        (
            reqwest::Method::POST,
            "/admin/admins".to_string(),
            json!({"name": "x", "email": "x@itzgen.test", "password": "password123", "role": "support"}),
        ),
    ];
    for (method, path, body) in test_cases {
        let response = app.send_json(method, &path, Some(&support), &body).await;
        assert_eq!(
            403,
            response.status().as_u16(),
            "support was allowed to call {}",
            path
        );
    }

    let mine: Vec<Payment> = read_data(app.get("/payments", Some(&token)).await).await;
    assert_eq!(mine[0].status, payment.status);
}

#[tokio::test]
async fn moderator_runs_the_shop_but_not_the_staff() {
    let app = spawn_app().await;
    let moderator = app.admin_token_with_role("moderator").await;

    let response = app
        .post(
            "/admin/gateways",
            Some(&moderator),
            &json!({"name": "Upay", "number": "01900000000"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    let response = app.get("/admin/admins", Some(&moderator)).await;
    assert_eq!(403, response.status().as_u16());
    let response = app
        .put(
            "/admin/settings",
            Some(&moderator),
            &json!({
                "name": "Mine now",
                "contact_email": "me@itzgen.test",
                "plan_glow": {"enabled": false, "plan_id": null, "color": "#fff", "opacity": 10}
            }),
        )
        .await;
    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn last_main_admin_stays() {
    let app = spawn_app().await;
    let owner = app.main_admin_token().await;

    let admins: Vec<AdminUser> = read_data(app.get("/admin/admins", Some(&owner)).await).await;
    assert_eq!(admins.len(), 1);
    let me = &admins[0];
    assert_eq!(me.email, ADMIN_EMAIL);

    let response = app
        .delete(&format!("/admin/admins/{}", me.id), Some(&owner))
        .await;
    assert_eq!(409, response.status().as_u16());
    let response = app
        .put(
            &format!("/admin/admins/{}", me.id),
            Some(&owner),
            &json!({"role": "moderator"}),
        )
        .await;
    assert_eq!(409, response.status().as_u16());

    let response = app
        .post(
            "/admin/admins",
            Some(&owner),
            &json!({"name": "Dup", "email": ADMIN_EMAIL, "password": "password123", "role": "support"}),
        )
        .await;
    assert_eq!(422, response.status().as_u16());

    let response = app.delete("/admin/admins/424242", Some(&owner)).await;
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn staff_accounts_can_be_changed_and_removed() {
    let app = spawn_app().await;
    let owner = app.main_admin_token().await;
    let response = app
        .post(
            "/admin/admins",
            Some(&owner),
            &json!({"name": "Helper", "email": "helper@itzgen.test", "password": "helper-pass", "role": "support"}),
        )
        .await;
    let helper: AdminUser = read_data(response).await;

    let response = app
        .put(
            &format!("/admin/admins/{}", helper.id),
            Some(&owner),
            &json!({"role": "moderator", "password": "better-pass"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let token = app.login("helper@itzgen.test", "better-pass").await;
    let response = app.get("/admin/plans", Some(&token)).await;
    assert_eq!(200, response.status().as_u16());

    let response = app
        .delete(&format!("/admin/admins/{}", helper.id), Some(&owner))
        .await;
    assert_eq!(200, response.status().as_u16());
    let response = app.get("/admin/plans", Some(&token)).await;
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn dashboard_counts_users_and_money() {
    let app = spawn_app().await;
    let owner = app.main_admin_token().await;
    let mut payments = Vec::new();
    for plan in ["Go", "Pro"] {
        let (_, token) = app.new_user().await;
        let payment: Payment = read_data(
            app.post(
                "/payments",
                Some(&token),
                &json!({"plan_name": plan, "method": "bKash", "transaction_id": "T", "sender_number": "017"}),
            )
            .await,
        )
        .await;
        payments.push(payment);
    }
    app.new_user().await;

    let response = app
        .post(
            &format!("/admin/payments/{}/decision", payments[1].id),
            Some(&owner),
            &json!({"status": "APPROVED"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    let stats: DashboardStats = read_data(app.get("/admin/dashboard", Some(&owner)).await).await;
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.pending_payments, 1);
    assert_eq!(stats.total_revenue, BigDecimal::from(199));
}

#[tokio::test]
async fn gateway_crud() {
    let app = spawn_app().await;
    let owner = app.main_admin_token().await;

    let gateway: Gateway = read_data(
        app.post(
            "/admin/gateways",
            Some(&owner),
            &json!({"name": "Upay", "number": "01900000000"}),
        )
        .await,
    )
    .await;
    let response = app
        .post(
            "/admin/gateways",
            Some(&owner),
            &json!({"name": "upay", "number": "01900000001"}),
        )
        .await;
    assert_eq!(409, response.status().as_u16());

    let response = app
        .put(
            &format!("/admin/gateways/{}", gateway.id),
            Some(&owner),
            &json!({"name": "Upay", "number": "01911111111"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    let public: Vec<Gateway> = read_data(app.get("/gateways", None).await).await;
    assert_eq!(public.len(), 4);
    assert!(public
        .iter()
        .any(|g| g.name == "Upay" && g.number == "01911111111"));

    let response = app
        .delete(&format!("/admin/gateways/{}", gateway.id), Some(&owner))
        .await;
    assert_eq!(200, response.status().as_u16());
    let response = app
        .delete(&format!("/admin/gateways/{}", gateway.id), Some(&owner))
        .await;
    assert_eq!(404, response.status().as_u16());
    let public: Vec<Gateway> = read_data(app.get("/gateways", None).await).await;
    assert_eq!(public.len(), 3);
}

#[tokio::test]
async fn settings_update_checks_the_glow_plan() {
    let app = spawn_app().await;
    let owner = app.main_admin_token().await;
    let plans: Vec<Plan> = read_data(app.get("/plans", None).await).await;
    let pro = plans.iter().find(|p| p.name == PlanName::Pro).unwrap();

    let settings = |plan_id: Value, opacity: u32| {
        json!({
            "name": "ItzGen Studio",
            "logo": "https://cdn.itzgen.test/logo.png",
            "contact_email": "hello@itzgen.test",
            "plan_glow": {"enabled": true, "plan_id": plan_id, "color": "#ff00ff", "opacity": opacity}
        })
    };

    let response = app
        .put("/admin/settings", Some(&owner), &settings(json!(9999), 50))
        .await;
    assert_eq!(400, response.status().as_u16());
    let response = app
        .put("/admin/settings", Some(&owner), &settings(json!(pro.id), 101))
        .await;
    assert_eq!(400, response.status().as_u16());

    let response = app
        .put("/admin/settings", Some(&owner), &settings(json!(pro.id), 50))
        .await;
    assert_eq!(200, response.status().as_u16());
    assert_eq!(read_message(response).await, "settings updated");

    let public: SiteSettings = read_data(app.get("/settings", None).await).await;
    assert_eq!(public.name, "ItzGen Studio");
    assert!(public.plan_glow.enabled);
    assert_eq!(public.plan_glow.plan_id, Some(pro.id));
}

#[tokio::test]
async fn admin_manages_users() {
    let app = spawn_app().await;
    let owner = app.main_admin_token().await;
    let (user_id, token) = app.new_user().await;

    let response = app
        .put(
            &format!("/admin/users/{}", user_id),
            Some(&owner),
            &json!({"name": "Renamed", "plan": "Pro"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let user: User = read_data(
        app.get(&format!("/admin/users/{}", user_id), Some(&owner))
            .await,
    )
    .await;
    assert_eq!(user.name, "Renamed");
    assert_eq!(user.plan, PlanName::Pro);
    assert!(!user.is_banned);

    {
        let db = app.db.acquire().await;
        let stored = app.repo.get_user_by_id(&db, user_id).unwrap();
        assert_eq!(stored.plan, PlanName::Pro);
        assert_ne!(stored.password, "");
    }

    let users: Vec<User> = read_data(app.get("/admin/users", Some(&owner)).await).await;
    assert!(users.iter().any(|u| u.id == user_id));

    let response = app
        .get("/admin/users/555555", Some(&owner))
        .await;
    assert_eq!(404, response.status().as_u16());
    let response = app
        .post("/admin/users/555555/usage/reset", Some(&owner), &json!({}))
        .await;
    assert_eq!(404, response.status().as_u16());

    let response = app
        .put(
            &format!("/admin/users/{}", user_id),
            Some(&owner),
            &json!({"is_banned": true}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let response = app.get("/profile", Some(&token)).await;
    assert_eq!(403, response.status().as_u16());
}
