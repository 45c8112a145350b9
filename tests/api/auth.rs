use serde_json::{json, Value};

use itzgen::repository::models::User;

use crate::helpers::{read_data, read_message, spawn_app, unique_email, USER_PASSWORD};

#[tokio::test]
async fn register_invalid_inputs() {
    let app = spawn_app().await;
    let test_cases = vec![
        (
            json!({"name": "a", "email": "invalid", "password": "12345678", "confirm_password": "12345678"}),
            "invalid email",
        ),
        (
            json!({"name": "a", "email": "a@test.test", "password": "1234567", "confirm_password": "1234567"}),
            "password with less than 8 character",
        ),
        (
            json!({"name": "", "email": "a@test.test", "password": "12345678", "confirm_password": "12345678"}),
            "empty name",
        ),
        (
            json!({"name": "a", "email": "a@test.test", "password": "12345678"}),
            "empty confirm_password",
        ),
        (
            json!({"name": "a", "email": "a@test.test", "password": "12345678", "confirm_password": "123456789"}),
            "confirm_password not the same as password",
        ),
    ];

    for (body, msg) in test_cases {
        let response = app.post("/auth/register", None, &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "the api did not fail with 400 Bad Request when the payload has the problem {}",
            msg
        );
    }
}

#[tokio::test]
async fn register_duplicate_email_is_rejected() {
    let app = spawn_app().await;
    let email = unique_email();
    let body = json!({
        "name": "Nadia",
        "email": email,
        "password": USER_PASSWORD,
        "confirm_password": USER_PASSWORD,
    });
    let response = app.post("/auth/register", None, &body).await;
    assert_eq!(200, response.status().as_u16());

    let response = app.post("/auth/register", None, &body).await;
    assert_eq!(422, response.status().as_u16());
    assert_eq!(read_message(response).await, "email already exist");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let app = spawn_app().await;
    let response = app
        .post(
            "/auth/login",
            None,
            &json!({"email": "nobody@test.test", "password": "whatever1"}),
        )
        .await;
    assert_eq!(401, response.status().as_u16());
    assert_eq!(read_message(response).await, "invalid credentials");
}

#[tokio::test]
async fn admin_login_reports_account_type() {
    let app = spawn_app().await;
    let response = app
        .post(
            "/auth/login",
            None,
            &json!({"email": crate::helpers::ADMIN_EMAIL, "password": crate::helpers::ADMIN_PASSWORD}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let data: Value = read_data(response).await;
    assert_eq!(data["account_type"], "admin");
}

#[tokio::test]
async fn admin_and_user_emails_do_not_overlap() {
    let app = spawn_app().await;
    let response = app
        .post(
            "/auth/register",
            None,
            &json!({
                "name": "Impostor",
                "email": crate::helpers::ADMIN_EMAIL,
                "password": USER_PASSWORD,
                "confirm_password": USER_PASSWORD,
            }),
        )
        .await;
    assert_eq!(422, response.status().as_u16());

    let response = app
        .post(
            "/auth/login",
            None,
            &json!({"email": crate::helpers::ADMIN_EMAIL, "password": USER_PASSWORD}),
        )
        .await;
    assert_eq!(401, response.status().as_u16());
    assert_eq!(read_message(response).await, "invalid credentials");

    let email = unique_email();
    let response = app
        .post(
            "/auth/register",
            None,
            &json!({
                "name": "Customer",
                "email": email,
                "password": USER_PASSWORD,
                "confirm_password": USER_PASSWORD,
            }),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let owner = app.main_admin_token().await;
    let response = app
        .post(
            "/admin/admins",
            Some(&owner),
            &json!({"name": "Staff", "email": email, "password": "staff-password", "role": "support"}),
        )
        .await;
    assert_eq!(422, response.status().as_u16());

    let response = app
        .post(
            "/auth/login",
            None,
            &json!({"email": email, "password": USER_PASSWORD}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let data: Value = read_data(response).await;
    assert_eq!(data["account_type"], "user");
}

#[tokio::test]
async fn profile_requires_a_user_token() {
    let app = spawn_app().await;
    let response = app.get("/profile", None).await;
    assert_eq!(401, response.status().as_u16());

    let admin = app.main_admin_token().await;
    let response = app.get("/profile", Some(&admin)).await;
    assert_eq!(401, response.status().as_u16());

    let (id, token) = app.new_user().await;
    let response = app.get("/profile", Some(&token)).await;
    assert_eq!(200, response.status().as_u16());
    let user: Value = read_data(response).await;
    assert_eq!(user["id"].as_i64(), Some(id));
    assert_eq!(user["plan"], "Free");
    assert!(user.get("password").is_none());
}

#[tokio::test]
async fn profile_name_and_password_can_be_changed() {
    let app = spawn_app().await;
    let (id, token) = app.new_user().await;

    let response = app
        .put("/profile/name", Some(&token), &json!({"name": "Renamed"}))
        .await;
    assert_eq!(200, response.status().as_u16());

    let response = app
        .put(
            "/profile/password",
            Some(&token),
            &json!({
                "old_password": "not-my-password",
                "new_password": "brand-new-pass",
                "confirm_password": "brand-new-pass",
            }),
        )
        .await;
    assert_eq!(400, response.status().as_u16());

    let response = app
        .put(
            "/profile/password",
            Some(&token),
            &json!({
                "old_password": USER_PASSWORD,
                "new_password": "brand-new-pass",
                "confirm_password": "brand-new-pass",
            }),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    let tx = app.db.acquire().await;
    let user: User = app.repo.get_user_by_id(&tx, id).unwrap();
    assert_eq!(user.name, "Renamed");
    assert!(bcrypt::verify("brand-new-pass", &user.password).unwrap());
}

#[tokio::test]
async fn banned_user_is_locked_out() {
    let app = spawn_app().await;
    let (id, token) = app.new_user().await;
    let admin = app.main_admin_token().await;

    let response = app
        .put(
            &format!("/admin/users/{}", id),
            Some(&admin),
            &json!({"is_banned": true}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    let response = app.get("/usage", Some(&token)).await;
    assert_eq!(403, response.status().as_u16());
    assert_eq!(read_message(response).await, "your account has been banned");
}
