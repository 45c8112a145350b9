use bigdecimal::BigDecimal;
use serde_json::{json, Value};

use itzgen::repository::models::{Payment, PaymentStatus, PlanName, User};

use crate::helpers::{read_data, read_message, spawn_app};

fn plan_payment(plan: &str, method: &str) -> Value {
    json!({
        "plan_name": plan,
        "method": method,
        "transaction_id": "8N7A6B5C4D",
        "sender_number": "01712345678",
    })
}

#[tokio::test]
async fn approved_payment_upgrades_the_user() {
    let app = spawn_app().await;
    let (user_id, token) = app.new_user().await;
    let admin = app.main_admin_token().await;

    let response = app
        .post("/payments", Some(&token), &plan_payment("Plus", "bkash"))
        .await;
    assert_eq!(200, response.status().as_u16());
    let payment: Payment = read_data(response).await;
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.user_id, user_id);
    assert_eq!(payment.amount, BigDecimal::from(99));
    assert_eq!(payment.method, "bKash");

    // nothing changes until an admin looks at it
    let profile: User = read_data(app.get("/profile", Some(&token)).await).await;
    assert_eq!(profile.plan, PlanName::Free);

    let response = app
        .post(
            &format!("/admin/payments/{}/decision", payment.id),
            Some(&admin),
            &json!({"status": "APPROVED"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let decided: Payment = read_data(response).await;
    assert_eq!(decided.status, PaymentStatus::Approved);

    let profile: User = read_data(app.get("/profile", Some(&token)).await).await;
    assert_eq!(profile.plan, PlanName::Plus);

    let usage: Value = read_data(app.get("/usage", Some(&token)).await).await;
    assert_eq!(usage["remaining"]["image"], 35);
}

#[tokio::test]
async fn a_decided_payment_cannot_be_decided_again() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    let admin = app.main_admin_token().await;
    let payment: Payment = read_data(
        app.post("/payments", Some(&token), &plan_payment("Go", "Nagad"))
            .await,
    )
    .await;
    let decision = format!("/admin/payments/{}/decision", payment.id);

    let response = app
        .post(&decision, Some(&admin), &json!({"status": "REJECTED"}))
        .await;
    assert_eq!(200, response.status().as_u16());

    let response = app
        .post(&decision, Some(&admin), &json!({"status": "APPROVED"}))
        .await;
    assert_eq!(409, response.status().as_u16());

    let profile: User = read_data(app.get("/profile", Some(&token)).await).await;
    assert_eq!(profile.plan, PlanName::Free);
    let mine: Vec<Payment> = read_data(app.get("/payments", Some(&token)).await).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, PaymentStatus::Rejected);
}

#[tokio::test]
async fn decision_errors() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    let admin = app.main_admin_token().await;

    let response = app
        .post(
            "/admin/payments/987654/decision",
            Some(&admin),
            &json!({"status": "APPROVED"}),
        )
        .await;
    assert_eq!(404, response.status().as_u16());

    let payment: Payment = read_data(
        app.post("/payments", Some(&token), &plan_payment("Pro", "Rocket"))
            .await,
    )
    .await;
    let decision = format!("/admin/payments/{}/decision", payment.id);
    let response = app
        .post(&decision, Some(&admin), &json!({"status": "PENDING"}))
        .await;
    assert_eq!(400, response.status().as_u16());
    let response = app
        .post(&decision, Some(&admin), &json!({"status": "MAYBE"}))
        .await;
    assert_eq!(400, response.status().as_u16());

    // users cannot decide their own payments
    let response = app
        .post(&decision, Some(&token), &json!({"status": "APPROVED"}))
        .await;
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn submit_rejects_bad_claims() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;

    let test_cases = vec![
        (plan_payment("Free", "bKash"), "the free plan"),
        (plan_payment("Plus", "PayPal"), "an unknown method"),
        (plan_payment("Platinum", "bKash"), "an unknown plan"),
        (
            json!({"plan_name": "Go", "method": "bKash", "transaction_id": "", "sender_number": "017"}),
            "an empty transaction id",
        ),
        (json!({"plan_name": "Go"}), "missing fields"),
    ];
    for (body, msg) in test_cases {
        let response = app.post("/payments", Some(&token), &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "the api did not fail with 400 Bad Request when the payment names {}",
            msg
        );
    }
    let mine: Vec<Payment> = read_data(app.get("/payments", Some(&token)).await).await;
    assert!(mine.is_empty());

    let response = app
        .post("/payments", None, &plan_payment("Go", "bKash"))
        .await;
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn current_plan_cannot_be_bought_again() {
    let app = spawn_app().await;
    let (user_id, token) = app.new_user().await;
    let admin = app.main_admin_token().await;
    let response = app
        .put(
            &format!("/admin/users/{}", user_id),
            Some(&admin),
            &json!({"plan": "Go"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    let response = app
        .post("/payments", Some(&token), &plan_payment("Go", "bKash"))
        .await;
    assert_eq!(400, response.status().as_u16());
    assert_eq!(read_message(response).await, "you are already on the Go plan");
}

#[tokio::test]
async fn ultimate_plan_has_no_daily_cap() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    let admin = app.main_admin_token().await;
    app.mock_image_api_success().await;

    let payment: Payment = read_data(
        app.post("/payments", Some(&token), &plan_payment("Ultimate", "bKash"))
            .await,
    )
    .await;
    assert_eq!(payment.amount, BigDecimal::from(349));
    let response = app
        .post(
            &format!("/admin/payments/{}/decision", payment.id),
            Some(&admin),
            &json!({"status": "APPROVED"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    for _ in 0..4 {
        let response = app
            .post("/generations/thumbnail", Some(&token), &json!({"prompt": "banner"}))
            .await;
        assert_eq!(200, response.status().as_u16());
    }
    let usage: Value = read_data(app.get("/usage", Some(&token)).await).await;
    assert_eq!(usage["usage"]["thumbnail"], 4);
    assert!(usage["remaining"]["thumbnail"].is_null());
}
