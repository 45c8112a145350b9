use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, ResponseTemplate,
};

use itzgen::repository::models::{Generation, GenerationType};

use crate::helpers::{read_data, read_message, spawn_app};

#[tokio::test]
async fn text_image_is_generated_recorded_and_counted() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/imagen-4.0-generate-001:predict"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "instances": [{"prompt": "a lighthouse, Anime style"}],
            "parameters": {"aspectRatio": "9:16"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{"bytesBase64Encoded": "SU1H", "mimeType": "image/jpeg"}]
        })))
        .expect(1)
        .mount(&app.image_api)
        .await;

    let response = app
        .post(
            "/generations/image",
            Some(&token),
            &json!({"prompt": "a lighthouse", "style": "Anime", "aspect_ratio": "9:16"}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let generation: Generation = read_data(response).await;
    assert_eq!(generation.kind, GenerationType::Image);
    assert_eq!(generation.prompt, "a lighthouse");
    assert_eq!(generation.image_url, "data:image/jpeg;base64,SU1H");

    let usage: Value = read_data(app.get("/usage", Some(&token)).await).await;
    assert_eq!(usage["usage"]["image"], 1);
    assert_eq!(usage["remaining"]["image"], 4);

    let log: Vec<Generation> = read_data(app.get("/generations", Some(&token)).await).await;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].id, generation.id);
}

#[tokio::test]
async fn free_plan_is_exhausted_after_five_images() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    app.mock_image_api_success().await;

    for i in 0..5 {
        let response = app
            .post(
                "/generations/image",
                Some(&token),
                &json!({"prompt": format!("picture {}", i)}),
            )
            .await;
        assert_eq!(200, response.status().as_u16(), "generation {} failed", i);
    }

    let response = app
        .post("/generations/image", Some(&token), &json!({"prompt": "one more"}))
        .await;
    assert_eq!(429, response.status().as_u16());
    assert_eq!(
        read_message(response).await,
        "you have reached your daily limit for image generation"
    );

    let log: Vec<Generation> = read_data(app.get("/generations", Some(&token)).await).await;
    assert_eq!(log.len(), 5);
    assert_eq!(log[0].prompt, "picture 4");
    assert_eq!(log[4].prompt, "picture 0");

    // other kinds keep their own allowance
    let response = app
        .post("/generations/thumbnail", Some(&token), &json!({"prompt": "title card"}))
        .await;
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway_and_not_counted() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&app.image_api)
        .await;

    let response = app
        .post("/generations/image", Some(&token), &json!({"prompt": "a cat"}))
        .await;
    assert_eq!(502, response.status().as_u16());

    let usage: Value = read_data(app.get("/usage", Some(&token)).await).await;
    assert_eq!(usage["usage"]["image"], 0);
    let log: Vec<Generation> = read_data(app.get("/generations", Some(&token)).await).await;
    assert!(log.is_empty());
}

#[tokio::test]
async fn switch_sends_both_images_and_records_mode() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
        .and(body_partial_json(json!({
            "generationConfig": {"responseModalities": ["IMAGE"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [
                {"text": "here you go"},
                {"inlineData": {"mimeType": "image/png", "data": "UE5H"}}
            ]}}]
        })))
        .expect(1)
        .mount(&app.image_api)
        .await;

    let image = json!({"mime_type": "image/png", "data": "iVBORw0KGgo="});
    let response = app
        .post(
            "/generations/switch",
            Some(&token),
            &json!({
                "base_image": image,
                "user_image": image,
                "mode": "background",
                "prompt": "sunset",
            }),
        )
        .await;
    assert_eq!(200, response.status().as_u16());
    let generation: Generation = read_data(response).await;
    assert_eq!(generation.kind, GenerationType::Switch);
    assert_eq!(generation.prompt, "background: sunset");
    assert_eq!(generation.image_url, "data:image/png;base64,UE5H");
}

#[tokio::test]
async fn invalid_inputs_are_rejected_before_calling_out() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.image_api)
        .await;

    let test_cases = vec![
        ("/generations/image", json!({"prompt": ""}), "empty prompt"),
        (
            "/generations/image",
            json!({"prompt": "x", "aspect_ratio": "2:1"}),
            "unknown aspect ratio",
        ),
        (
            "/generations/thumbnail",
            json!({"prompt": "x", "reference_image": {"mime_type": "image/png", "data": "not base64!"}}),
            "broken reference image",
        ),
        (
            "/generations/switch",
            json!({"base_image": {"mime_type": "image/png", "data": "iVBORw0KGgo="}}),
            "missing user image",
        ),
    ];
    for (path, body, msg) in test_cases {
        let response = app.post(path, Some(&token), &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "the api did not fail with 400 Bad Request when the payload has the problem {}",
            msg
        );
    }
}

#[tokio::test]
async fn admin_reset_reopens_the_quota() {
    let app = spawn_app().await;
    let (user_id, token) = app.new_user().await;
    let admin = app.main_admin_token().await;
    app.mock_image_api_success().await;

    for _ in 0..2 {
        let response = app
            .post("/generations/thumbnail", Some(&token), &json!({"prompt": "t"}))
            .await;
        assert_eq!(200, response.status().as_u16());
    }
    let response = app
        .post("/generations/thumbnail", Some(&token), &json!({"prompt": "t"}))
        .await;
    assert_eq!(429, response.status().as_u16());

    let response = app
        .post(
            &format!("/admin/users/{}/usage/reset", user_id),
            Some(&admin),
            &json!({}),
        )
        .await;
    assert_eq!(200, response.status().as_u16());

    let response = app
        .post("/generations/thumbnail", Some(&token), &json!({"prompt": "t"}))
        .await;
    assert_eq!(200, response.status().as_u16());
    let log: Vec<Generation> = read_data(app.get("/generations", Some(&token)).await).await;
    assert_eq!(log.len(), 3);
}

#[tokio::test]
async fn oversized_upload_is_refused() {
    let app = spawn_app().await;
    let (_, token) = app.new_user().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.image_api)
        .await;

    // two 40KB images against the 64KB test limit
    let data = "A".repeat(40 * 1024);
    let image = json!({"mime_type": "image/png", "data": data});
    let response = app
        .post(
            "/generations/switch",
            Some(&token),
            &json!({"base_image": image, "user_image": image, "mode": "merge"}),
        )
        .await;
    assert_eq!(413, response.status().as_u16());

    let usage: Value = read_data(app.get("/usage", Some(&token)).await).await;
    assert_eq!(usage["usage"]["switch"], 0);
}
