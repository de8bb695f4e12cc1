mod common;

use axum::http::{StatusCode, header};
use common::{MultipartBody, Reply, ScriptedBackend, TestApp, body_json, body_text};
use oc_core::types::turn::Turn;
use serde_json::json;

#[tokio::test]
async fn streams_fragments_and_commits_both_turns() {
    let app = TestApp::new(ScriptedBackend::new());
    app.backend.reply(Reply::Fragments(vec!["Hi", " there"]));

    let response = app
        .post_json(
            "/api/chat",
            json!({"message": "Hello", "modelId": "m1", "sessionId": "s1"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "Hi there");
    assert_eq!(
        app.history("s1"),
        vec![Turn::user("Hello"), Turn::assistant("Hi there")]
    );
}

#[tokio::test]
async fn second_message_carries_prior_turns_as_context() {
    let app = TestApp::new(ScriptedBackend::new());
    app.backend.reply(Reply::Fragments(vec!["Hi", " there"]));
    app.backend.reply(Reply::Fragments(vec!["Fine", ", thanks"]));

    let first = app
        .post_json(
            "/api/chat",
            json!({"message": "Hello", "modelId": "m1", "sessionId": "s1"}),
        )
        .await;
    assert_eq!(body_text(first).await, "Hi there");

    let second = app
        .post_json(
            "/api/chat",
            json!({"message": "How are you?", "modelId": "m1", "sessionId": "s1"}),
        )
        .await;
    assert_eq!(body_text(second).await, "Fine, thanks");

    let calls = app.backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].messages, vec![Turn::user("Hello")]);
    assert_eq!(
        calls[1].messages,
        vec![
            Turn::user("Hello"),
            Turn::assistant("Hi there"),
            Turn::user("How are you?"),
        ]
    );
    assert_eq!(
        app.history("s1"),
        vec![
            Turn::user("Hello"),
            Turn::assistant("Hi there"),
            Turn::user("How are you?"),
            Turn::assistant("Fine, thanks"),
        ]
    );
}

#[tokio::test]
async fn sessions_do_not_share_history() {
    let app = TestApp::new(ScriptedBackend::new());

    for session in ["a", "b"] {
        let response = app
            .post_json(
                "/api/chat",
                json!({"message": session, "modelId": "m1", "sessionId": session}),
            )
            .await;
        body_text(response).await;
    }

    assert_eq!(app.backend.calls()[1].messages, vec![Turn::user("b")]);
    assert_eq!(app.history("a").len(), 2);
    assert_eq!(app.history("b").len(), 2);
}

#[tokio::test]
async fn absent_parameters_take_defaults() {
    let app = TestApp::new(ScriptedBackend::new());

    let response = app
        .post_json("/api/chat", json!({"message": "Hello", "modelId": "m1"}))
        .await;
    assert_eq!(body_text(response).await, "ok");

    let calls = app.backend.calls();
    let call = &calls[0];
    assert_eq!(call.connection.model_id, "m1");
    assert_eq!(call.connection.options.temperature, 0.1);
    assert_eq!(call.connection.options.top_p, 0.5);
    assert_eq!(call.connection.options.max_tokens, 1024);
    assert!(call.connection.images.is_empty());
    assert_eq!(app.history("default").len(), 2);
}

#[tokio::test]
async fn explicit_parameters_are_forwarded() {
    let app = TestApp::new(ScriptedBackend::new());

    let response = app
        .post_json(
            "/api/chat",
            json!({
                "message": "Hello",
                "modelId": "llama3:8b",
                "temperature": 0.7,
                "topP": 0.95,
                "maxTokens": 256,
                "sessionId": "s1"
            }),
        )
        .await;
    body_text(response).await;

    let options = app.backend.calls()[0].connection.options;
    assert_eq!(options.temperature, 0.7);
    assert_eq!(options.top_p, 0.95);
    assert_eq!(options.max_tokens, 256);
}

#[tokio::test]
async fn missing_fields_are_rejected_without_side_effects() {
    let app = TestApp::new(ScriptedBackend::new());

    for body in [
        json!({"modelId": "m1", "sessionId": "s1"}),
        json!({"message": "", "modelId": "m1", "sessionId": "s1"}),
        json!({"message": "Hello", "sessionId": "s1"}),
    ] {
        let response = app.post_json("/api/chat", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Missing required fields");
    }

    assert!(app.backend.calls().is_empty());
    assert!(app.history("s1").is_empty());
}

#[tokio::test]
async fn malformed_body_is_an_internal_error() {
    let app = TestApp::new(ScriptedBackend::new());

    let response = app
        .send(
            axum::http::Request::post("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal server error");
}

#[tokio::test]
async fn backend_failure_before_streaming_is_a_plain_server_error() {
    let app = TestApp::new(ScriptedBackend::new());
    app.backend
        .reply(Reply::FailToOpen("model 'ghost' not found"));

    let response = app
        .post_json(
            "/api/chat",
            json!({"message": "Hello", "modelId": "ghost", "sessionId": "s1"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal server error");
    assert!(app.history("s1").is_empty());
}

#[tokio::test]
async fn failure_mid_stream_aborts_body_and_keeps_only_the_user_turn() {
    let app = TestApp::new(ScriptedBackend::new());
    app.backend
        .reply(Reply::FailAfter(vec!["Partial", " answer"], "runner crashed"));

    let response = app
        .post_json(
            "/api/chat",
            json!({"message": "Hello", "modelId": "m1", "sessionId": "s1"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await;
    assert!(body.is_err());
    assert_eq!(app.history("s1"), vec![Turn::user("Hello")]);
}

#[tokio::test]
async fn multimodal_binds_only_image_attachments() {
    let app = TestApp::new(ScriptedBackend::new());
    app.backend.reply(Reply::Fragments(vec!["A ", "cat"]));

    let form = MultipartBody::new()
        .text("message", "What is in this picture?")
        .text("modelId", "llava:7b")
        .text("temperature", "0.3")
        .text("topP", "")
        .text("maxTokens", "lots")
        .text("sessionId", "s1")
        .file("files", "cat.png", "image/png", b"\x89PNG")
        .file("files", "notes.txt", "text/plain", b"not an image");
    let response = app.post_multipart("/api/chat-multimodal", form).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "A cat");

    let calls = app.backend.calls();
    let call = &calls[0];
    assert_eq!(call.connection.images, vec!["iVBORw==".to_string()]);
    assert_eq!(call.connection.options.temperature, 0.3);
    assert_eq!(call.connection.options.top_p, 0.5);
    assert_eq!(call.connection.options.max_tokens, 1024);
    assert_eq!(
        call.messages,
        vec![Turn::user("What is in this picture?")]
    );
    assert_eq!(
        app.history("s1"),
        vec![
            Turn::user("What is in this picture?"),
            Turn::assistant("A cat")
        ]
    );
}

#[tokio::test]
async fn multimodal_without_images_falls_back_to_text() {
    let app = TestApp::new(ScriptedBackend::new());

    let form = MultipartBody::new()
        .text("message", "Summarise")
        .text("modelId", "m1")
        .file("files", "notes.txt", "text/plain", b"words");
    let response = app.post_multipart("/api/chat-multimodal", form).await;

    assert_eq!(body_text(response).await, "ok");
    let calls = app.backend.calls();
    let call = &calls[0];
    assert!(call.connection.images.is_empty());
    assert_eq!(app.history("default").len(), 2);
}

#[tokio::test]
async fn multimodal_missing_model_is_rejected() {
    let app = TestApp::new(ScriptedBackend::new());

    let form = MultipartBody::new()
        .text("message", "Hello")
        .file("files", "cat.png", "image/png", b"\x89PNG");
    let response = app.post_multipart("/api/chat-multimodal", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Missing required fields");
    assert!(app.backend.calls().is_empty());
}

#[tokio::test]
async fn history_endpoint_exposes_turns() {
    let app = TestApp::new(ScriptedBackend::new());
    app.backend.reply(Reply::Fragments(vec!["Hi"]));
    let response = app
        .post_json(
            "/api/chat",
            json!({"message": "Hello", "modelId": "m1", "sessionId": "s1"}),
        )
        .await;
    body_text(response).await;

    let response = app.get("/api/history/s1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "sessionId": "s1",
            "turns": [
                {"role": "user", "content": "Hello"},
                {"role": "assistant", "content": "Hi"}
            ]
        })
    );
}
