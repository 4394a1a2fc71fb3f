//! Integration tests for the reqwest transport against a stub panel server.
//!
//! Each test binds a real axum server on an ephemeral port and drives the
//! transport over TCP, asserting the wire format the original dispatch
//! endpoint expects: a POST form field `json` holding `[name, [], kwargs]`.

use std::net::SocketAddr;

use axum::Form;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use serde::Deserialize;

use housepanel_adapter_http_reqwest::ReqwestTransport;
use housepanel_app::ports::Transport;
use housepanel_domain::call::RemoteCall;
use housepanel_domain::error::PanelError;

#[derive(Deserialize)]
struct ApiForm {
    json: String,
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn should_post_wire_triple_and_return_body() {
    let addr = serve(Router::new().route(
        "/api",
        post(|Form(form): Form<ApiForm>| async move {
            assert_eq!(
                form.json,
                r#"["press_remote",[],{"button":"power","device":"tv"}]"#
            );
            "null"
        }),
    ))
    .await;

    let transport = ReqwestTransport::new();
    let body = transport
        .send(
            format!("http://{addr}/api"),
            RemoteCall::press_remote("tv", "power"),
        )
        .await
        .expect("call should succeed");

    assert_eq!(body, "null");
}

#[tokio::test]
async fn should_pass_response_body_through_verbatim() {
    let addr = serve(Router::new().route(
        "/api",
        post(|| async { r#"{"scenes": ["movie night"]}"# }),
    ))
    .await;

    let transport = ReqwestTransport::new();
    let body = transport
        .send(
            format!("http://{addr}/api"),
            RemoteCall::set_light_scene("movie night"),
        )
        .await
        .unwrap();

    assert_eq!(body, r#"{"scenes": ["movie night"]}"#);
}

#[tokio::test]
async fn should_report_non_2xx_with_endpoint_and_body() {
    let addr = serve(Router::new().route(
        "/api",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Traceback (most recent call last): boom",
            )
        }),
    ))
    .await;

    let endpoint = format!("http://{addr}/api");
    let transport = ReqwestTransport::new();
    let err = transport
        .send(endpoint.clone(), RemoteCall::turn_on_switch("fan"))
        .await
        .expect_err("a 500 should be reported");

    match &err {
        PanelError::Transport {
            endpoint: reported,
            body,
            ..
        } => {
            assert_eq!(*reported, endpoint);
            assert_eq!(body.as_deref(), Some("Traceback (most recent call last): boom"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let alert = err.alert_message();
    assert!(alert.contains(&endpoint));
    assert!(alert.contains("500"));
    assert!(alert.contains("Traceback"));
}

#[tokio::test]
async fn should_report_connect_failure_without_body() {
    // nothing listens on this port
    let endpoint = "http://127.0.0.1:1/api".to_string();

    let transport = ReqwestTransport::new();
    let err = transport
        .send(endpoint.clone(), RemoteCall::new("ping"))
        .await
        .expect_err("connect should fail");

    match err {
        PanelError::Transport { endpoint: reported, body, .. } => {
            assert_eq!(reported, endpoint);
            assert_eq!(body, None);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
