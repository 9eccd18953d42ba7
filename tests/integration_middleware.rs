mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode, header};
use axum::routing::get;
use common::{full_env, project_dir, resolver};
use tower::ServiceExt;
use webapp::router::{CROSS_ORIGIN_OPENER_POLICY, apply_middleware, cors_layer};
use webapp::state::AppState;
use webapp::webapp_config::{CorsSettings, Middleware, MiddlewareStack};

async fn site_domain(State(state): State<AppState>) -> String {
    state.settings.site.domain.clone()
}

fn setup_test_app() -> Router {
    let dir = project_dir();
    let settings = resolver(dir.path()).resolve(full_env()).unwrap();
    app_with(settings)
}

fn app_with(settings: webapp::Settings) -> Router {
    let state = AppState::new(Arc::new(settings));
    let router = Router::new()
        .route("/site", get(site_domain))
        .with_state(state.clone());
    apply_middleware(router, &state.settings)
}

#[tokio::test]
async fn test_state_reaches_handlers() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/site").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/site").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::REFERRER_POLICY], "same-origin");
    assert_eq!(headers[CROSS_ORIGIN_OPENER_POLICY], "same-origin");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::get("/site")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::get("/site")
                .header(header::ORIGIN, "https://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/site")
                .header(header::ORIGIN, "https://app.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("PATCH"));
}

#[tokio::test]
async fn test_stack_without_security_entries() {
    let dir = project_dir();
    let mut settings = resolver(dir.path()).resolve(full_env()).unwrap();
    settings.middleware = MiddlewareStack::new(vec![Middleware::Common, Middleware::Sessions]);
    let app = app_with(settings);

    let response = app
        .oneshot(Request::get("/site").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::X_FRAME_OPTIONS).is_none());
    assert!(response.headers().get(header::X_CONTENT_TYPE_OPTIONS).is_none());
}

#[tokio::test]
async fn test_cors_layer_skips_unparsable_origins() {
    let cors = CorsSettings {
        allowed_origins: vec!["bad\norigin".into(), "http://localhost:3000".into()],
    };
    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(cors_layer(&cors));

    let response = app
        .oneshot(
            Request::get("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}
