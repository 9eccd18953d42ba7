use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::debug;
use webapp_config::{CorsSettings, Middleware};

use crate::settings::Settings;

pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");

const X_CSRFTOKEN: HeaderName = HeaderName::from_static("x-csrftoken");
const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");
const DNT: HeaderName = HeaderName::from_static("dnt");

pub fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::DELETE,
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            header::ACCEPT,
            header::ACCEPT_ENCODING,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            DNT,
            header::ORIGIN,
            header::USER_AGENT,
            X_CSRFTOKEN,
            X_REQUESTED_WITH,
        ])
}

/// Mount the configured middleware stack on `router`.
///
/// The first entry of the stack ends up outermost, so it sees the request
/// first and the response last. Entries the host framework provides
/// (sessions, CSRF, static files and so on) have no layer here.
pub fn apply_middleware<S>(router: Router<S>, settings: &Settings) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    settings
        .middleware
        .iter()
        .rev()
        .fold(router, |router, middleware| match middleware {
            Middleware::Cors => router.layer(cors_layer(&settings.cors)),
            Middleware::Security => router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("same-origin"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    CROSS_ORIGIN_OPENER_POLICY,
                    HeaderValue::from_static("same-origin"),
                )),
            Middleware::XFrameOptions => router.layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            )),
            other => {
                debug!(middleware = other.path(), "Provided by host framework, skipping");
                router
            }
        })
}

