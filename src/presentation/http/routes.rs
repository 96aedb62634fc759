// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, dp_configurations},
    middleware::rate_limit::AuthRateLimitLayer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router without rate limiting and with permissive CORS.
pub fn build_router(state: HttpState) -> Router {
    build_router_with(state, RouterOptions::default())
}

/// Knobs applied around the route table.
#[derive(Default)]
pub struct RouterOptions {
    /// Exact origins allowed by CORS; empty means any origin.
    pub allowed_origins: Vec<String>,
    /// Applied to register and login only.
    pub auth_rate_limit: Option<AuthRateLimitLayer>,
}

pub fn build_router_with(state: HttpState, options: RouterOptions) -> Router {
    let mut credential_routes = Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login));
    if let Some(limiter) = options.auth_rate_limit {
        credential_routes = credential_routes.layer(limiter);
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(credential_routes)
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/auth/keys", get(auth::public_keys))
        .route(
            "/api/v1/dp-configurations",
            get(dp_configurations::list_public_dp_configurations)
                .post(dp_configurations::create_dp_configuration),
        )
        .route(
            "/api/v1/me/dp-configurations",
            get(dp_configurations::list_my_dp_configurations),
        )
        .route(
            "/api/v1/dp-configurations/{slug}",
            get(dp_configurations::get_dp_configuration_by_slug),
        )
        .route(
            "/api/v1/dp-configurations/{slug}/render",
            get(dp_configurations::render_dp_configuration),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::HEAD, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::IF_NONE_MATCH,
        ])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
