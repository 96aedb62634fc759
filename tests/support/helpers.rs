// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use dp_studio::application::ports::{
    media::ImageUrlBuilder,
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::RandomIdGenerator,
};
use dp_studio::application::services::{ApplicationServices, ServiceDependencies};
use dp_studio::domain::dp_configuration::{
    DpConfigurationReadRepository, DpConfigurationWriteRepository,
};
use dp_studio::domain::user::UserRepository;
use dp_studio::infrastructure::media::CloudinaryUrlBuilder;
use dp_studio::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_LOGO: &str = "dp/logos/default";

/// Everything a test may want to inspect after driving the services.
pub struct TestContext {
    pub dp_repo: Arc<mocks::InMemoryDpRepository>,
    pub user_repo: Arc<mocks::InMemoryUserRepo>,
    pub ids: Arc<mocks::SequenceIdGenerator>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_repo(mocks::InMemoryDpRepository::default())
    }

    pub fn with_repo(dp_repo: mocks::InMemoryDpRepository) -> Self {
        Self::build(
            Arc::new(dp_repo),
            Arc::new(mocks::SequenceIdGenerator::repeating("k3x9m2q7ab")),
            Some(DEFAULT_LOGO.to_string()),
        )
    }

    pub fn build(
        dp_repo: Arc<mocks::InMemoryDpRepository>,
        ids: Arc<mocks::SequenceIdGenerator>,
        default_logo_image_id: Option<String>,
    ) -> Self {
        let user_repo = Arc::new(mocks::InMemoryUserRepo::default());
        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            user_repo: Arc::clone(&user_repo) as Arc<dyn UserRepository>,
            dp_write_repo: Arc::clone(&dp_repo) as Arc<dyn DpConfigurationWriteRepository>,
            dp_read_repo: Arc::clone(&dp_repo) as Arc<dyn DpConfigurationReadRepository>,
            password_hasher: Arc::new(mocks::StrictPasswordHasher) as Arc<dyn PasswordHasher>,
            token_manager: Arc::new(mocks::DummyTokenManager) as Arc<dyn TokenManager>,
            clock: Arc::new(mocks::FixedClock) as Arc<dyn Clock>,
            id_generator: Arc::clone(&ids) as Arc<dyn RandomIdGenerator>,
            url_builder: Arc::new(CloudinaryUrlBuilder::new("demo")) as Arc<dyn ImageUrlBuilder>,
            default_logo_image_id,
        }));
        Self {
            dp_repo,
            user_repo,
            ids,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState::new(Arc::clone(&self.services)))
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// Assert an `ErrorResponse` body with the given status.
pub async fn assert_error(resp: axum::response::Response, expected: StatusCode) -> Value {
    assert_eq!(resp.status(), expected);
    let value = json_body(resp).await;
    assert!(value.get("error").is_some(), "missing error field: {value}");
    assert!(value.get("message").is_some(), "missing message field: {value}");
    value
}
