// src/presentation/http/openapi/mod.rs
mod etag;
mod handlers;

use crate::application::dto::DpConfigurationDto;
use axum::{Router, response::Redirect, routing::get};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path, sync::OnceLock, time::SystemTime};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/openapi.json";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Schema twin of `CursorPage<DpConfigurationDto>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DpConfigurationListResponse {
    pub items: Vec<DpConfigurationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::auth::public_keys,
        crate::presentation::http::controllers::dp_configurations::create_dp_configuration,
        crate::presentation::http::controllers::dp_configurations::list_public_dp_configurations,
        crate::presentation::http::controllers::dp_configurations::list_my_dp_configurations,
        crate::presentation::http::controllers::dp_configurations::get_dp_configuration_by_slug,
        crate::presentation::http::controllers::dp_configurations::render_dp_configuration,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            DpConfigurationListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::dp_configurations::CreateDpConfigurationRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::DpConfigurationDto,
            crate::application::dto::DpRenderDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and token endpoints"),
        (name = "DP Configurations", description = "Shareable display picture templates"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "DP Studio API",
        description = "Display picture templates with shareable slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Serialized document plus its validators, computed once per process.
pub(crate) struct OpenApiDocument {
    pub(crate) body: Bytes,
    pub(crate) etag: String,
    pub(crate) last_modified: String,
}

pub(crate) fn document() -> &'static OpenApiDocument {
    static DOCUMENT: OnceLock<OpenApiDocument> = OnceLock::new();
    DOCUMENT.get_or_init(|| {
        let body = match serde_json::to_vec(&ApiDoc::openapi()) {
            Ok(bytes) => Bytes::from(bytes),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize openapi document");
                Bytes::new()
            }
        };
        let etag = etag::compute_etag(&body);
        OpenApiDocument {
            body,
            etag,
            last_modified: httpdate::fmt_http_date(SystemTime::now()),
        }
    })
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs");
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route(
            OPENAPI_PATH,
            get(handlers::serve_openapi).head(handlers::head_openapi),
        )
        .merge(swagger.config(utoipa_swagger_ui::Config::from(OPENAPI_PATH)))
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let openapi = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &openapi)?;
    Ok(())
}
