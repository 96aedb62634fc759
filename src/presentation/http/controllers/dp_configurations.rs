// src/presentation/http/controllers/dp_configurations.rs
use crate::application::{
    commands::dp_configurations::CreateDpConfigurationCommand,
    dto::{CursorPage, DpConfigurationDto, DpRenderDto},
    queries::dp_configurations::{GetDpConfigurationBySlugQuery, ListDpConfigurationsQuery},
};
use crate::domain::dp_configuration::Radius;
use crate::presentation::http::error::{
    ErrorResponse, HttpError, HttpResult, IntoHttpResult,
};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::DpConfigurationListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDpConfigurationRequest {
    pub main_image_id: String,
    /// Falls back to the server's default logo when omitted.
    #[serde(default)]
    pub logo_image_id: Option<String>,
    pub width: i32,
    pub height: i32,
    pub x_pos: i32,
    pub y_pos: i32,
    /// A pixel count (number or numeric string) or `"max"`.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "max")]
    pub radius: Option<Radius>,
    #[serde(default)]
    pub template_name: Option<String>,
    /// Preferred slug. Sanitized, and suffixed with `-N` if taken.
    #[serde(default)]
    pub custom_slug: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
}

impl From<CreateDpConfigurationRequest> for CreateDpConfigurationCommand {
    fn from(request: CreateDpConfigurationRequest) -> Self {
        Self {
            main_image_id: request.main_image_id,
            logo_image_id: request.logo_image_id,
            width: request.width,
            height: request.height,
            x_pos: request.x_pos,
            y_pos: request.y_pos,
            radius: request.radius,
            template_name: request.template_name,
            custom_slug: request.custom_slug,
            is_public: request.is_public,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DpConfigurationListParams {
    /// Page size, 1 to 100. Defaults to 20.
    #[serde(default)]
    pub limit: u32,
    /// Opaque token from a previous page.
    #[serde(default)]
    pub cursor: Option<String>,
}

impl From<DpConfigurationListParams> for ListDpConfigurationsQuery {
    fn from(params: DpConfigurationListParams) -> Self {
        Self {
            limit: params.limit,
            cursor: params.cursor,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/dp-configurations",
    request_body = CreateDpConfigurationRequest,
    responses(
        (status = 201, description = "Configuration stored under its final slug.", body = DpConfigurationDto),
        (status = 400, description = "Invalid field values.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 409, description = "Slug claimed by a concurrent request.", body = ErrorResponse),
        (status = 500, description = "No free slug could be found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "DP Configurations"
)]
pub async fn create_dp_configuration(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    payload: Result<Json<CreateDpConfigurationRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<DpConfigurationDto>)> {
    let Json(payload) = payload.map_err(HttpError::from_json_rejection)?;

    let created = state
        .services
        .dp_commands
        .create_configuration(&user, payload.into())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/dp-configurations",
    params(DpConfigurationListParams),
    responses(
        (status = 200, description = "Public configurations, newest first.", body = DpConfigurationListResponse),
        (status = 400, description = "Malformed cursor.", body = ErrorResponse)
    ),
    tag = "DP Configurations"
)]
pub async fn list_public_dp_configurations(
    Extension(state): Extension<HttpState>,
    Query(params): Query<DpConfigurationListParams>,
) -> HttpResult<Json<CursorPage<DpConfigurationDto>>> {
    state
        .services
        .dp_queries
        .list_public(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/me/dp-configurations",
    params(DpConfigurationListParams),
    responses(
        (status = 200, description = "The caller's configurations, private ones included.", body = DpConfigurationListResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "DP Configurations"
)]
pub async fn list_my_dp_configurations(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<DpConfigurationListParams>,
) -> HttpResult<Json<CursorPage<DpConfigurationDto>>> {
    state
        .services
        .dp_queries
        .list_mine(&user, params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/dp-configurations/{slug}",
    params(("slug" = String, Path, description = "Configuration slug")),
    responses(
        (status = 200, description = "The configuration.", body = DpConfigurationDto),
        (status = 404, description = "Unknown slug, or private and not visible to the caller.", body = ErrorResponse)
    ),
    tag = "DP Configurations"
)]
pub async fn get_dp_configuration_by_slug(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<DpConfigurationDto>> {
    state
        .services
        .dp_queries
        .get_by_slug(user.as_ref(), GetDpConfigurationBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/dp-configurations/{slug}/render",
    params(("slug" = String, Path, description = "Configuration slug")),
    responses(
        (status = 200, description = "CDN URLs of the composited image.", body = DpRenderDto),
        (status = 404, description = "Unknown slug, or private and not visible to the caller.", body = ErrorResponse)
    ),
    tag = "DP Configurations"
)]
pub async fn render_dp_configuration(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<DpRenderDto>> {
    state
        .services
        .dp_queries
        .render_urls(user.as_ref(), GetDpConfigurationBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
