use crate::application::ports::media::RenderedUrls;
use crate::domain::dp_configuration::{DpConfiguration, Radius};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Wire shape of a stored configuration. Field names follow the camelCase
/// used by browser clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DpConfigurationDto {
    pub id: i64,
    pub slug: String,
    pub main_image_id: String,
    pub logo_image_id: String,
    pub width: i32,
    pub height: i32,
    pub x_pos: i32,
    pub y_pos: i32,
    /// Pixel radius, or `"max"` for a fully rounded overlay.
    #[schema(value_type = String, example = "max")]
    pub radius: Radius,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    pub is_public: bool,
    pub owner_id: i64,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<DpConfiguration> for DpConfigurationDto {
    fn from(value: DpConfiguration) -> Self {
        Self {
            id: value.id.into(),
            slug: value.slug.into_inner(),
            main_image_id: value.main_image_id.into_inner(),
            logo_image_id: value.logo_image_id.into_inner(),
            width: value.placement.width(),
            height: value.placement.height(),
            x_pos: value.placement.x(),
            y_pos: value.placement.y(),
            radius: value.radius,
            template_name: value.template_name.map(|name| name.into_inner()),
            is_public: value.is_public,
            owner_id: value.owner_id.into(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DpRenderDto {
    pub slug: String,
    /// 500x500 preview.
    pub display_url: String,
    /// 1080x1080 attachment download named after the slug.
    pub download_url: String,
}

impl DpRenderDto {
    pub fn new(slug: impl Into<String>, urls: RenderedUrls) -> Self {
        Self {
            slug: slug.into(),
            display_url: urls.display_url,
            download_url: urls.download_url,
        }
    }
}
