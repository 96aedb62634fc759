// src/domain/dp_configuration/entity.rs
use crate::domain::dp_configuration::value_objects::{
    DpConfigurationId, DpSlug, ImageId, OverlayPlacement, Radius, TemplateName,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A stored DP template. Immutable once written.
#[derive(Debug, Clone)]
pub struct DpConfiguration {
    pub id: DpConfigurationId,
    pub slug: DpSlug,
    pub main_image_id: ImageId,
    pub logo_image_id: ImageId,
    pub placement: OverlayPlacement,
    pub radius: Radius,
    pub template_name: Option<TemplateName>,
    pub is_public: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDpConfiguration {
    pub slug: DpSlug,
    pub main_image_id: ImageId,
    pub logo_image_id: ImageId,
    pub placement: OverlayPlacement,
    pub radius: Radius,
    pub template_name: Option<TemplateName>,
    pub is_public: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}
