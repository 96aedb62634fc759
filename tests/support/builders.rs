// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use dp_studio::application::commands::dp_configurations::CreateDpConfigurationCommand;
use dp_studio::domain::dp_configuration::{
    DpConfiguration, DpConfigurationId, DpSlug, ImageId, OverlayPlacement, Radius,
};
use dp_studio::domain::user::UserId;

use super::mocks::fixed_now;

pub struct DpConfigurationBuilder {
    id: i64,
    slug: String,
    owner_id: i64,
    is_public: bool,
    created_at: DateTime<Utc>,
}

impl DpConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            slug: "campus-week".into(),
            owner_id: 1,
            is_public: true,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn owner(mut self, owner_id: i64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Shift `created_at` back from the fixed clock.
    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> DpConfiguration {
        DpConfiguration {
            id: DpConfigurationId::new(self.id).unwrap(),
            slug: DpSlug::new(self.slug).unwrap(),
            main_image_id: ImageId::new("dp/main_photo").unwrap(),
            logo_image_id: ImageId::new("dp/logos/frame").unwrap(),
            placement: OverlayPlacement::new(200, 150, 40, -20).unwrap(),
            radius: Radius::Pixels(12),
            template_name: None,
            is_public: self.is_public,
            owner_id: UserId::new(self.owner_id).unwrap(),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// A valid create command with every required field filled in.
pub fn create_command() -> CreateDpConfigurationCommand {
    CreateDpConfigurationCommand::builder()
        .main_image_id("dp/main_photo")
        .logo_image_id("dp/logos/frame")
        .size(200, 150)
        .position(40, -20)
        .build()
        .unwrap()
}
