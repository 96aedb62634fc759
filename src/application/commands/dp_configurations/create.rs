// src/application/commands/dp_configurations/create.rs
use super::{DpConfigurationCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, DpConfigurationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        dp_configuration::{
            ImageId, NewDpConfiguration, OverlayPlacement, Radius, TemplateName,
            services::MAX_CANDIDATE_LENGTH, slug::sanitize_candidate,
        },
        errors::DomainError,
    },
};

pub struct CreateDpConfigurationCommand {
    pub main_image_id: String,
    pub logo_image_id: Option<String>,
    pub width: i32,
    pub height: i32,
    pub x_pos: i32,
    pub y_pos: i32,
    pub radius: Option<Radius>,
    pub template_name: Option<String>,
    /// Requested slug. Sanitized and de-duplicated before use.
    pub custom_slug: Option<String>,
    pub is_public: Option<bool>,
}

impl CreateDpConfigurationCommand {
    pub fn builder() -> CreateDpConfigurationCommandBuilder {
        CreateDpConfigurationCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateDpConfigurationCommandBuilder {
    main_image_id: Option<String>,
    logo_image_id: Option<String>,
    size: Option<(i32, i32)>,
    position: (i32, i32),
    radius: Option<Radius>,
    template_name: Option<String>,
    custom_slug: Option<String>,
    is_public: Option<bool>,
}

impl CreateDpConfigurationCommandBuilder {
    pub fn main_image_id(mut self, id: impl Into<String>) -> Self {
        self.main_image_id = Some(id.into());
        self
    }

    pub fn logo_image_id(mut self, id: impl Into<String>) -> Self {
        self.logo_image_id = Some(id.into());
        self
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.position = (x, y);
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = Some(name.into());
        self
    }

    pub fn custom_slug(mut self, slug: impl Into<String>) -> Self {
        self.custom_slug = Some(slug.into());
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    pub fn build(self) -> Result<CreateDpConfigurationCommand, &'static str> {
        let (width, height) = self.size.ok_or("size is required")?;
        Ok(CreateDpConfigurationCommand {
            main_image_id: self.main_image_id.ok_or("main image id is required")?,
            logo_image_id: self.logo_image_id,
            width,
            height,
            x_pos: self.position.0,
            y_pos: self.position.1,
            radius: self.radius,
            template_name: self.template_name,
            custom_slug: self.custom_slug,
            is_public: self.is_public,
        })
    }
}

impl DpConfigurationCommandService {
    /// Validate, assign a slug, and store a new configuration owned by `actor`.
    ///
    /// A slug taken between resolution and insert surfaces as
    /// `DomainError::DuplicateSlug`; the request is not retried.
    pub async fn create_configuration(
        &self,
        actor: &AuthenticatedUser,
        command: CreateDpConfigurationCommand,
    ) -> ApplicationResult<DpConfigurationDto> {
        ensure_capability(actor, "dp_configurations", "create")?;

        let main_image_id = ImageId::new(command.main_image_id)?;
        let logo_image_id = self.logo_or_default(command.logo_image_id)?;
        let placement =
            OverlayPlacement::new(command.width, command.height, command.x_pos, command.y_pos)?;
        let template_name = TemplateName::parse(command.template_name)?;

        check_candidate_length(command.custom_slug.as_deref())?;
        let slug = self
            .slug_resolver
            .resolve(command.custom_slug.as_deref())
            .await?;
        let now = self.clock.now();

        let new_configuration = NewDpConfiguration {
            slug,
            main_image_id,
            logo_image_id,
            placement,
            radius: command.radius.unwrap_or_default(),
            template_name,
            is_public: command.is_public.unwrap_or(true),
            owner_id: actor.id,
            created_at: now,
        };

        match self.write_repo.insert(new_configuration).await {
            Ok(created) => {
                tracing::info!(
                    slug = %created.slug,
                    owner_id = %created.owner_id,
                    is_public = created.is_public,
                    "dp configuration created"
                );
                Ok(created.into())
            }
            Err(DomainError::DuplicateSlug(slug)) => {
                tracing::warn!(slug = %slug, "slug claimed by a concurrent insert");
                Err(DomainError::DuplicateSlug(slug).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn logo_or_default(&self, requested: Option<String>) -> ApplicationResult<ImageId> {
        let chosen = requested
            .filter(|id| !id.trim().is_empty())
            .or_else(|| self.default_logo_image_id.clone())
            .ok_or_else(|| ApplicationError::validation("logoImageId is required"))?;
        Ok(ImageId::new(chosen)?)
    }
}

/// Reject an oversized custom slug up front; it is never truncated.
fn check_candidate_length(candidate: Option<&str>) -> ApplicationResult<()> {
    match candidate.map(sanitize_candidate) {
        Some(sanitized) if sanitized.len() > MAX_CANDIDATE_LENGTH => {
            Err(ApplicationError::validation(format!(
                "customSlug must be at most {MAX_CANDIDATE_LENGTH} characters"
            )))
        }
        _ => Ok(()),
    }
}
