// src/application/queries/dp_configurations/get_by_slug.rs
use super::DpConfigurationQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, DpConfigurationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::dp_configuration::{DpConfiguration, DpSlug},
};

pub struct GetDpConfigurationBySlugQuery {
    pub slug: String,
}

fn not_found() -> ApplicationError {
    ApplicationError::not_found("dp configuration not found")
}

impl DpConfigurationQueryService {
    /// Private configurations are reported as missing to everyone except the
    /// owner and holders of `dp_configurations:view:private`.
    pub(super) fn ensure_visible(
        actor: Option<&AuthenticatedUser>,
        configuration: &DpConfiguration,
    ) -> ApplicationResult<()> {
        if configuration.is_public {
            return Ok(());
        }

        match actor {
            Some(actor) if actor.can_view_private_of(configuration.owner_id) => Ok(()),
            _ => Err(not_found()),
        }
    }

    pub(super) async fn load_visible(
        &self,
        actor: Option<&AuthenticatedUser>,
        raw_slug: String,
    ) -> ApplicationResult<DpConfiguration> {
        // A value that can never be a stored slug cannot be found either.
        let slug = DpSlug::new(raw_slug).map_err(|_| not_found())?;
        let configuration = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        Self::ensure_visible(actor, &configuration)?;
        Ok(configuration)
    }

    pub async fn get_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetDpConfigurationBySlugQuery,
    ) -> ApplicationResult<DpConfigurationDto> {
        self.load_visible(actor, query.slug).await.map(Into::into)
    }
}
