// src/application/queries/dp_configurations/render.rs
use super::{DpConfigurationQueryService, GetDpConfigurationBySlugQuery};
use crate::application::{
    dto::{AuthenticatedUser, DpRenderDto},
    error::ApplicationResult,
};

impl DpConfigurationQueryService {
    /// CDN URLs for the composited image, subject to the same visibility rule
    /// as [`Self::get_by_slug`].
    pub async fn render_urls(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetDpConfigurationBySlugQuery,
    ) -> ApplicationResult<DpRenderDto> {
        let configuration = self.load_visible(actor, query.slug).await?;
        let urls = self.url_builder.render(&configuration);
        Ok(DpRenderDto::new(configuration.slug.into_inner(), urls))
    }
}
