// src/application/queries/dp_configurations/service.rs
use std::sync::Arc;

use crate::application::ports::media::ImageUrlBuilder;
use crate::domain::dp_configuration::DpConfigurationReadRepository;

pub struct DpConfigurationQueryService {
    pub(super) read_repo: Arc<dyn DpConfigurationReadRepository>,
    pub(super) url_builder: Arc<dyn ImageUrlBuilder>,
}

impl DpConfigurationQueryService {
    pub fn new(
        read_repo: Arc<dyn DpConfigurationReadRepository>,
        url_builder: Arc<dyn ImageUrlBuilder>,
    ) -> Self {
        Self {
            read_repo,
            url_builder,
        }
    }
}
