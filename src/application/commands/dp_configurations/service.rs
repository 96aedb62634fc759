// src/application/commands/dp_configurations/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::dp_configuration::{DpConfigurationWriteRepository, services::SlugResolver},
};

pub struct DpConfigurationCommandService {
    pub(super) write_repo: Arc<dyn DpConfigurationWriteRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) clock: Arc<dyn Clock>,
    /// Logo used when a request does not name one.
    pub(super) default_logo_image_id: Option<String>,
}

impl DpConfigurationCommandService {
    pub fn new(
        write_repo: Arc<dyn DpConfigurationWriteRepository>,
        slug_resolver: Arc<SlugResolver>,
        clock: Arc<dyn Clock>,
        default_logo_image_id: Option<String>,
    ) -> Self {
        Self {
            write_repo,
            slug_resolver,
            clock,
            default_logo_image_id,
        }
    }
}
