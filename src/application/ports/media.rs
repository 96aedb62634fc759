// src/application/ports/media.rs
use crate::domain::dp_configuration::DpConfiguration;

/// Rendered image URLs for a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUrls {
    pub display_url: String,
    pub download_url: String,
}

/// Builds CDN transformation URLs that composite the logo over the main image.
pub trait ImageUrlBuilder: Send + Sync {
    fn render(&self, configuration: &DpConfiguration) -> RenderedUrls;
}
