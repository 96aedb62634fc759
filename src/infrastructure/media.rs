//! Cloudinary delivery URLs.
use crate::application::ports::media::{ImageUrlBuilder, RenderedUrls};
use crate::domain::dp_configuration::DpConfiguration;

pub const DISPLAY_SIZE: u32 = 500;
pub const DOWNLOAD_SIZE: u32 = 1080;

#[derive(Debug, Clone)]
pub struct CloudinaryUrlBuilder {
    cloud_name: String,
}

impl CloudinaryUrlBuilder {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
        }
    }

    fn upload_base(&self) -> String {
        format!("https://res.cloudinary.com/{}/image/upload", self.cloud_name)
    }
}

/// `l_` layer transformation placing the logo over the base image. Cloudinary
/// addresses layered assets in folders with `:` instead of `/`.
fn overlay_transformation(configuration: &DpConfiguration) -> String {
    let placement = configuration.placement;
    format!(
        "l_{},w_{},h_{},c_fill,x_{},y_{},r_{}",
        configuration.logo_image_id.as_str().replace('/', ":"),
        placement.width(),
        placement.height(),
        placement.x(),
        placement.y(),
        configuration.radius,
    )
}

impl ImageUrlBuilder for CloudinaryUrlBuilder {
    fn render(&self, configuration: &DpConfiguration) -> RenderedUrls {
        let base = self.upload_base();
        let overlay = overlay_transformation(configuration);
        let main = configuration.main_image_id.as_str();

        RenderedUrls {
            display_url: format!(
                "{base}/w_{DISPLAY_SIZE},h_{DISPLAY_SIZE},c_fill/{overlay}/{main}"
            ),
            download_url: format!(
                "{base}/fl_attachment:{slug},w_{DOWNLOAD_SIZE},h_{DOWNLOAD_SIZE},c_fill/{overlay}/{main}",
                slug = configuration.slug
            ),
        }
    }
}
