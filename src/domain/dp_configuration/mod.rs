pub mod cursor;
pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use cursor::DpConfigurationListCursor;
pub use entity::{DpConfiguration, NewDpConfiguration};
pub use repository::{
    DpConfigurationFilter, DpConfigurationReadRepository, DpConfigurationWriteRepository,
    SlugLookup,
};
pub use value_objects::{
    DpConfigurationId, DpSlug, ImageId, OverlayPlacement, Radius, TemplateName,
};
