// src/application/queries/dp_configurations/mod.rs
mod get_by_slug;
mod list;
mod render;
mod service;

pub use get_by_slug::GetDpConfigurationBySlugQuery;
pub use list::ListDpConfigurationsQuery;
pub use service::DpConfigurationQueryService;
