// src/domain/dp_configuration/repository.rs
use crate::domain::dp_configuration::{
    cursor::DpConfigurationListCursor,
    entity::{DpConfiguration, NewDpConfiguration},
    value_objects::DpSlug,
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Existence check used by slug resolution.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    async fn slug_exists(&self, slug: &DpSlug) -> DomainResult<bool>;
}

/// Which configurations a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpConfigurationFilter {
    Public,
    OwnedBy(UserId),
}

#[async_trait]
pub trait DpConfigurationWriteRepository: Send + Sync {
    /// Insert a new configuration. A slug already taken at write time yields
    /// `DomainError::DuplicateSlug`.
    async fn insert(&self, configuration: NewDpConfiguration) -> DomainResult<DpConfiguration>;
}

#[async_trait]
pub trait DpConfigurationReadRepository: SlugLookup {
    async fn find_by_slug(&self, slug: &DpSlug) -> DomainResult<Option<DpConfiguration>>;

    async fn list_page(
        &self,
        filter: DpConfigurationFilter,
        limit: u32,
        cursor: Option<DpConfigurationListCursor>,
    ) -> DomainResult<(Vec<DpConfiguration>, Option<DpConfigurationListCursor>)>;
}
