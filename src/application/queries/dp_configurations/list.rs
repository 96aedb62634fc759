// src/application/queries/dp_configurations/list.rs
use super::DpConfigurationQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CursorPage, DpConfigurationDto, pagination::normalize_page_size},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        dp_configuration::{DpConfigurationFilter, DpConfigurationListCursor},
        errors::DomainError,
    },
};

pub struct ListDpConfigurationsQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

impl DpConfigurationQueryService {
    /// Public configurations, newest first.
    pub async fn list_public(
        &self,
        query: ListDpConfigurationsQuery,
    ) -> ApplicationResult<CursorPage<DpConfigurationDto>> {
        self.list_with_filter(DpConfigurationFilter::Public, query)
            .await
    }

    /// Everything `actor` owns, private ones included.
    pub async fn list_mine(
        &self,
        actor: &AuthenticatedUser,
        query: ListDpConfigurationsQuery,
    ) -> ApplicationResult<CursorPage<DpConfigurationDto>> {
        self.list_with_filter(DpConfigurationFilter::OwnedBy(actor.id), query)
            .await
    }

    async fn list_with_filter(
        &self,
        filter: DpConfigurationFilter,
        query: ListDpConfigurationsQuery,
    ) -> ApplicationResult<CursorPage<DpConfigurationDto>> {
        let limit = normalize_page_size(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self.read_repo.list_page(filter, limit, cursor).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<DpConfigurationListCursor>> {
    match token {
        Some(value) => match DpConfigurationListCursor::decode(value) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
            Err(other) => Err(ApplicationError::from(other)),
        },
        None => Ok(None),
    }
}
