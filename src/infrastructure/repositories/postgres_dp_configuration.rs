// src/infrastructure/repositories/postgres_dp_configuration.rs
use super::map_sqlx;
use crate::domain::dp_configuration::{
    DpConfiguration, DpConfigurationFilter, DpConfigurationId, DpConfigurationListCursor,
    DpConfigurationReadRepository, DpConfigurationWriteRepository, DpSlug, ImageId,
    NewDpConfiguration, OverlayPlacement, SlugLookup, TemplateName,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const DP_COLUMNS: &str = "id, slug, main_image_id, logo_image_id, width, height, x_pos, y_pos, \
     radius, template_name, is_public, owner_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresDpConfigurationWriteRepository {
    pool: PgPool,
}

impl PostgresDpConfigurationWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresDpConfigurationReadRepository {
    pool: PgPool,
}

impl PostgresDpConfigurationReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DpConfigurationRow {
    id: i64,
    slug: String,
    main_image_id: String,
    logo_image_id: String,
    width: i32,
    height: i32,
    x_pos: i32,
    y_pos: i32,
    radius: String,
    template_name: Option<String>,
    is_public: bool,
    owner_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DpConfigurationRow> for DpConfiguration {
    type Error = DomainError;

    fn try_from(row: DpConfigurationRow) -> Result<Self, Self::Error> {
        Ok(DpConfiguration {
            id: DpConfigurationId::new(row.id)?,
            slug: DpSlug::new(row.slug)?,
            main_image_id: ImageId::new(row.main_image_id)?,
            logo_image_id: ImageId::new(row.logo_image_id)?,
            placement: OverlayPlacement::new(row.width, row.height, row.x_pos, row.y_pos)?,
            radius: row.radius.parse()?,
            template_name: TemplateName::parse(row.template_name)?,
            is_public: row.is_public,
            owner_id: UserId::new(row.owner_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl DpConfigurationWriteRepository for PostgresDpConfigurationWriteRepository {
    async fn insert(&self, configuration: NewDpConfiguration) -> DomainResult<DpConfiguration> {
        let NewDpConfiguration {
            slug,
            main_image_id,
            logo_image_id,
            placement,
            radius,
            template_name,
            is_public,
            owner_id,
            created_at,
        } = configuration;

        let row = sqlx::query_as::<_, DpConfigurationRow>(&format!(
            "INSERT INTO dp_configurations
                (slug, main_image_id, logo_image_id, width, height, x_pos, y_pos,
                 radius, template_name, is_public, owner_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
             RETURNING {DP_COLUMNS}"
        ))
        .bind(slug.as_str())
        .bind(main_image_id.as_str())
        .bind(logo_image_id.as_str())
        .bind(placement.width())
        .bind(placement.height())
        .bind(placement.x())
        .bind(placement.y())
        .bind(radius.to_string())
        .bind(template_name.as_ref().map(TemplateName::as_str))
        .bind(is_public)
        .bind(i64::from(owner_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        DpConfiguration::try_from(row)
    }
}

impl PostgresDpConfigurationReadRepository {
    async fn fetch_page(
        &self,
        filter: DpConfigurationFilter,
        limit: u32,
        cursor: Option<&DpConfigurationListCursor>,
    ) -> DomainResult<(Vec<DpConfiguration>, Option<DpConfigurationListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {DP_COLUMNS} FROM dp_configurations"));
        Self::apply_conditions(&mut builder, filter, cursor);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<DpConfigurationRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut configurations = rows
            .into_iter()
            .map(DpConfiguration::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if configurations.len() > limit as usize {
            configurations.pop();
            if let Some(last) = configurations.last() {
                next_cursor = Some(DpConfigurationListCursor::from_parts(
                    last.created_at,
                    last.id,
                ));
            }
        }

        Ok((configurations, next_cursor))
    }

    fn apply_conditions(
        builder: &mut QueryBuilder<'_, Postgres>,
        filter: DpConfigurationFilter,
        cursor: Option<&DpConfigurationListCursor>,
    ) {
        match filter {
            DpConfigurationFilter::Public => {
                builder.push(" WHERE is_public = TRUE");
            }
            DpConfigurationFilter::OwnedBy(owner) => {
                builder.push(" WHERE owner_id = ");
                builder.push_bind(i64::from(owner));
            }
        }

        if let Some(cursor) = cursor {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.id));
            builder.push(")");
        }
    }
}

#[async_trait]
impl SlugLookup for PostgresDpConfigurationReadRepository {
    async fn slug_exists(&self, slug: &DpSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM dp_configurations WHERE slug = $1)",
        )
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl DpConfigurationReadRepository for PostgresDpConfigurationReadRepository {
    async fn find_by_slug(&self, slug: &DpSlug) -> DomainResult<Option<DpConfiguration>> {
        let row = sqlx::query_as::<_, DpConfigurationRow>(&format!(
            "SELECT {DP_COLUMNS} FROM dp_configurations WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(DpConfiguration::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: DpConfigurationFilter,
        limit: u32,
        cursor: Option<DpConfigurationListCursor>,
    ) -> DomainResult<(Vec<DpConfiguration>, Option<DpConfigurationListCursor>)> {
        self.fetch_page(filter, limit, cursor.as_ref()).await
    }
}
