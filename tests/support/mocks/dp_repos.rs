// tests/support/mocks/dp_repos.rs
use async_trait::async_trait;
use dp_studio::domain::dp_configuration::{
    DpConfiguration, DpConfigurationFilter, DpConfigurationId, DpConfigurationListCursor,
    DpConfigurationReadRepository, DpConfigurationWriteRepository, DpSlug, NewDpConfiguration,
    SlugLookup,
};
use dp_studio::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read and write repository over one shared vector, enforcing slug
/// uniqueness on insert the way the database constraint does.
#[derive(Default)]
pub struct InMemoryDpRepository {
    rows: Mutex<Vec<DpConfiguration>>,
    lookups: AtomicUsize,
}

impl InMemoryDpRepository {
    pub fn with_rows(rows: impl IntoIterator<Item = DpConfiguration>) -> Self {
        Self {
            rows: Mutex::new(rows.into_iter().collect()),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Occupy slugs without caring about the rest of the row.
    pub fn with_slugs<'a>(slugs: impl IntoIterator<Item = &'a str>) -> Self {
        let rows = slugs
            .into_iter()
            .enumerate()
            .map(|(i, slug)| {
                super::super::builders::DpConfigurationBuilder::new()
                    .id(i as i64 + 1000)
                    .slug(slug)
                    .build()
            });
        Self::with_rows(rows)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn slugs(&self) -> HashSet<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| row.slug.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SlugLookup for InMemoryDpRepository {
    async fn slug_exists(&self, slug: &DpSlug) -> DomainResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().iter().any(|row| &row.slug == slug))
    }
}

#[async_trait]
impl DpConfigurationWriteRepository for InMemoryDpRepository {
    async fn insert(&self, new: NewDpConfiguration) -> DomainResult<DpConfiguration> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.slug == new.slug) {
            return Err(DomainError::DuplicateSlug(new.slug.into_inner()));
        }
        let next_id = rows.iter().map(|row| i64::from(row.id)).max().unwrap_or(0) + 1;
        let created = DpConfiguration {
            id: DpConfigurationId::new(next_id)?,
            slug: new.slug,
            main_image_id: new.main_image_id,
            logo_image_id: new.logo_image_id,
            placement: new.placement,
            radius: new.radius,
            template_name: new.template_name,
            is_public: new.is_public,
            owner_id: new.owner_id,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl DpConfigurationReadRepository for InMemoryDpRepository {
    async fn find_by_slug(&self, slug: &DpSlug) -> DomainResult<Option<DpConfiguration>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| &row.slug == slug)
            .cloned())
    }

    async fn list_page(
        &self,
        filter: DpConfigurationFilter,
        limit: u32,
        cursor: Option<DpConfigurationListCursor>,
    ) -> DomainResult<(Vec<DpConfiguration>, Option<DpConfigurationListCursor>)> {
        let mut matching: Vec<DpConfiguration> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| match filter {
                DpConfigurationFilter::Public => row.is_public,
                DpConfigurationFilter::OwnedBy(owner) => row.owner_id == owner,
            })
            .filter(|row| match &cursor {
                Some(c) => {
                    (row.created_at, i64::from(row.id)) < (c.created_at, i64::from(c.id))
                }
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });

        let limit = limit as usize;
        let next = if matching.len() > limit {
            matching.truncate(limit);
            matching
                .last()
                .map(|row| DpConfigurationListCursor::from_parts(row.created_at, row.id))
        } else {
            None
        };
        Ok((matching, next))
    }
}

/// Reports every slug as taken. Counts lookups.
#[derive(Default)]
pub struct AlwaysTakenLookup {
    lookups: AtomicUsize,
}

impl AlwaysTakenLookup {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlugLookup for AlwaysTakenLookup {
    async fn slug_exists(&self, _slug: &DpSlug) -> DomainResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Write side that always loses the race for its slug.
#[derive(Default)]
pub struct RacingWriteRepo;

#[async_trait]
impl DpConfigurationWriteRepository for RacingWriteRepo {
    async fn insert(&self, new: NewDpConfiguration) -> DomainResult<DpConfiguration> {
        Err(DomainError::DuplicateSlug(new.slug.into_inner()))
    }
}
