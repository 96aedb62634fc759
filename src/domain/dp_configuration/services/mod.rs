// src/domain/dp_configuration/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::RandomIdGenerator;
use crate::domain::dp_configuration::{
    repository::{DpConfigurationReadRepository, SlugLookup},
    slug::sanitize_candidate,
    value_objects::{DpSlug, MAX_SLUG_LENGTH},
};
use crate::domain::errors::{DomainError, DomainResult};

/// Generator draws allowed when no usable candidate was supplied.
pub const MAX_RANDOM_ATTEMPTS: u32 = 5;
/// Highest numeric suffix tried for a taken candidate.
pub const MAX_SUFFIX_ATTEMPTS: u32 = 10_000;
/// Longest sanitized candidate accepted. Leaves room for `-10000`.
pub const MAX_CANDIDATE_LENGTH: usize = MAX_SLUG_LENGTH - 6;

/// Pick a slug for a new configuration.
///
/// A candidate is sanitized first; if it is free it is used as-is, otherwise
/// `-1`, `-2`, ... are appended until a free slug is found. Without a usable
/// candidate the generator is drawn from instead. Only reads through `lookup`,
/// so the result is a point-in-time answer: the insert that follows can still
/// lose a race and must rely on the storage uniqueness constraint.
///
/// # Errors
///
/// `DomainError::Validation` when the sanitized candidate is longer than
/// [`MAX_CANDIDATE_LENGTH`], `DomainError::SlugExhausted` when either retry
/// budget runs out, or any error reported by `lookup`.
pub async fn resolve_slug<L, G>(
    candidate: Option<&str>,
    lookup: &L,
    ids: &G,
) -> DomainResult<DpSlug>
where
    L: SlugLookup + ?Sized,
    G: RandomIdGenerator + ?Sized,
{
    match candidate.map(sanitize_candidate).filter(|s| !s.is_empty()) {
        Some(sanitized) if sanitized.len() > MAX_CANDIDATE_LENGTH => {
            Err(DomainError::Validation(format!(
                "slug must be at most {MAX_CANDIDATE_LENGTH} characters"
            )))
        }
        Some(sanitized) => resolve_candidate(DpSlug::new(sanitized)?, lookup).await,
        None => resolve_random(lookup, ids).await,
    }
}

async fn resolve_candidate<L>(base: DpSlug, lookup: &L) -> DomainResult<DpSlug>
where
    L: SlugLookup + ?Sized,
{
    if !lookup.slug_exists(&base).await? {
        return Ok(base);
    }

    for counter in 1..=MAX_SUFFIX_ATTEMPTS {
        let attempt = base.with_suffix(counter);
        if !lookup.slug_exists(&attempt).await? {
            tracing::debug!(requested = %base, assigned = %attempt, "slug taken, numeric suffix applied");
            return Ok(attempt);
        }
    }

    tracing::warn!(requested = %base, attempts = MAX_SUFFIX_ATTEMPTS, "slug suffix search exhausted");
    Err(DomainError::SlugExhausted {
        attempts: MAX_SUFFIX_ATTEMPTS,
    })
}

async fn resolve_random<L, G>(lookup: &L, ids: &G) -> DomainResult<DpSlug>
where
    L: SlugLookup + ?Sized,
    G: RandomIdGenerator + ?Sized,
{
    for attempt in 1..=MAX_RANDOM_ATTEMPTS {
        let raw = ids.generate();
        let Ok(slug) = DpSlug::new(raw.clone()) else {
            tracing::warn!(id = %raw, attempt, "generated id is not a valid slug");
            continue;
        };
        if !lookup.slug_exists(&slug).await? {
            return Ok(slug);
        }
        tracing::debug!(slug = %slug, attempt, "generated slug collided");
    }

    tracing::warn!(attempts = MAX_RANDOM_ATTEMPTS, "random slug generation exhausted");
    Err(DomainError::SlugExhausted {
        attempts: MAX_RANDOM_ATTEMPTS,
    })
}

/// Domain service wrapping [`resolve_slug`] with its collaborators.
pub struct SlugResolver {
    lookup: Arc<dyn DpConfigurationReadRepository>,
    ids: Arc<dyn RandomIdGenerator>,
}

impl SlugResolver {
    pub fn new(
        lookup: Arc<dyn DpConfigurationReadRepository>,
        ids: Arc<dyn RandomIdGenerator>,
    ) -> Self {
        Self { lookup, ids }
    }

    pub async fn resolve(&self, candidate: Option<&str>) -> DomainResult<DpSlug> {
        resolve_slug(candidate, self.lookup.as_ref(), self.ids.as_ref()).await
    }
}
