use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of a keyset-paginated listing. `next_cursor` is opaque to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        let has_more = next_cursor.is_some();
        Self {
            items,
            next_cursor,
            has_more,
        }
    }
}

/// Zero means "server default"; anything above `MAX_PAGE_SIZE` is capped.
pub fn normalize_page_size(requested: u32) -> u32 {
    if requested == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        requested.min(MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_normalized() {
        assert_eq!(normalize_page_size(0), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(500), MAX_PAGE_SIZE);
        assert_eq!(normalize_page_size(7), 7);
    }

    #[test]
    fn has_more_follows_cursor() {
        assert!(CursorPage::new(vec![1], Some("abc".into())).has_more);
        assert!(!CursorPage::<i32>::new(vec![], None).has_more);
    }
}
