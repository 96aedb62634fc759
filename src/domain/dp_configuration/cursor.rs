use crate::domain::dp_configuration::value_objects::DpConfigurationId;
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset position for newest-first listings: `(created_at, id)` of the last
/// item returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpConfigurationListCursor {
    pub created_at: DateTime<Utc>,
    pub id: DpConfigurationId,
}

fn invalid() -> DomainError {
    DomainError::Validation("invalid cursor token".into())
}

impl DpConfigurationListCursor {
    pub const fn from_parts(created_at: DateTime<Utc>, id: DpConfigurationId) -> Self {
        Self { created_at, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), i64::from(self.id));
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at, id) = raw.split_once('|').ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::from_parts(
            created_at,
            DpConfigurationId::new(id).map_err(|_| invalid())?,
        ))
    }
}
