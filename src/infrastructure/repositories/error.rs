use crate::domain::errors::DomainError;
use sqlx::postgres::PgDatabaseError;

const CNT_DP_SLUG: &str = "dp_configurations_slug_key";
const CNT_DP_OWNER: &str = "dp_configurations_owner_id_fkey";
const CNT_DP_SLUG_FORMAT: &str = "dp_configurations_slug_format_chk";
const CNT_DP_SLUG_LENGTH: &str = "dp_configurations_slug_length_chk";
const CNT_DP_SIZE: &str = "dp_configurations_size_chk";
const CNT_DP_RADIUS: &str = "dp_configurations_radius_chk";
const CNT_USER_USERNAME: &str = "users_username_key";

const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";
const SQLSTATE_CHECK_VIOLATION: &str = "23514";
const SQLSTATE_PROGRAM_LIMIT_EXCEEDED: &str = "54000";

/// Translate a driver error into the domain vocabulary. Constraint names are
/// matched first, then bare SQLSTATE codes.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_DP_SLUG => DomainError::DuplicateSlug(
                        db_err
                            .try_downcast_ref::<PgDatabaseError>()
                            .and_then(PgDatabaseError::detail)
                            .and_then(slug_from_detail)
                            .unwrap_or_else(|| "requested slug".into()),
                    ),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_DP_OWNER => DomainError::NotFound("owner not found".into()),
                    CNT_DP_SLUG_FORMAT => DomainError::Validation("slug is not url-safe".into()),
                    CNT_DP_SLUG_LENGTH => DomainError::Validation("slug is too long".into()),
                    CNT_DP_SIZE => DomainError::Validation("overlay is too small".into()),
                    CNT_DP_RADIUS => DomainError::Validation("radius is invalid".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLSTATE_UNIQUE_VIOLATION => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    SQLSTATE_FOREIGN_KEY_VIOLATION => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    SQLSTATE_CHECK_VIOLATION => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    SQLSTATE_PROGRAM_LIMIT_EXCEEDED => {
                        return DomainError::Validation("value is too large to store".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => DomainError::Persistence("database pool timed out".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Pull the offending value out of a Postgres unique-violation detail, e.g.
/// `Key (slug)=(my-dp) already exists.`
fn slug_from_detail(message: &str) -> Option<String> {
    let (_, rest) = message.split_once("=(")?;
    let (value, _) = rest.split_once(')')?;
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_value_from_unique_violation_detail() {
        assert_eq!(
            slug_from_detail("Key (slug)=(my-cool-dp) already exists."),
            Some("my-cool-dp".to_string())
        );
        assert_eq!(slug_from_detail("duplicate key value"), None);
    }

    #[test]
    fn non_database_errors_are_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }
}
