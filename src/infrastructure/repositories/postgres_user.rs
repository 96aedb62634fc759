// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, PasswordHash, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Accounts live in `users`; the role column is constrained to `admin`/`member`.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRecord {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRecord> for User {
    type Error = DomainError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(record.id)?,
            username: Username::new(record.username)?,
            password_hash: PasswordHash::new(record.password_hash)?,
            role: record.role.parse()?,
            created_at: record.created_at,
        })
    }
}

const SELECT_ACCOUNT: &str =
    "SELECT id, username, password_hash, role, created_at FROM users";

fn into_user(record: Option<AccountRecord>) -> DomainResult<Option<User>> {
    record.map(User::try_from).transpose()
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn has_users(&self) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users)")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&self, account: NewUser) -> DomainResult<User> {
        let record = sqlx::query_as::<_, AccountRecord>(
            "INSERT INTO users (username, password_hash, role, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, password_hash, role, created_at",
        )
        .bind(account.username.as_str())
        .bind(account.password_hash.as_str())
        .bind(account.role.as_str())
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        tracing::debug!(user_id = record.id, "account row inserted");
        User::try_from(record)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            "{SELECT_ACCOUNT} WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        into_user(record)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!("{SELECT_ACCOUNT} WHERE id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        into_user(record)
    }
}
