// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use dp_studio::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use dp_studio::domain::user::{Role, UserId};
use serde_json::json;

use super::time::fixed_now;

pub const MEMBER_TOKEN: &str = "member-token";
pub const OTHER_MEMBER_TOKEN: &str = "other-member-token";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub fn member_user() -> AuthenticatedUser {
    authenticated(1, "alice", Role::Member)
}

pub fn other_member_user() -> AuthenticatedUser {
    authenticated(2, "bob", Role::Member)
}

pub fn admin_user() -> AuthenticatedUser {
    authenticated(3, "root", Role::Admin)
}

fn authenticated(id: i64, username: &str, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Accepts the fixed tokens above; issues `issued-{user_id}` tokens.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("issued-{}", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            MEMBER_TOKEN => Ok(member_user()),
            OTHER_MEMBER_TOKEN => Ok(other_member_user()),
            ADMIN_TOKEN => Ok(admin_user()),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }

    async fn public_jwk(&self) -> ApplicationResult<serde_json::Value> {
        Ok(json!({ "keys": [{ "kty": "OKP", "crv": "Ed25519", "x": "test" }] }))
    }
}

/// Stores `hash::{password}` and verifies against it.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
