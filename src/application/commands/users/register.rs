use super::{LoginResult, UserCommandService, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{NewUser, PasswordHash, Role, User, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Create an account and sign it in. The very first account becomes the
    /// administrator; every later one is a member.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username.trim())?;
        validate_password(&command.password)?;

        let has_users = self.user_repo.has_users().await?;
        let role = if has_users { Role::Member } else { Role::Admin };

        if has_users && self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let user = self
            .create_and_insert_user(username, &command.password, role)
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "user registered");

        let token = self.issue_token_for(&user).await?;
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser {
            username,
            password_hash,
            role,
            created_at: self.clock.now(),
        };
        Ok(self.user_repo.insert(new_user).await?)
    }
}
