use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserProfileDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Profile of the token holder. A valid token whose account no longer
    /// exists is treated as a bad credential, not a missing resource.
    pub async fn get_profile(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserProfileDto> {
        let Some(account) = self.user_repo.find_by_id(actor.id).await? else {
            tracing::warn!(user_id = %actor.id, "token refers to a missing account");
            return Err(ApplicationError::unauthorized("account no longer exists"));
        };

        Ok(UserProfileDto::from_parts(account, actor, self.clock.now()))
    }
}
