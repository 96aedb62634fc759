// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{dp_configurations::DpConfigurationCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            media::ImageUrlBuilder,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::RandomIdGenerator,
        },
        queries::{dp_configurations::DpConfigurationQueryService, users::UserQueryService},
    },
    domain::{
        dp_configuration::{
            DpConfigurationReadRepository, DpConfigurationWriteRepository, services::SlugResolver,
        },
        user::UserRepository,
    },
};

/// Collaborators handed to [`ApplicationServices::new`], built once at startup.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub dp_write_repo: Arc<dyn DpConfigurationWriteRepository>,
    pub dp_read_repo: Arc<dyn DpConfigurationReadRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub id_generator: Arc<dyn RandomIdGenerator>,
    pub url_builder: Arc<dyn ImageUrlBuilder>,
    pub default_logo_image_id: Option<String>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub dp_commands: Arc<DpConfigurationCommandService>,
    pub dp_queries: Arc<DpConfigurationQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
            Arc::clone(&deps.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.clock),
        ));

        let slug_resolver = Arc::new(SlugResolver::new(
            Arc::clone(&deps.dp_read_repo),
            Arc::clone(&deps.id_generator),
        ));

        let dp_commands = Arc::new(DpConfigurationCommandService::new(
            Arc::clone(&deps.dp_write_repo),
            slug_resolver,
            Arc::clone(&deps.clock),
            deps.default_logo_image_id,
        ));
        let dp_queries = Arc::new(DpConfigurationQueryService::new(
            Arc::clone(&deps.dp_read_repo),
            Arc::clone(&deps.url_builder),
        ));

        Self {
            user_commands,
            user_queries,
            dp_commands,
            dp_queries,
            token_manager: deps.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Verify a raw bearer token.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
