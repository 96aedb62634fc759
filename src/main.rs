use anyhow::Result;
use dp_studio::application::{
    ports::{
        media::ImageUrlBuilder,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::RandomIdGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use dp_studio::config::AppConfig;
use dp_studio::domain::{
    dp_configuration::{DpConfigurationReadRepository, DpConfigurationWriteRepository},
    user::UserRepository,
};
use dp_studio::infrastructure::{
    database,
    media::CloudinaryUrlBuilder,
    repositories::{
        PostgresDpConfigurationReadRepository, PostgresDpConfigurationWriteRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::NanoIdGenerator,
};
use dp_studio::presentation::http::{
    middleware::rate_limit::rate_limit_layer,
    routes::{RouterOptions, build_router_with},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let dp_write_repo: Arc<dyn DpConfigurationWriteRepository> =
        Arc::new(PostgresDpConfigurationWriteRepository::new(pool.clone()));
    let dp_read_repo: Arc<dyn DpConfigurationReadRepository> =
        Arc::new(PostgresDpConfigurationReadRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let id_generator: Arc<dyn RandomIdGenerator> = Arc::new(NanoIdGenerator);
    let url_builder: Arc<dyn ImageUrlBuilder> =
        Arc::new(CloudinaryUrlBuilder::new(config.cloudinary_cloud_name()));

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo,
        dp_write_repo,
        dp_read_repo,
        password_hasher,
        token_manager,
        clock,
        id_generator,
        url_builder,
        default_logo_image_id: config.default_logo_image_id().map(str::to_owned),
    }));

    let options = RouterOptions {
        allowed_origins: config.allowed_origins(),
        auth_rate_limit: rate_limit_layer(config.rate_limit_per_second(), config.rate_limit_burst()),
    };
    let app = build_router_with(HttpState::new(services), options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
