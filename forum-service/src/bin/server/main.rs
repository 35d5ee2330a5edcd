use std::sync::Arc;

use auth::TokenService;
use forum_service::config::Config;
use forum_service::domain::auth::service::AuthService;
use forum_service::domain::topic::service::TopicService;
use forum_service::domain::user::service::CredentialService;
use forum_service::inbound::http::router::create_router;
use forum_service::outbound::repositories::PostgresTopicRepository;
use forum_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MAX_DB_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "forum-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    tracing::info!(
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    // Refuse to start without a usable signing secret
    let token_service = Arc::new(TokenService::new(&config.jwt.secret)?);

    let pg_pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = MAX_DB_CONNECTIONS,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let topic_repository = Arc::new(PostgresTopicRepository::new(pg_pool));

    let credential_service = Arc::new(CredentialService::new(user_repository)?);
    let auth_service = Arc::new(AuthService::new(credential_service, token_service));
    let topic_service = Arc::new(TopicService::new(topic_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, topic_service);

    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
