use std::sync::Arc;

use auth::TokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trainsmart_api::config::Config;
use trainsmart_api::domain::user::ports::AuthServicePort;
use trainsmart_api::domain::user::ports::UserServicePort;
use trainsmart_api::domain::user::service::AuthService;
use trainsmart_api::domain::user::service::UserService;
use trainsmart_api::inbound::http::router::create_router;
use trainsmart_api::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trainsmart_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "trainsmart-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The database URL carries credentials and stays out of the logs
    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_issuer = Arc::new(TokenIssuer::with_ttl(
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let auth_service: Arc<dyn AuthServicePort> =
        Arc::new(AuthService::new(Arc::clone(&user_repository)));
    let user_service: Arc<dyn UserServicePort> =
        Arc::new(UserService::new(Arc::clone(&user_repository)));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, user_service, token_issuer);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
