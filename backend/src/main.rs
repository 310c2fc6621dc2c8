use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asistencia_backend::{
    config::Config,
    db::connection::create_pool,
    routes::build_router,
    services::assistant::{AssistantClient, HttpAssistantClient},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asistencia_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        assistant_url = %config.assistant_url,
        assistant_timeout_secs = config.assistant_timeout_secs,
        session_ttl_hours = config.session_ttl_hours,
        time_zone = %config.time_zone,
        bind_addr = %config.bind_addr,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let assistant: Arc<dyn AssistantClient> = Arc::new(HttpAssistantClient::from_config(&config)?);

    let addr: SocketAddr = config.bind_addr.parse()?;
    let app = build_router(AppState::new(pool, config), assistant);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
