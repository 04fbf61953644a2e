use resorts_api::{app_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only load .env in development; production uses platform-native env injection.
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("resorts_api=info".parse()?)
                .add_directive("resorts_core=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting resorts-api with config: {:?}", config);

    let state = AppState::from_config(&config)?;
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("resorts-api listening on {}", config.bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
