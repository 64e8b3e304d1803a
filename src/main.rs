use lunch_picker::{
    api::{create_router, AppState},
    config::Config,
    services::{load_catalog, load_spicy_labels},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Catalog and labels are loaded once; missing data files only produce warnings
    let catalog = load_catalog(config.catalog_source());
    let labels = load_spicy_labels(config.spicy_labels_path().as_deref());

    let state = AppState::new(catalog, labels);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
