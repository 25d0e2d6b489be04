use std::sync::Arc;

use anyhow::Context;

use vitrine_api::app::{self, services::AppServices};
use vitrine_api::config::ApiConfig;
use vitrine_infra::{Fixtures, InMemoryCatalogStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, warnings) = ApiConfig::from_env();
    vitrine_observability::init(config.log_format);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let catalog = match &config.fixtures {
        Some(path) => Fixtures::from_path(path)?.into_catalog()?,
        None => {
            tracing::warn!("VITRINE_FIXTURES not set; starting with an empty catalog");
            Default::default()
        }
    };
    let services = Arc::new(AppServices::new(Arc::new(InMemoryCatalogStore::with_catalog(catalog))));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
