use anyhow::Context;

use stockroom_infra::ShopConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = ShopConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        items = %config.items_path().display(),
        sales = %config.sales_path().display(),
        "using data files"
    );

    let app = stockroom_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
