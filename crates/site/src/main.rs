use std::{net::SocketAddr, sync::Arc};

use loader::source_for;
use site::{
    config::load_settings,
    init_tracing,
    routes::{build_router, SiteState},
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;
    init_tracing(&settings.log_filter);

    let source = source_for(&settings.source, settings.http_timeout())?;
    let app = build_router(Arc::new(SiteState::new(source)));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, source = %settings.source, "word pages listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
