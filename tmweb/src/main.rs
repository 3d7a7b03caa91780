use tmconfig::Config;
use tmdirectus::DirectusClient;
use tmserver::{RealtimeState, Server, realtime};
use tmweb::{AppState, create_router, load_templates};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tmserver::init_logging();

    // ========== Phase 1: configuration and collaborators ==========

    let config = Config::from_env()?;

    let cms = DirectusClient::builder()
        .api_base(config.get_api_base_url())
        .build()?;
    let templates = load_templates()?;
    let state = AppState::new(cms, templates);

    // ========== Phase 2: routes ==========

    let mut server = Server::new("tmweb", config.get_http_port());
    server.add_router("/", create_router(state));
    server.add_router("/", realtime::create_router(RealtimeState::new()));

    // ========== Phase 3: serve ==========

    server.start().await?;
    if let Some(addr) = server.local_addr() {
        info!("tmweb is ready on http://{}", addr);
    }
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
