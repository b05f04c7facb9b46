use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stmtdb::api;
use stmtdb::config::{CliArgs, Config};
use stmtdb::service::StatementService;
use stmtdb::storage::InMemoryStore;

#[tokio::main]
async fn main() {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);

    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if config.logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let store = Arc::new(InMemoryStore::new());
    let service = Arc::new(StatementService::new(store));
    let app = api::router(service);

    let addr = config.listen_addr();
    tracing::info!(%addr, "API listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
