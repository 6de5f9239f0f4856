use std::{fs::OpenOptions, sync::Mutex};

use todo_sections::{
    application::section_service::{LocalSectionService, RemoteSectionService},
    config::{Backend, Config},
    infrastructure::http_api::HttpSectionsApi,
    ui,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    // The terminal belongs to the UI, so logs go to a file.
    let log_file = OpenOptions::new().create(true).append(true).open(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!(backend = ?config.backend, base_url = %config.base_url, "starting");
    match config.backend {
        Backend::Remote => ui::run(RemoteSectionService::new(HttpSectionsApi::new(&config.base_url)?)).await,
        Backend::Local => ui::run(LocalSectionService::default()).await,
    }
}
