use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://64b14183062767bc4825ee27.mockapi.io";
pub const DEFAULT_LOG_FILE: &str = "todo-sections.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Hosted REST API.
    Remote,
    /// In-memory reducer store, nothing leaves the process.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub backend: Backend,
    pub log_file: PathBuf,
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = lookup("TODO_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let backend = match lookup("TODO_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("remote") => Backend::Remote,
            Some("local") => Backend::Local,
            Some(other) => anyhow::bail!("TODO_BACKEND must be `remote` or `local`, got `{other}`"),
        };
        let log_file = lookup("TODO_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), backend, log_file: PathBuf::from(log_file) })
    }
}
