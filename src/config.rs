use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub export_dir: PathBuf,
    pub export_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_url = env::var("ABSENOFC_API_URL")
            .map_err(|_| anyhow::anyhow!("ABSENOFC_API_URL environment variable is required"))?;
        let api_url = api_url.trim_end_matches('/').to_string();

        let export_dir = env::var("ABSENOFC_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let export_delay_ms = match env::var("ABSENOFC_EXPORT_DELAY_MS") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("ABSENOFC_EXPORT_DELAY_MS must be a number of milliseconds")
            })?,
            Err(_) => 500,
        };

        Ok(Config {
            api_url,
            export_dir,
            export_delay_ms,
        })
    }
}
