use color_eyre::{eyre::eyre, Result};
use std::{path::Path, time::Duration};
use tokio::io::AsyncReadExt;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_DELAY_MS, DELAY_ENV};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Latency of the stub directory, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

pub const FILE_PATH: &str = "./roster.json";

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Config {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Reads `path` (or `./roster.json`) and applies `ROSTER_DELAY_MS` on top of it
    pub async fn read(path: Option<&Path>) -> Result<Self> {
        Self::read_from(path.unwrap_or(Path::new(FILE_PATH)))
            .await?
            .with_delay_override(std::env::var(DELAY_ENV).ok())
    }

    /// Read from file-system, falling back to defaults when the file is missing
    pub async fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let mut file = tokio::fs::File::open(path).await?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;

        Ok(serde_json::from_str(&contents)?)
    }

    pub fn with_delay_override(mut self, value: Option<String>) -> Result<Self> {
        if let Some(value) = value {
            self.delay_ms = value
                .trim()
                .parse()
                .map_err(|_| eyre!("{DELAY_ENV} must be a number of milliseconds, got `{value}`"))?;
        }

        Ok(self)
    }
}
