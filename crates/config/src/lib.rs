mod roster_config;

pub use roster_config::*;

pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DELAY_ENV: &str = "ROSTER_DELAY_MS";
