use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = 250;
const MIN_TICK_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // Show full error text instead of the generic "no data" message.
    pub debug: bool,
    pub export_dir: PathBuf,
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            export_dir: PathBuf::from("."),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl AppConfig {
    /// Reads `.env.local`/`.env` (if present) and then the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug = lookup("WC_DEBUG").map(|v| parse_flag(&v)).unwrap_or(false);
        let export_dir = lookup("WC_EXPORT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(v.trim()))
            .unwrap_or_else(|| PathBuf::from("."));
        let tick_ms = lookup("WC_TICK_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .max(MIN_TICK_MS);
        Self {
            debug,
            export_dir,
            tick_rate: Duration::from_millis(tick_ms),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
