//! Decoder settings.

/// Env var that turns on per-call logging.
pub const LOG_CALLS_ENV: &str = "VKSTREAM_LOG_CALLS";

fn truthy(raw: &str) -> bool {
    let v = raw.trim();
    v == "1"
        || v.eq_ignore_ascii_case("true")
        || v.eq_ignore_ascii_case("yes")
        || v.eq_ignore_ascii_case("on")
}

fn env_var_truthy(name: &str) -> bool {
    std::env::var(name).is_ok_and(|raw| truthy(&raw))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Log every call with its parameters at `info` level.
    pub log_calls: bool,
    /// The first buffer starts with a created-handle block from a snapshot.
    pub for_snapshot_load: bool,
}

impl DecoderConfig {
    pub fn from_env() -> Self {
        Self {
            log_calls: env_var_truthy(LOG_CALLS_ENV),
            ..Self::default()
        }
    }
}
