//! Client configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use battle_runtime::RuntimeConfig;

/// Configuration required to bootstrap the client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Directory holding `arena.toml`, `parts.ron` and `opponents.ron`.
    pub data_dir: Option<PathBuf>,
    /// Names both the log directory and the save slot.
    pub session_id: String,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (on top of the `ARENA_*` runtime ones):
    /// - `ARENA_DATA_DIR` - Content directory (default: bundled content)
    /// - `ARENA_SESSION_ID` - Session identifier (default: `session_<unix time>`)
    pub fn from_env() -> Self {
        let session_id = env::var("ARENA_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(default_session_id);

        Self {
            runtime: RuntimeConfig::from_env(),
            data_dir: env::var("ARENA_DATA_DIR").ok().map(PathBuf::from),
            session_id,
        }
    }
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
