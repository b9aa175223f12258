use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use tokio_util::sync::CancellationToken;

use crate::{errors::Error, Result};

/// Typed configuration for the archiver.
///
/// The channel reference is the only value the resolver itself consumes;
/// the API credentials and session file belong to whoever constructs the
/// authenticated client behind the `TelegramApi` port.
#[derive(Clone, Debug)]
pub struct Config {
    /// Channel reference: a numeric id or a public handle.
    pub channel: String,

    // MTProto credentials for the session owner.
    pub api_id: i32,
    pub api_hash: String,
    pub session_file: PathBuf,

    /// Deadline for the whole resolve call.
    pub query_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let channel = env_str("TGARCH_CHANNEL")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TGARCH_CHANNEL environment variable is required".to_string())
            })?;

        let api_id = env_i32("TG_API_ID")
            .ok_or_else(|| Error::Config("TG_API_ID environment variable is required".to_string()))?;
        let api_hash = env_str("TG_API_HASH").and_then(non_empty).ok_or_else(|| {
            Error::Config("TG_API_HASH environment variable is required".to_string())
        })?;

        let session_file = env_path("TGARCH_SESSION_FILE")
            .unwrap_or_else(|| PathBuf::from("tgarch.session"));

        let query_timeout =
            Duration::from_millis(env_u64("TGARCH_QUERY_TIMEOUT_MS").unwrap_or(30_000));

        Ok(Self {
            channel,
            api_id,
            api_hash,
            session_file,
            query_timeout,
        })
    }

    /// Token that fires after `query_timeout`, for callers that want the
    /// deadline expressed as cancellation. Requires a running runtime.
    pub fn deadline_token(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let armed = token.clone();
        let timeout = self.query_timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            armed.cancel();
        });
        token
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_i32(key: &str) -> Option<i32> {
    env_str(key).and_then(|s| s.trim().parse::<i32>().ok())
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).map(PathBuf::from)
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
