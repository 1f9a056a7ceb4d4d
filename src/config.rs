use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::auth::token::generate_token_default;

pub struct Config {
    pub port: u16,
    pub bind_addr: String,
    pub db_path: String,
    pub max_workers: usize,
    pub jwt_secret: Vec<u8>,
    pub token_ttl_secs: i64,
    pub require_auth_for_reads: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            bind_addr: try_load("BIND_ADDR", "127.0.0.1"),
            db_path: try_load("DB_PATH", "agencia.sqlite3"),
            max_workers: try_load("MAX_WORKERS", "8"),
            jwt_secret: load_secret("JWT_SECRET"),
            token_ttl_secs: try_load("TOKEN_TTL_SECS", "3600"),
            require_auth_for_reads: try_load("REQUIRE_AUTH_FOR_READS", "false"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Settings for the blocking API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub timeout_secs: u64,
    pub storage_path: PathBuf,
}

impl ClientConfig {
    pub fn load() -> Self {
        Self {
            api_base: try_load("AGENCIA_API_URL", "http://127.0.0.1:3000/api"),
            timeout_secs: try_load("AGENCIA_API_TIMEOUT_SECS", "15"),
            storage_path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("agencia_autos")
        .join("client_state.json")
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.parse() {
        Ok(v) => v,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            parse_default(default)
        }
    }
}

fn parse_default<T: FromStr>(default: &str) -> T
where
    T::Err: Display,
{
    match default.parse() {
        Ok(v) => v,
        Err(e) => panic!("built-in default {default:?} does not parse: {e}"),
    }
}

fn load_secret(key: &str) -> Vec<u8> {
    match env::var(key) {
        Ok(s) if !s.trim().is_empty() => s.trim().as_bytes().to_vec(),
        _ => {
            warn!("{key} not set, generating an ephemeral signing key; tokens will not survive a restart");
            generate_token_default().into_bytes()
        }
    }
}
