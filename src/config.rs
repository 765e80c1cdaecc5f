// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf};

use dotenvy::dotenv;

/// Lifetime of a login token unless `JWT_EXPIRATION` says otherwise.
pub const DEFAULT_JWT_EXPIRATION_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    /// Set when no `JWT_SECRET` was given and a random one was generated.
    pub jwt_secret_generated: bool,
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub log_dir: PathBuf,
    /// JSON quiz bank; the built-in quiz is used when unset.
    pub quiz_bank_path: Option<PathBuf>,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            jwt_secret: uuid::Uuid::new_v4().to_string(),
            jwt_secret_generated: true,
            jwt_expiration: DEFAULT_JWT_EXPIRATION_SECS,
            rust_log: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            quiz_bank_path: None,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bind_addr);

        // Tokens signed with a random secret die with the process.
        let (jwt_secret, jwt_secret_generated) = match env::var("JWT_SECRET") {
            Ok(secret) => (secret, false),
            Err(_) => (defaults.jwt_secret, true),
        };

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.jwt_expiration);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let quiz_bank_path = env::var("QUIZ_BANK_PATH").ok().map(PathBuf::from);

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username);
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password);

        Self {
            bind_addr,
            jwt_secret,
            jwt_secret_generated,
            jwt_expiration,
            rust_log,
            log_dir,
            quiz_bank_path,
            admin_username,
            admin_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_secret_is_marked_generated() {
        let config = Config::default();
        assert!(config.jwt_secret_generated);
        assert!(!config.jwt_secret.is_empty());
    }
}
