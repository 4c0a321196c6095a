//! Application configuration loaded from environment variables.
//!
//! Every variable is optional; the defaults describe the canonical deployment
//! (public redirects on `:4242`, the admin page on the tailnet node `tendsto`
//! over HTTPS).
//!
//! ## Variables
//!
//! - `DATABASE_PATH` - SQLite file, created if absent (default: `./urls.db`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `PUBLIC_LISTEN` - Public redirect listener (default: `0.0.0.0:4242`)
//! - `ROOT_URL` - Where `/` on the public listener redirects to
//! - `ADMIN_HOSTNAME` - Tailnet node name of the admin listener (default: `tendsto`)
//! - `ADMIN_PORT` - Admin listener port (default: 443)
//! - `ADMIN_LISTEN` - Explicit tailnet `ip:port` to bind instead of resolving the hostname
//! - `ADMIN_TLS_CERT` / `ADMIN_TLS_KEY` - Node certificate (default: `<hostname>.crt` / `<hostname>.key`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Target of `/` on the public listener.
pub const DEFAULT_ROOT_URL: &str = "https://github.com/tendstofortytwo/tendsto";

/// Where and how the admin listener joins the overlay network.
#[derive(Debug, Clone)]
pub struct AdminEndpoint {
    /// Node hostname the overlay network publishes for this service.
    pub hostname: String,
    pub port: u16,
    /// Explicit overlay `ip:port`; when set, no hostname resolution happens.
    pub listen: Option<String>,
    pub tls_cert: PathBuf,
    pub tls_key: PathBuf,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub db_max_connections: u32,
    pub public_listen: String,
    pub root_url: String,
    pub admin: AdminEndpoint,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./urls.db"));

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let public_listen =
            env::var("PUBLIC_LISTEN").unwrap_or_else(|_| "0.0.0.0:4242".to_string());
        let root_url = env::var("ROOT_URL").unwrap_or_else(|_| DEFAULT_ROOT_URL.to_string());

        let admin = Self::load_admin_endpoint();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_path,
            db_max_connections,
            public_listen,
            root_url,
            admin,
            log_level,
            log_format,
        })
    }

    /// Loads the admin endpoint; certificate paths follow the file names the
    /// overlay daemon writes for the node (`<hostname>.crt` / `<hostname>.key`).
    fn load_admin_endpoint() -> AdminEndpoint {
        let hostname = env::var("ADMIN_HOSTNAME").unwrap_or_else(|_| "tendsto".to_string());

        let port = env::var("ADMIN_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(443);

        let listen = env::var("ADMIN_LISTEN").ok().filter(|v| !v.is_empty());

        let tls_cert = env::var("ADMIN_TLS_CERT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(format!("{hostname}.crt")));
        let tls_key = env::var("ADMIN_TLS_KEY")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(format!("{hostname}.key")));

        AdminEndpoint {
            hostname,
            port,
            listen,
            tls_cert,
            tls_key,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_path` or `root_url` is empty
    /// - `db_max_connections` is 0
    /// - a listen address is not `host:port`
    /// - the admin hostname is empty or the admin port is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            anyhow::bail!("DATABASE_PATH must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if !self.public_listen.contains(':') {
            anyhow::bail!(
                "PUBLIC_LISTEN must be in format 'host:port', got '{}'",
                self.public_listen
            );
        }

        if self.root_url.is_empty() {
            anyhow::bail!("ROOT_URL must not be empty");
        }

        if self.admin.hostname.is_empty() {
            anyhow::bail!("ADMIN_HOSTNAME must not be empty");
        }

        if self.admin.port == 0 {
            anyhow::bail!("ADMIN_PORT must be greater than 0");
        }

        if let Some(ref listen) = self.admin.listen
            && !listen.contains(':')
        {
            anyhow::bail!("ADMIN_LISTEN must be in format 'ip:port', got '{}'", listen);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database: {}", self.database_path.display());
        tracing::info!("  Public listener: {}", self.public_listen);
        tracing::info!("  Root redirect: {}", self.root_url);
        match self.admin.listen {
            Some(ref listen) => tracing::info!("  Admin listener: {} (explicit)", listen),
            None => tracing::info!(
                "  Admin listener: {}:{} (tailnet)",
                self.admin.hostname,
                self.admin.port
            ),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
