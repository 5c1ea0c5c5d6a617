use folio_cloud::config::CloudinaryConfig;

use crate::auth::AdminCredentials;

/// Which [`folio_cloud::AssetHost`] implementation backs the asset endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetBackend {
    /// Cloudinary over HTTP; requires [`CloudinaryConfig`].
    Cloudinary,
    /// In-process store that starts empty; for local development.
    Memory,
}

/// Server configuration loaded from environment variables.
///
/// Collaborator credentials are optional: the server starts without them and
/// the affected endpoints answer with a configuration error.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `FRONTEND_ORIGIN`.
    /// A `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// Shared-secret admin credentials.
    pub admin: Option<AdminCredentials>,
    pub asset_backend: AssetBackend,
    /// Asset host account.
    pub cloudinary: Option<CloudinaryConfig>,
    /// Postgres URL of the external links store.
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default      |
    /// |-------------------|--------------|
    /// | `HOST`            | `0.0.0.0`    |
    /// | `PORT`            | `3000`       |
    /// | `FRONTEND_ORIGIN` | `*`          |
    /// | `ADMIN_EMAIL`     | unset        |
    /// | `ADMIN_PASSWORD`  | unset        |
    /// | `ASSET_BACKEND`   | `cloudinary` |
    /// | `DATABASE_URL`    | unset        |
    ///
    /// Cloudinary variables are documented on [`CloudinaryConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "*".into()),
        );

        let asset_backend = match std::env::var("ASSET_BACKEND").as_deref() {
            Ok("memory") => AssetBackend::Memory,
            Ok("cloudinary") | Err(_) => AssetBackend::Cloudinary,
            Ok(other) => panic!("ASSET_BACKEND must be 'cloudinary' or 'memory', got '{other}'"),
        };

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty());

        Self {
            host,
            port,
            cors_origins,
            admin: AdminCredentials::from_env(),
            asset_backend,
            cloudinary: CloudinaryConfig::from_env(),
            database_url,
        }
    }

    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Split a comma-separated origin list, dropping blanks. An empty list
/// means any origin.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
