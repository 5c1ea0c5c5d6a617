use std::fmt;

use crate::signing::SignatureAlgorithm;

/// Default base URL of the Cloudinary REST API.
pub const DEFAULT_API_URL: &str = "https://api.cloudinary.com";

/// Account credentials for the asset host.
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Base URL without trailing slash (default: [`DEFAULT_API_URL`]).
    pub api_url: String,
    /// Digest for signed requests; must match the account setting.
    pub signature_algorithm: SignatureAlgorithm,
}

impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("signature_algorithm", &self.signature_algorithm)
            .finish()
    }
}

impl CloudinaryConfig {
    /// Load credentials from the environment.
    ///
    /// | Env Var                 | Default                      |
    /// |-------------------------|------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME` | required                     |
    /// | `CLOUDINARY_API_KEY`    | required                     |
    /// | `CLOUDINARY_API_SECRET` | required                     |
    /// | `CLOUDINARY_API_URL`    | `https://api.cloudinary.com` |
    /// | `CLOUDINARY_SIGNATURE_ALGORITHM` | `sha1` (or `sha256`) |
    ///
    /// Returns `None` when any required variable is unset or empty, so the
    /// server can start and report the gap per request. Panics on an
    /// unknown signature algorithm.
    pub fn from_env() -> Option<Self> {
        let required = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let cloud_name = required("CLOUDINARY_CLOUD_NAME")?;
        let api_key = required("CLOUDINARY_API_KEY")?;
        let api_secret = required("CLOUDINARY_API_SECRET")?;
        let api_url = std::env::var("CLOUDINARY_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();
        let signature_algorithm = std::env::var("CLOUDINARY_SIGNATURE_ALGORITHM")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse()
                    .unwrap_or_else(|e| panic!("CLOUDINARY_SIGNATURE_ALGORITHM: {e}"))
            })
            .unwrap_or_default();

        Some(Self {
            cloud_name,
            api_key,
            api_secret,
            api_url,
            signature_algorithm,
        })
    }
}
