use std::sync::Arc;

use folio_cloud::config::CloudinaryConfig;
use folio_cloud::AssetHost;
use folio_core::error::CoreError;
use folio_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Collaborators are `None` when their configuration is
/// absent; accessors turn that into a configuration error.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Remote asset host client, built once at startup.
    pub asset_host: Option<Arc<dyn AssetHost>>,
    /// Links store pool.
    pub pool: Option<DbPool>,
}

impl AppState {
    pub fn asset_host(&self) -> Result<&dyn AssetHost, CoreError> {
        self.asset_host
            .as_deref()
            .ok_or_else(|| CoreError::Config("Cloudinary config missing".into()))
    }

    pub fn cloudinary(&self) -> Result<&CloudinaryConfig, CoreError> {
        self.config
            .cloudinary
            .as_ref()
            .ok_or_else(|| CoreError::Config("Cloudinary config missing".into()))
    }

    pub fn pool(&self) -> Result<&DbPool, CoreError> {
        self.pool
            .as_ref()
            .ok_or_else(|| CoreError::Config("External links store not configured".into()))
    }
}
