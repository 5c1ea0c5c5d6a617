//! Remote asset host integration.
//!
//! - [`host::AssetHost`] -- the seam every remote call goes through.
//! - [`cloudinary::CloudinaryClient`] -- production implementation over HTTP.
//! - [`memory::MemoryAssetHost`] -- in-process implementation for tests and
//!   local development.
//! - [`lister::ResourceLister`], [`executor::RenameExecutor`] and
//!   [`reassign::reassign_featured`] -- the featured reassignment pipeline.

pub mod cloudinary;
pub mod config;
pub mod error;
pub mod executor;
pub mod host;
pub mod lister;
pub mod memory;
pub mod reassign;
pub mod signing;

pub use error::HostError;
pub use host::AssetHost;
