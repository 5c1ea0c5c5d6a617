//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod external_link_repo;

pub use external_link_repo::ExternalLinkRepo;
