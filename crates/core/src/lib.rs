//! Domain types and pure logic for the portfolio admin backend.
//!
//! Nothing in this crate performs I/O: the naming convention codec and the
//! featured reassignment planner operate on snapshots handed to them by the
//! remote-store layer in `folio-cloud`.

pub mod assets;
pub mod error;
pub mod featured;
pub mod public_id;
pub mod types;
