//! Shared response bodies.
//!
//! Listings use an `{ "items": [...] }` envelope and mutations acknowledge
//! with `{ "ok": true, ... }`.

use serde::Serialize;

/// `{ "items": [...] }` listing envelope.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: Vec<T>,
}

/// Bare `{ "ok": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
