//! Row structs and DTOs.

pub mod external_link;
