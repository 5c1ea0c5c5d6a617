//! Public id naming convention codec.
//!
//! Asset metadata is encoded in the asset's key on the remote host:
//!
//! ```text
//! [<folder>/]<category>__<standard|featured>__<rest_name>
//! ```
//!
//! `rest_name` may itself contain the separator. Decoding is total: a base
//! name with fewer than three segments decodes as a standard asset in the
//! default category whose rest name is the whole base name.
//!
//! ```
//! use folio_core::assets::Category;
//! use folio_core::public_id::{build, parse};
//!
//! let id = build("portfolio", Category::Shorts, true, "launch__cut");
//! assert_eq!(id, "portfolio/shorts__featured__launch__cut");
//!
//! let meta = parse(&id);
//! assert_eq!(meta.category, Category::Shorts);
//! assert!(meta.featured);
//! assert_eq!(meta.rest_name, "launch__cut");
//! ```

use crate::assets::Category;

/// Separator between the category, flag, and rest-name segments.
pub const SEPARATOR: &str = "__";

/// Folder every portfolio asset is uploaded under.
pub const DEFAULT_FOLDER: &str = "portfolio";

const FEATURED_FLAG: &str = "featured";
const STANDARD_FLAG: &str = "standard";

/// Metadata decoded from a public id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIdMeta {
    /// Folder path before the last `/`; empty when there is none.
    pub prefix: String,
    pub category: Category,
    pub featured: bool,
    /// Logical name without the category and flag segments.
    pub rest_name: String,
    /// Everything after the last `/`.
    pub base_name: String,
}

/// Split a public id into its folder prefix and base name.
///
/// The prefix is empty when the id contains no `/`. An id ending in `/` has
/// no base name of its own; the whole id is used instead.
pub fn split_prefix(public_id: &str) -> (&str, &str) {
    match public_id.rsplit_once('/') {
        Some((prefix, "")) => (prefix, public_id),
        Some((prefix, base_name)) => (prefix, base_name),
        None => ("", public_id),
    }
}

/// Decode the naming-convention metadata of a public id. Never fails.
pub fn parse(public_id: &str) -> PublicIdMeta {
    let (prefix, base_name) = split_prefix(public_id);
    let parts: Vec<&str> = base_name.split(SEPARATOR).collect();

    if parts.len() >= 3 {
        let rest = parts[2..].join(SEPARATOR);
        return PublicIdMeta {
            prefix: prefix.to_string(),
            category: Category::from_label_or_default(parts[0]),
            featured: parts[1] == FEATURED_FLAG,
            rest_name: if rest.is_empty() {
                base_name.to_string()
            } else {
                rest
            },
            base_name: base_name.to_string(),
        };
    }

    PublicIdMeta {
        prefix: prefix.to_string(),
        category: Category::default(),
        featured: false,
        rest_name: base_name.to_string(),
        base_name: base_name.to_string(),
    }
}

/// Encode metadata into a public id. An empty prefix produces an id with no
/// folder component.
pub fn build(prefix: &str, category: Category, featured: bool, rest_name: &str) -> String {
    let flag = if featured { FEATURED_FLAG } else { STANDARD_FLAG };
    let name = format!("{category}{SEPARATOR}{flag}{SEPARATOR}{rest_name}");
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}/{name}")
    }
}

/// Place a bare public id under [`DEFAULT_FOLDER`]. Ids that already carry a
/// folder are returned unchanged.
pub fn normalize(public_id: &str) -> String {
    if public_id.contains('/') {
        public_id.to_string()
    } else {
        format!("{DEFAULT_FOLDER}/{public_id}")
    }
}
