/// Primary key type for rows in the links store.
pub type DbId = i64;

/// Timestamp type used across models and remote resources.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
