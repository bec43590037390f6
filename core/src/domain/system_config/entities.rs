use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted key/value flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SystemConfig {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            key: key.into(),
            value: value.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
