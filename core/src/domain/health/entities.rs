use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub healthy: bool,
    /// Round trip of the database ping in milliseconds.
    pub latency_ms: u64,
}
