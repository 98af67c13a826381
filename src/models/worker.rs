use serde::{Deserialize, Serialize};

/// Worker profile as supplied on the wire.
///
/// Both `certification_ids` and `jurisdiction_ids` are comma-separated
/// code lists. `id` identifies the worker to the caller and plays no part
/// in scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Worker {
    pub id: String,
    #[serde(rename = "certificationids")]
    pub certification_ids: String,
    #[serde(rename = "jurisdictionids")]
    pub jurisdiction_ids: String,
    /// Carried on the wire but not consulted by scoring.
    #[serde(rename = "highpriority")]
    pub high_priority: bool,
}
