use serde::{Deserialize, Serialize};

/// Job requirements as supplied on the wire.
///
/// `certification_id` holds a comma-separated list of licensure codes the
/// job requires; `jurisdiction_id` is a single jurisdiction code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(rename = "certificationid")]
    pub certification_id: String,
    #[serde(rename = "jurisdictionid")]
    pub jurisdiction_id: String,
    /// Carried on the wire but not consulted by scoring.
    #[serde(rename = "highpriority")]
    pub high_priority: bool,
}
