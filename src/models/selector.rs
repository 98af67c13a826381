use serde::{Deserialize, Serialize};

/// A weighted matching criterion.
///
/// `key` selects the dimension (`licensure` or `jurisdiction`,
/// case-insensitive), `operator` how the dimension is compared and `value`
/// the weight the selector contributes to the required threshold.
/// Unrecognized keys and operators are not errors; they simply contribute
/// no achieved score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Selector {
    pub key: String,
    pub operator: String,
    pub value: i32,
    /// Carried on the wire but not consulted by scoring.
    #[serde(rename = "expiresafterseconds")]
    pub expires_after_seconds: Option<i64>,
}
