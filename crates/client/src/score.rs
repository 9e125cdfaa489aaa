//! Wire types for the remote scoring service.

use serde::{Deserialize, Serialize};
use trustgate_core::{EvmAddress, TrustResult, TrustScore};

/// JSON body returned by `GET /api/v1/score/{address}`.
///
/// `flags` may be absent; it defaults to empty. The `type` field is mapped to
/// `entity` because `type` is reserved in Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// The address the service scored (echoed back).
    pub address: EvmAddress,
    /// Numeric trust score (0-10); out-of-range values fail to decode.
    pub score: TrustScore,
    /// Risk category label.
    pub risk: String,
    /// Entity type label.
    #[serde(rename = "type")]
    pub entity: String,
    /// Flag strings, in service order.
    #[serde(default)]
    pub flags: Vec<String>,
}

impl ScoreResponse {
    /// Derive the transient domain result against a threshold.
    pub fn into_result(self, min_score: f64) -> TrustResult {
        TrustResult::new(
            self.address,
            self.score,
            self.risk,
            self.entity,
            self.flags,
            min_score,
        )
    }
}
