//! Chat-facing text templating for trust results.

use trustgate_core::TrustResult;

/// One-line summary of a trust result, used by the action reply and the
/// provider context block.
pub fn summarize(result: &TrustResult) -> String {
    let flags = if result.flags.is_empty() {
        "none".to_string()
    } else {
        result.flags.join(", ")
    };
    format!(
        "Trust score for {}: {}/10 ({} risk, {}). Flags: {}.",
        result.address, result.score, result.risk, result.entity, flags
    )
}
