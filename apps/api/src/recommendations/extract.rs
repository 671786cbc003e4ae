//! Lenient extraction of a recommendation list from free-form model text.
//!
//! Pure and side-effect free. Any ambiguity yields `None`; the caller owns the fallback.

use crate::recommendations::models::Recommendation;

/// Recovers a JSON array of recommendations from `text`.
///
/// 1. If a fenced block is present, only its contents are considered.
/// 2. The span from the first `[` to the last `]` is taken, when both exist in order.
/// 3. That span must parse as an array of complete records, or nothing is returned.
pub fn extract_recommendations(text: &str) -> Option<Vec<Recommendation>> {
    let body = fenced_block(text).unwrap_or(text);
    let candidate = array_span(body).unwrap_or(body);
    serde_json::from_str::<Vec<Recommendation>>(candidate).ok()
}

/// Contents of the first ``` fence, with an optional `json` tag dropped.
/// Returns `None` for unterminated or empty fences.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")? + 3;
    let rest = &text[open..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let close = rest.find("```")?;
    let inner = rest[..close].trim();
    (!inner.is_empty()).then_some(inner)
}

fn array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}
