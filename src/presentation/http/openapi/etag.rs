//! Entity tags for the served OpenAPI document.
use axum::http::{HeaderMap, header};

/// Strong ETag over the document bytes: the first 16 hex digits of its BLAKE3
/// hash, quoted.
pub(crate) fn compute_etag(body: &[u8]) -> String {
    let hex = blake3::hash(body).to_hex();
    format!("\"{}\"", &hex.as_str()[..16])
}

/// Opaque part of an entity tag, without the weak prefix and quotes.
fn opaque(token: &str) -> &str {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// `If-None-Match` uses weak comparison: `*` or any listed tag whose opaque
/// value equals the current one.
pub(crate) fn inm_matches(headers: &HeaderMap, current: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let value = value.trim();
    value == "*"
        || value
            .split(',')
            .any(|candidate| opaque(candidate) == opaque(current))
}
