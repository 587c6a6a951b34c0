//! Secret reference encoding.
//!
//! Persisted entity fields carry either an inline value or an opaque
//! reference of the form `secret:<secretId>`. The functions here are the
//! only place that knows about the marker, so encoding stays backend
//! agnostic: any [`crate::store::SecretStore`] sees plain secret ids.

/// Prefix marking a value as externally stored.
pub const SECRET_PREFIX: &str = "secret:";

/// Sentinel written to the backend when the platform explicitly stores an
/// absent value. A true null is never persisted so that a later existence
/// check still finds the entry. Callers must not use this literal as a
/// genuine secret value.
pub const NULL_SECRET: &str = "null";

/// Separator between the base secret id and the derived field segment.
const ID_SEPARATOR: char = '.';

/// True if `value` is already an externalized reference.
pub fn is_reference(value: &str) -> bool {
    value.starts_with(SECRET_PREFIX)
}

/// Encode a secret id as a reference string.
pub fn encode(secret_id: &str) -> String {
    format!("{}{}", SECRET_PREFIX, secret_id)
}

/// Recover the secret id from a reference string.
///
/// Returns `None` for inline values. Round-trips with [`encode`]: the id
/// recovered here is exactly the key the value was stored under.
pub fn decode(value: &str) -> Option<&str> {
    value.strip_prefix(SECRET_PREFIX)
}

/// Build a backend key from id segments.
///
/// Segments are lowercased and joined with `.`; empty segments are skipped
/// so a missing base id never produces a dangling separator.
pub fn build_secret_id<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut id = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !id.is_empty() {
            id.push(ID_SEPARATOR);
        }
        id.push_str(&part.to_lowercase());
    }
    id
}
