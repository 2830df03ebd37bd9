//! Shared query parameter helpers for API handlers.

/// All `sort` values in the order they appeared.
///
/// Takes raw query pairs so repeated keys (`?sort=a&sort=b,desc`) survive.
pub fn sort_values(pairs: &[(String, String)]) -> Vec<&str> {
    pairs
        .iter()
        .filter(|(key, _)| key == "sort")
        .map(|(_, value)| value.as_str())
        .collect()
}
