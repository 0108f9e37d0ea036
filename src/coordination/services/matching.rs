//! Capability mention detection in coordinator replies.

use crate::capability::domain::CapabilityName;

/// Returns whether `response` names `capability` as a whole token.
///
/// Matching ignores ASCII case. A mention only counts when the characters
/// either side of it are not ASCII alphanumerics or `_`, so `tool_git` is
/// not found inside `tool_github`.
#[must_use]
pub fn mentions_capability(response: &str, capability: &CapabilityName) -> bool {
    let haystack = response.to_ascii_lowercase();
    let needle = capability.as_str();

    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack
            .get(..start)
            .and_then(|prefix| prefix.chars().next_back());
        let after = haystack
            .get(start.saturating_add(matched.len())..)
            .and_then(|suffix| suffix.chars().next());
        !before.is_some_and(is_name_char) && !after.is_some_and(is_name_char)
    })
}

const fn is_name_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}
