//! Replace-all helpers for removing citation markers from text.
//!
//! Each helper is a pure `&str -> String` pass over the input. Fast-path
//! guards skip the regex work entirely when the relevant sentinel is absent,
//! which is the common case for ordinary prose.

use serde::{Deserialize, Serialize};

use super::patterns::{
    CITE_MARKER_RE, CLEANUP_RE, COMPOSITE_MARKER_RE, COMPOSITE_OPEN, INVALID_CITATION_RE,
    SIMPLE_TURN_RE, SPAN_MARKER_RE, SPAN_OPEN, STANDALONE_SENTINEL,
};

/// What to put where an invalid standalone citation (and the whitespace run
/// before it) used to be.
///
/// The matched text already includes the marker's leading whitespace, so:
///
/// - [`Remove`](InvalidCitationPolicy::Remove) is right when the marker sits
///   between words with its own spacing (`"hello   ⟨marker⟩ world"` →
///   `"hello world"`).
/// - [`SingleSpace`](InvalidCitationPolicy::SingleSpace) is right when
///   deleting the marker would glue two words together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidCitationPolicy {
    /// Replace the match (marker plus leading whitespace) with nothing
    #[default]
    Remove,
    /// Replace the match with exactly one space
    SingleSpace,
}

/// Remove every cited span and composite block, delimiters included.
///
/// Non-greedy bracketing means adjacent spans are removed one at a time, so
/// text between two spans survives.
#[must_use]
pub fn strip_marker_spans(text: &str) -> String {
    if !text.contains(SPAN_OPEN) && !text.contains(COMPOSITE_OPEN) {
        return text.to_string();
    }
    let stripped = SPAN_MARKER_RE.replace_all(text, "");
    COMPOSITE_MARKER_RE.replace_all(&stripped, "").into_owned()
}

/// Remove standalone citation markers under the default policy.
///
/// See [`remove_invalid_citations_with`] for policy control.
#[must_use]
pub fn remove_invalid_citations(text: &str) -> String {
    remove_invalid_citations_with(text, InvalidCitationPolicy::default())
}

/// Remove standalone citation markers, consuming each marker's leading
/// whitespace run so the result has no double-space artifact.
#[must_use]
pub fn remove_invalid_citations_with(text: &str, policy: InvalidCitationPolicy) -> String {
    if !text.contains(STANDALONE_SENTINEL) {
        return text.to_string();
    }
    let replacement = match policy {
        InvalidCitationPolicy::Remove => "",
        InvalidCitationPolicy::SingleSpace => " ",
    };
    INVALID_CITATION_RE.replace_all(text, replacement).into_owned()
}

/// Scrub leftover marker fragments: the six sentinel characters and the
/// literal tokens `cite` and `turn`.
///
/// Greedy token removal: `saturn` becomes `sa`. Run this only on text that
/// has already been through structured extraction, never on prose you mean
/// to keep intact.
#[must_use]
pub fn scrub_marker_fragments(text: &str) -> String {
    CLEANUP_RE.replace_all(text, "").into_owned()
}

/// Remove every citation marker shape from `text`.
///
/// Composition a renderer wants before displaying generated text:
///
/// 1. Cited spans and composite blocks go first (their sentinels bracket
///    content that stays marker-free afterwards).
/// 2. Standalone markers go with their leading whitespace.
/// 3. `citeturnNkindM` and bare `turnNkindM` sequences are deleted in that
///    order, so the cite prefix comes out with its marker.
///
/// Does not run [`scrub_marker_fragments`]: the fragment scrub is too blunt
/// for prose and stays a separate, opt-in pass.
///
/// Marker-free input comes back byte-identical.
#[must_use]
pub fn sanitize_citation_markers(text: &str) -> String {
    let text = strip_marker_spans(text);
    let text = remove_invalid_citations(&text);
    if !text.contains("turn") {
        return text;
    }
    let text = CITE_MARKER_RE.replace_all(&text, "");
    SIMPLE_TURN_RE.replace_all(&text, "").into_owned()
}
