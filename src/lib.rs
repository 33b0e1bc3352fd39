pub mod citation_markers;

pub use citation_markers::{
    MarkerError, MarkerResult, MarkerShape, SourceKind, TurnReference, extract_turn_references,
};

// Pattern constants: the stable matching contract
pub use citation_markers::patterns::{
    AUX_SENTINEL, CITE_MARKER_RE, CLEANUP_RE, COMPOSITE_CLOSE, COMPOSITE_MARKER_RE,
    COMPOSITE_OPEN, INVALID_CITATION_RE, SIMPLE_TURN_RE, SPAN_CLOSE, SPAN_MARKER_RE, SPAN_OPEN,
    STANDALONE_MARKER_RE, STANDALONE_SENTINEL,
};

// Removal passes
pub use citation_markers::strip::{
    InvalidCitationPolicy, remove_invalid_citations, remove_invalid_citations_with,
    sanitize_citation_markers, scrub_marker_fragments, strip_marker_spans,
};

/// Remove every citation marker shape from generated text.
///
/// Shorthand for [`sanitize_citation_markers`].
#[must_use]
pub fn sanitize(text: &str) -> String {
    citation_markers::sanitize_citation_markers(text)
}
