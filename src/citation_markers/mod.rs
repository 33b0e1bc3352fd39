//! Detection and removal of citation markers in LLM-generated text.
//!
//! Generated answers arrive with machine-inserted citation markers: invisible
//! private-use-area sentinels bracketing cited spans (`U+E203 ... U+E204`) and
//! composite blocks (`U+E200 ... U+E201`), sentinel-prefixed turn references
//! (`U+E202 turn3search2`), and degraded textual forms (`citeturn3search2`,
//! bare `turn3search2`). This module is the single home for those shapes:
//!
//! - [`patterns`]: the pattern constants themselves, the stable matching
//!   contract everything else builds on
//! - [`SourceKind`]: the closed six-token source classification
//! - [`extract_turn_references`]: structured extraction with the
//!   standalone → cite → bare precedence order
//! - [`strip_marker_spans`] / [`remove_invalid_citations`] /
//!   [`scrub_marker_fragments`] / [`sanitize_citation_markers`]: removal
//!   passes for renderers
//!
//! Everything here is pure and synchronous; the pattern constants are built
//! once and shared freely across threads.

pub mod errors;
pub mod extract;
pub mod patterns;
pub mod source_kind;
pub mod strip;

#[cfg(test)]
mod tests;

pub use errors::{MarkerError, MarkerResult};
pub use extract::{MarkerShape, TurnReference, extract_turn_references};
pub use patterns::{
    AUX_SENTINEL, CITE_MARKER_RE, CLEANUP_RE, COMPOSITE_CLOSE, COMPOSITE_MARKER_RE,
    COMPOSITE_OPEN, INVALID_CITATION_RE, SIMPLE_TURN_RE, SPAN_CLOSE, SPAN_MARKER_RE, SPAN_OPEN,
    STANDALONE_MARKER_RE, STANDALONE_SENTINEL,
};
pub use source_kind::SourceKind;
pub use strip::{
    InvalidCitationPolicy, remove_invalid_citations, remove_invalid_citations_with,
    sanitize_citation_markers, scrub_marker_fragments, strip_marker_spans,
};
