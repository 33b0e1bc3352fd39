//! Structured extraction of turn references from free text.
//!
//! The three turn-shaped patterns overlap in the text they could match: a
//! standalone marker contains a bare `turnNkindM` sequence, and so does the
//! `cite` variant. This module owns the precedence order (standalone, then
//! cite, then bare) so a looser shape never claims text a more prefixed one
//! already matched.

use std::ops::Range;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::{CITE_MARKER_RE, SIMPLE_TURN_RE, STANDALONE_MARKER_RE};
use super::source_kind::SourceKind;

/// Which textual shape produced a turn reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    /// Sentinel-prefixed (U+E202) marker
    Standalone,
    /// `cite`-prefixed textual variant
    Cite,
    /// Bare `turnNkindM` sequence with no prefix
    BareTurn,
}

/// One turn reference extracted from text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReference {
    /// Index of the generation turn the citation was introduced in
    pub turn: u32,
    /// Category of external reference
    pub source: SourceKind,
    /// Result index within that turn's source list
    pub index: u32,
    /// Shape that matched
    pub shape: MarkerShape,
    /// Byte range of the full match in the input, for callers that splice
    pub span: Range<usize>,
}

/// Extract every turn reference from `text`, in document order.
///
/// Scans with the three turn-shaped patterns in precedence order
/// (standalone → cite → bare turn). A match whose byte range overlaps one
/// already claimed by an earlier pattern is dropped, which is what keeps the
/// bare shape from re-reporting the tail of a standalone or cite marker.
///
/// Matching never fails; a digit run too large for `u32` is logged and that
/// match skipped rather than panicking on hostile input.
///
/// # Arguments
///
/// * `text` - The text to scan
///
/// # Returns
///
/// All extracted references, sorted by position in the input.
#[must_use]
pub fn extract_turn_references(text: &str) -> Vec<TurnReference> {
    // Fast path: every turn shape contains the literal token
    if !text.contains("turn") {
        return Vec::new();
    }

    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut refs = Vec::new();

    collect_shape(text, &STANDALONE_MARKER_RE, MarkerShape::Standalone, &mut claimed, &mut refs);
    collect_shape(text, &CITE_MARKER_RE, MarkerShape::Cite, &mut claimed, &mut refs);
    collect_shape(text, &SIMPLE_TURN_RE, MarkerShape::BareTurn, &mut claimed, &mut refs);

    refs.sort_by_key(|r| r.span.start);
    refs
}

/// Run one pattern over the text, claiming byte ranges as it goes.
fn collect_shape(
    text: &str,
    pattern: &Regex,
    shape: MarkerShape,
    claimed: &mut Vec<Range<usize>>,
    refs: &mut Vec<TurnReference>,
) {
    for caps in pattern.captures_iter(text) {
        // Group 0 always exists on a match
        let whole = caps.get(0).expect("capture group 0 present on every match");
        let span = whole.range();

        if claimed.iter().any(|c| ranges_overlap(c, &span)) {
            continue;
        }

        // Standalone captures the turn digits alone; cite and bare capture
        // the `turnN` token as one unit
        let turn_digits = match shape {
            MarkerShape::Standalone => &caps[1],
            MarkerShape::Cite | MarkerShape::BareTurn => caps[1]
                .strip_prefix("turn")
                .expect("group 1 starts with the literal 'turn'"),
        };

        let (Ok(turn), Ok(index)) = (turn_digits.parse::<u32>(), caps[3].parse::<u32>()) else {
            tracing::warn!(
                marker = whole.as_str(),
                "turn reference digits overflow u32, skipping match"
            );
            continue;
        };

        // The kind group only admits the six literal tokens
        let source = SourceKind::from_str(&caps[2])
            .expect("source kind group is a closed alternation");

        claimed.push(span.clone());
        refs.push(TurnReference { turn, source, index, shape, span });
    }
}

fn ranges_overlap(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
