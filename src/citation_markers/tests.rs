//! Tests for citation marker extraction and stripping.

use std::str::FromStr;

use super::errors::MarkerError;
use super::extract::{MarkerShape, extract_turn_references};
use super::source_kind::SourceKind;
use super::strip::{
    InvalidCitationPolicy, remove_invalid_citations_with, sanitize_citation_markers,
    scrub_marker_fragments, strip_marker_spans,
};

#[test]
fn test_source_kind_round_trips_all_tokens() {
    for kind in SourceKind::ALL {
        let parsed = SourceKind::from_str(kind.as_str()).expect("token parses back");
        assert_eq!(parsed, kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_source_kind_rejects_unknown_token() {
    let err = SourceKind::from_str("audio").unwrap_err();
    assert_eq!(err, MarkerError::UnknownSourceKind("audio".to_string()));
}

#[test]
fn test_source_kind_is_case_sensitive() {
    // No locale-aware folding: the token set is lowercase only
    assert!(SourceKind::from_str("Search").is_err());
    assert!(SourceKind::from_str("SEARCH").is_err());
}

#[test]
fn test_extract_applies_precedence_across_shapes() {
    let text = "\u{e202}turn1search2 citeturn3news4 turn5ref6";
    let refs = extract_turn_references(text);

    assert_eq!(refs.len(), 3, "one reference per marker, no double counting");

    assert_eq!(refs[0].shape, MarkerShape::Standalone);
    assert_eq!((refs[0].turn, refs[0].source, refs[0].index), (1, SourceKind::Search, 2));

    assert_eq!(refs[1].shape, MarkerShape::Cite);
    assert_eq!((refs[1].turn, refs[1].source, refs[1].index), (3, SourceKind::News, 4));

    assert_eq!(refs[2].shape, MarkerShape::BareTurn);
    assert_eq!((refs[2].turn, refs[2].source, refs[2].index), (5, SourceKind::Ref, 6));
}

#[test]
fn test_extract_does_not_rereport_prefixed_markers_as_bare() {
    // The bare shape alone would match inside both prefixed forms
    let refs = extract_turn_references("\u{e202}turn7image8 and citeturn9video0");
    let bare: Vec<_> = refs.iter().filter(|r| r.shape == MarkerShape::BareTurn).collect();
    assert!(bare.is_empty(), "prefixed markers claimed their text first");
    assert_eq!(refs.len(), 2);
}

#[test]
fn test_extract_reports_spans_in_document_order() {
    let text = "turn5ref6 then \u{e202}turn1search2";
    let refs = extract_turn_references(text);
    assert_eq!(refs.len(), 2);
    assert!(refs[0].span.start < refs[1].span.start);
    // The span covers the full match, sentinel included
    assert_eq!(&text[refs[1].span.clone()], "\u{e202}turn1search2");
}

#[test]
fn test_extract_matches_inside_words() {
    // Bare shape is not word-boundary aware, by contract
    let refs = extract_turn_references("Saturn5ref2 lifted off");
    assert_eq!(refs.len(), 1);
    assert_eq!((refs[0].turn, refs[0].source, refs[0].index), (5, SourceKind::Ref, 2));
}

#[test]
fn test_extract_skips_digit_overflow() {
    // u32::MAX + 1; hostile input must not panic the extractor
    let refs = extract_turn_references("turn4294967296search1");
    assert!(refs.is_empty());

    // A sane neighbor still extracts
    let refs = extract_turn_references("turn4294967296search1 turn2file3");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].turn, 2);
}

#[test]
fn test_extract_ignores_markerless_text() {
    assert!(extract_turn_references("no markers here").is_empty());
    assert!(extract_turn_references("").is_empty());
}

#[test]
fn test_strip_marker_spans_removes_both_bracket_kinds() {
    let text = "A\u{e203}cited\u{e204} B\u{e200}composite\u{e201} C";
    assert_eq!(strip_marker_spans(text), "A B C");
}

#[test]
fn test_strip_marker_spans_leaves_plain_text_alone() {
    assert_eq!(strip_marker_spans("plain text"), "plain text");
}

#[test]
fn test_invalid_citation_policies() {
    // Marker carries its own spacing: removal collapses cleanly
    let spaced = "hello   \u{e202}turn3video1 world";
    assert_eq!(
        remove_invalid_citations_with(spaced, InvalidCitationPolicy::Remove),
        "hello world"
    );

    // Marker glues two words: a single space keeps them apart
    let glued = "hello\u{e202}turn3video1world";
    assert_eq!(
        remove_invalid_citations_with(glued, InvalidCitationPolicy::SingleSpace),
        "hello world"
    );
    assert_eq!(
        remove_invalid_citations_with(glued, InvalidCitationPolicy::Remove),
        "helloworld"
    );
}

#[test]
fn test_scrub_marker_fragments_is_greedy_token_removal() {
    // Strips keyword tokens even inside unrelated words; that is the
    // documented contract for the cleanup pattern
    let text = "\u{e200}cite\u{e201} turn \u{e203}x\u{e204}\u{e206} saturn recited";
    assert_eq!(scrub_marker_fragments(text), "  x sa red");
}

#[test]
fn test_sanitize_is_identity_on_marker_free_text() {
    let prose = "An ordinary sentence, nothing to remove.";
    assert_eq!(sanitize_citation_markers(prose), prose);
}

#[test]
fn test_sanitize_removes_every_marker_shape() {
    let text = "A\u{e203}x\u{e204} B\u{e200}y\u{e201} C \u{e202}turn1search2 citeturn2news3 turn4file5 D";
    let cleaned = sanitize_citation_markers(text);

    assert!(!cleaned.contains('\u{e200}'));
    assert!(!cleaned.contains('\u{e202}'));
    assert!(!cleaned.contains('\u{e203}'));
    assert!(!cleaned.contains("cite"));
    assert!(!cleaned.contains("turn"));
    // Standalone removal is whitespace-safe; textual variants just vanish
    assert_eq!(cleaned, "A B C   D");
}
