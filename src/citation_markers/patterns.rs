//! The citation marker pattern set.
//!
//! LLM responses embed machine-inserted citations as private-use-area (PUA)
//! sentinel characters bracketing turn references, plus looser textual
//! variants (`citeturn3search2`, bare `turn3search2`). Each pattern here is a
//! process-wide constant; `find_iter`/`captures_iter`/`replace_all` give
//! find-all semantics with no shared scan state, so the constants are safe to
//! use from any number of threads at once.
//!
//! Capture group order and count are a stability contract: callers
//! destructure matches positionally.

use regex::Regex;
use std::sync::LazyLock;

/// Opens a composite citation block.
pub const COMPOSITE_OPEN: char = '\u{e200}';
/// Closes a composite citation block.
pub const COMPOSITE_CLOSE: char = '\u{e201}';
/// Prefixes a standalone turn reference.
pub const STANDALONE_SENTINEL: char = '\u{e202}';
/// Opens a cited span of text.
pub const SPAN_OPEN: char = '\u{e203}';
/// Closes a cited span of text.
pub const SPAN_CLOSE: char = '\u{e204}';
/// Auxiliary sentinel; never brackets content but shows up as leftover
/// residue, so the cleanup pattern strips it too.
pub const AUX_SENTINEL: char = '\u{e206}';

/// Matches a cited span: U+E203, shortest run of any characters, U+E204.
///
/// Non-greedy, so back-to-back spans yield one match each rather than a
/// single match swallowing everything between the first open and the last
/// close. No capture groups; the whole match is the unit of removal.
pub static SPAN_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{E203}.*?\x{E204}").expect("SPAN_MARKER_RE: hardcoded regex is valid")
});

/// Matches a composite citation block: U+E200, shortest run, U+E201.
///
/// Same non-greedy policy as [`SPAN_MARKER_RE`]. No capture groups.
pub static COMPOSITE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{E200}.*?\x{E201}").expect("COMPOSITE_MARKER_RE: hardcoded regex is valid")
});

/// Matches a standalone turn reference: U+E202 then `turn<digits><kind><digits>`.
///
/// Capture groups:
/// 1. turn number digits
/// 2. source kind (`search|image|news|video|ref|file`)
/// 3. result number digits
///
/// The leading sentinel is required; bare `turn3search2` text does not match
/// (that is [`SIMPLE_TURN_RE`]'s job).
pub static STANDALONE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{E202}turn(\d+)(search|image|news|video|ref|file)(\d+)")
        .expect("STANDALONE_MARKER_RE: hardcoded regex is valid")
});

/// Matches the textual `cite` variant: `citeturn<digits><kind><digits>`.
///
/// Capture groups:
/// 1. the `turn<digits>` token as one unit
/// 2. source kind
/// 3. result number digits
///
/// Differs from [`STANDALONE_MARKER_RE`] in requiring the `cite` prefix
/// instead of the sentinel, and in capturing `turn` + number together.
pub static CITE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"cite(turn\d+)(search|image|news|video|ref|file)(\d+)")
        .expect("CITE_MARKER_RE: hardcoded regex is valid")
});

/// Matches a bare turn reference with no prefix at all.
///
/// Capture groups as in [`CITE_MARKER_RE`]: (`turn<digits>`, kind, result).
///
/// Loosest of the three turn shapes, and deliberately not word-boundary
/// aware: `Saturn5ref2` contains a match. When scanning one text for all
/// three shapes, apply [`STANDALONE_MARKER_RE`] first, then
/// [`CITE_MARKER_RE`], then this, so a looser shape never claims text a more
/// prefixed one already owns (see `extract_turn_references`).
pub static SIMPLE_TURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(turn\d+)(search|image|news|video|ref|file)(\d+)")
        .expect("SIMPLE_TURN_RE: hardcoded regex is valid")
});

/// Matches any single leftover marker fragment: one of the six sentinel
/// characters, or the literal token `cite`, or the literal token `turn`.
///
/// Used to scrub residue after structured extraction has already pulled out
/// the data it needed. Greedy token removal, not word-boundary aware:
/// replace-all turns `saturn` into `sa` and `recited` into `red`. That is
/// intended behavior for this pattern; do not run it over prose you mean to
/// keep.
pub static CLEANUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{E200}|\x{E201}|\x{E202}|\x{E203}|\x{E204}|\x{E206}|cite|turn")
        .expect("CLEANUP_RE: hardcoded regex is valid")
});

/// Matches a standalone turn reference together with the whitespace run
/// before it, capturing only the source kind.
///
/// Consuming the leading whitespace lets a caller delete the match (or
/// replace it with a single space) without leaving a double-space artifact
/// where the marker used to sit.
pub static INVALID_CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\x{E202}turn\d+(search|news|image|video|ref|file)\d+")
        .expect("INVALID_CITATION_RE: hardcoded regex is valid")
});
