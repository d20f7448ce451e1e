//! The host's default output parser.
//!
//! External checkers report findings as lines of text. The generic parser
//! here applies a linter's declared pattern to each line of the collected
//! output, one raw match per matching line, and the default extraction turns
//! each raw match into a [`Diagnostic`]. Adapters hook in on both sides
//! through the [`Linter`] trait.

use crate::diagnostic::{Diagnostic, Severity};
use crate::linter::Linter;
use crate::span::Span;
use regex::{Captures, Regex};

/// One raw match from the generic line parser, prior to extraction.
///
/// Line and column are carried as the matched digit strings; the default
/// extraction parses them. Groups absent from the pattern or unmatched on
/// this line are `None`.
#[derive(Debug, Clone)]
pub struct PatternMatch<'a> {
    /// The full matched text.
    pub text: &'a str,
    /// Where the match sits within the raw output.
    pub span: Span,
    /// The `line` capture group.
    pub line: Option<&'a str>,
    /// The `col` capture group.
    pub col: Option<&'a str>,
    /// The `error` capture group.
    pub error: Option<&'a str>,
    /// The `warning` capture group.
    pub warning: Option<&'a str>,
    /// The `message` capture group.
    pub message: Option<&'a str>,
    /// The `near` capture group.
    pub near: Option<&'a str>,
}

/// What a linter's `find_errors` yields for one raw match.
///
/// Pattern matches still go through `split_match`; resolved records are
/// already classified (checker-level failures) and bypass it.
#[derive(Debug, Clone)]
pub enum RawMatch<'a> {
    /// One match of the declared diagnostic pattern.
    Pattern(PatternMatch<'a>),
    /// A pre-classified record; no further extraction happens.
    Resolved(Diagnostic),
}

/// Runs one invocation's collected output through a linter.
///
/// This is the host's whole lint pipeline for one file: raw matches from
/// the linter's `find_errors`, each pattern match extracted by its
/// `split_match`, records returned in output order.
pub fn parse_output(linter: &dyn Linter, output: &str) -> Vec<Diagnostic> {
    let records: Vec<Diagnostic> = linter
        .find_errors(output)
        .into_iter()
        .map(|raw| match raw {
            RawMatch::Resolved(diag) => diag,
            RawMatch::Pattern(m) => linter.split_match(&m),
        })
        .collect();

    log::debug!(
        "{}: extracted {} record(s) from checker output",
        linter.config().name(),
        records.len()
    );

    records
}

/// Applies `pattern` to each line of `output`, in order.
pub fn find_errors<'a>(pattern: &Regex, output: &'a str) -> Vec<RawMatch<'a>> {
    let mut matches = Vec::new();
    let mut offset = 0usize;

    for raw_line in output.split_inclusive('\n') {
        let line = raw_line.trim_end_matches(['\n', '\r']);
        if let Some(caps) = pattern.captures(line) {
            if let Some(whole) = caps.get(0) {
                matches.push(RawMatch::Pattern(PatternMatch {
                    text: whole.as_str(),
                    span: Span::new(
                        (offset + whole.start()) as u32,
                        (offset + whole.end()) as u32,
                    ),
                    line: group(&caps, "line"),
                    col: group(&caps, "col"),
                    error: group(&caps, "error"),
                    warning: group(&caps, "warning"),
                    message: group(&caps, "message"),
                    near: group(&caps, "near"),
                }));
            }
        }
        offset += raw_line.len();
    }

    matches
}

/// Default extraction from one pattern match to a diagnostic record.
///
/// Exactly one of the `error`/`warning` groups matches for a genuine
/// finding; whichever did decides the severity. Line and column are kept as
/// reported, without applying the declared numbering base.
pub fn split_match(m: &PatternMatch<'_>) -> Diagnostic {
    let severity = if m.error.is_some() {
        Some(Severity::Error)
    } else if m.warning.is_some() {
        Some(Severity::Warning)
    } else {
        None
    };

    Diagnostic::finding(
        m.span,
        m.line.and_then(|v| v.parse().ok()),
        m.col.and_then(|v| v.parse().ok()),
        severity,
        m.message.unwrap_or(""),
        m.near.map(str::to_owned),
    )
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name).map(|m| m.as_str())
}
