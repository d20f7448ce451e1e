//! Diagnostic record types.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// One normalized finding handed back to the host.
///
/// A diagnostic is produced fresh per checker invocation and owned by the
/// host afterwards; nothing in it refers back to the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The region of the raw output this record was extracted from.
    pub span: Span,
    /// Line number exactly as the tool reported it, if any.
    pub line: Option<u32>,
    /// Column number exactly as the tool reported it, if any.
    pub col: Option<u32>,
    /// Severity of a genuine finding. `None` for informational or
    /// suppressed records.
    pub severity: Option<Severity>,
    /// How this record was classified.
    pub category: Category,
    /// Human-readable text. Empty means the record was suppressed and
    /// should be discarded downstream.
    pub message: String,
    /// Token the finding is anchored near, if the tool reported one.
    pub near: Option<String>,
}

impl Diagnostic {
    /// Creates a record for a genuine finding.
    pub fn finding(
        span: Span,
        line: Option<u32>,
        col: Option<u32>,
        severity: Option<Severity>,
        message: impl Into<String>,
        near: Option<String>,
    ) -> Self {
        Self {
            span,
            line,
            col,
            severity,
            category: Category::Lint,
            message: message.into(),
            near,
        }
    }

    /// Creates a pre-classified record for a checker-level failure
    /// (configuration failure or crash).
    ///
    /// These carry line 0 so the host pins them to the top of the file, no
    /// severity, and only the matched banner phrase as the message.
    pub fn tool_failure(span: Span, category: Category, message: impl Into<String>) -> Self {
        Self {
            span,
            line: Some(0),
            col: None,
            severity: None,
            category,
            message: message.into(),
            near: None,
        }
    }

    /// Creates the blanked form of a suppressed record.
    ///
    /// Position, severity and message are cleared; the span is kept so the
    /// record still identifies what was matched. Cardinality is preserved:
    /// one suppressed record replaces one extracted record, and downstream
    /// filtering of empty-message records stays the host's job.
    pub fn suppressed(span: Span) -> Self {
        Self {
            span,
            line: None,
            col: None,
            severity: None,
            category: Category::Lint,
            message: String::new(),
            near: None,
        }
    }

    /// Returns true if this record was blanked by [`Diagnostic::suppressed`].
    pub fn is_suppressed(&self) -> bool {
        self.message.is_empty() && self.severity.is_none() && self.line.is_none()
    }
}

/// The severity of a genuine finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A warning that does not block the checked code.
    Warning,
    /// An error the user is expected to fix.
    Error,
}

impl Severity {
    /// Returns the severity as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a record was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An ordinary finding from the tool's diagnostic listing.
    Lint,
    /// The tool could not locate its configuration file.
    Config,
    /// The tool raised an internal exception.
    Exception,
}

impl Category {
    /// Returns the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lint => "lint",
            Category::Config => "config",
            Category::Exception => "exception",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finding_defaults_to_lint_category() {
        let diag = Diagnostic::finding(
            Span::new(0u32, 4u32),
            Some(3),
            Some(5),
            Some(Severity::Error),
            "Missing semicolon.",
            None,
        );
        assert_eq!(diag.category, Category::Lint);
        assert!(!diag.is_suppressed());
    }

    #[test]
    fn test_tool_failure_pins_to_line_zero() {
        let diag = Diagnostic::tool_failure(
            Span::new(0u32, 10u32),
            Category::Exception,
            "Oops! Something went wrong!",
        );
        assert_eq!(diag.line, Some(0));
        assert_eq!(diag.col, None);
        assert_eq!(diag.severity, None);
        assert!(!diag.is_suppressed());
    }

    #[test]
    fn test_suppressed_is_blank_but_keeps_span() {
        let span = Span::new(7u32, 30u32);
        let diag = Diagnostic::suppressed(span);
        assert!(diag.is_suppressed());
        assert_eq!(diag.span, span);
        assert_eq!(diag.message, "");
    }

    #[test]
    fn test_diagnostic_json_shape() {
        let diag = Diagnostic::finding(
            Span::new(0u32, 4u32),
            Some(1),
            Some(2),
            Some(Severity::Warning),
            "Unexpected console statement.",
            None,
        );
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["line"], 1);
        assert_eq!(json["col"], 2);
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["category"], "lint");
        assert_eq!(json["message"], "Unexpected console statement.");
    }
}
