//! Linter declaration records and the adapter extension point.

use crate::diagnostic::Diagnostic;
use crate::error::ConfigError;
use crate::parse::{self, PatternMatch, RawMatch};
use regex::Regex;

/// Source syntaxes a linter can declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    Javascript,
    Html,
    Json,
}

impl Syntax {
    /// Returns the syntax as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Syntax::Javascript => "javascript",
            Syntax::Html => "html",
            Syntax::Json => "json",
        }
    }
}

impl std::fmt::Display for Syntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capture groups every diagnostic pattern must name.
const REQUIRED_GROUPS: [&str; 5] = ["line", "col", "error", "warning", "message"];

/// A linter's immutable declaration record.
///
/// Everything the host needs to drive one external checker: how to invoke
/// it, which syntaxes activate it, how its output lines are shaped, and how
/// its reported positions are numbered. Built once by the adapter, handed to
/// the host at registration time, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LinterConfig {
    name: &'static str,
    syntaxes: &'static [Syntax],
    cmd: &'static [&'static str],
    npm_package: Option<&'static str>,
    pattern: Regex,
    line_col_base: (u32, u32),
    selectors: Vec<(Syntax, &'static str)>,
}

impl LinterConfig {
    /// Builds a declaration record, compiling and validating the diagnostic
    /// pattern.
    ///
    /// The pattern must name the `line`, `col`, `error`, `warning` and
    /// `message` capture groups; `near` is optional.
    pub fn new(
        name: &'static str,
        syntaxes: &'static [Syntax],
        cmd: &'static [&'static str],
        pattern: &str,
    ) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern)?;
        for group in REQUIRED_GROUPS {
            if !pattern.capture_names().flatten().any(|name| name == group) {
                return Err(ConfigError::MissingCaptureGroup(group));
            }
        }

        Ok(Self {
            name,
            syntaxes,
            cmd,
            npm_package: None,
            pattern,
            line_col_base: (1, 1),
            selectors: Vec::new(),
        })
    }

    /// Declares the package the host installs to obtain the executable,
    /// resolved through its node-style package runner.
    pub fn with_npm_package(mut self, package: &'static str) -> Self {
        self.npm_package = Some(package);
        self
    }

    /// Declares the numbering base of the tool's reported line and column
    /// values, so the host can normalize them to its own internal numbering.
    pub fn with_line_col_base(mut self, line: u32, col: u32) -> Self {
        self.line_col_base = (line, col);
        self
    }

    /// Restricts operation inside a host document of the given syntax to a
    /// named sub-region. Region extraction is the host's job.
    pub fn with_selector(mut self, syntax: Syntax, selector: &'static str) -> Self {
        self.selectors.push((syntax, selector));
        self
    }

    /// The linter's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The syntaxes that activate this linter.
    pub fn syntaxes(&self) -> &'static [Syntax] {
        self.syntaxes
    }

    /// The command template the host invokes.
    pub fn cmd(&self) -> &'static [&'static str] {
        self.cmd
    }

    /// The package providing the executable, if resolved via the host's
    /// package runner.
    pub fn npm_package(&self) -> Option<&'static str> {
        self.npm_package
    }

    /// The compiled diagnostic pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The numbering base of reported line/column values.
    pub fn line_col_base(&self) -> (u32, u32) {
        self.line_col_base
    }

    /// Returns true if this linter declares support for `syntax`.
    pub fn supports(&self, syntax: Syntax) -> bool {
        self.syntaxes.contains(&syntax)
    }

    /// The sub-region selector declared for `syntax`, if any.
    pub fn selector_for(&self, syntax: Syntax) -> Option<&'static str> {
        self.selectors
            .iter()
            .find(|(s, _)| *s == syntax)
            .map(|(_, selector)| *selector)
    }
}

/// The extension point an external-checker adapter plugs into.
///
/// The host drives every lint pass through this trait: [`find_errors`]
/// produces raw matches from one invocation's collected output, and
/// [`split_match`] turns each pattern match into a diagnostic record. Both
/// have defaults implementing the generic line-oriented behavior; an adapter
/// overrides them to recognize its tool's non-standard output shapes or to
/// rewrite individual records.
///
/// [`find_errors`]: Linter::find_errors
/// [`split_match`]: Linter::split_match
pub trait Linter {
    /// The declaration record handed to the host at registration time.
    fn config(&self) -> &LinterConfig;

    /// Scans one invocation's collected output for raw matches.
    fn find_errors<'a>(&self, output: &'a str) -> Vec<RawMatch<'a>> {
        parse::find_errors(self.config().pattern(), output)
    }

    /// Extracts one diagnostic record from a pattern match.
    fn split_match(&self, m: &PatternMatch<'_>) -> Diagnostic {
        parse::split_match(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PATTERN: &str = r"^(?P<file>.+?):(?P<line>\d+):(?P<col>\d+) (?:(?P<error>E)|(?P<warning>W)) (?P<message>.+)";

    #[test]
    fn test_config_compiles_valid_pattern() {
        let config = LinterConfig::new(
            "stub",
            &[Syntax::Javascript],
            &["stub", "--stdin"],
            TEST_PATTERN,
        )
        .unwrap();
        assert_eq!(config.name(), "stub");
        assert_eq!(config.cmd(), &["stub", "--stdin"]);
        assert_eq!(config.line_col_base(), (1, 1));
        assert_eq!(config.npm_package(), None);
    }

    #[test]
    fn test_config_rejects_missing_group() {
        let err = LinterConfig::new(
            "stub",
            &[Syntax::Javascript],
            &["stub"],
            r"^(?P<line>\d+):(?P<col>\d+) (?P<error>E)? (?P<warning>W)?",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingCaptureGroup("message")));
    }

    #[test]
    fn test_config_rejects_invalid_pattern() {
        let err =
            LinterConfig::new("stub", &[Syntax::Javascript], &["stub"], r"(?P<line>[").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern(_)));
    }

    #[test]
    fn test_builders() {
        let config = LinterConfig::new("stub", &[Syntax::Html], &["stub"], TEST_PATTERN)
            .unwrap()
            .with_npm_package("stub-lint")
            .with_line_col_base(0, 0)
            .with_selector(Syntax::Html, "source.js.embedded.html");

        assert_eq!(config.npm_package(), Some("stub-lint"));
        assert_eq!(config.line_col_base(), (0, 0));
        assert_eq!(
            config.selector_for(Syntax::Html),
            Some("source.js.embedded.html")
        );
        assert_eq!(config.selector_for(Syntax::Json), None);
        assert!(config.supports(Syntax::Html));
        assert!(!config.supports(Syntax::Javascript));
    }
}
