//! The ESLint strategy.

use lint_host::parse;
use lint_host::{
    Category, Diagnostic, Linter, LinterConfig, PatternMatch, RawMatch, Span, Syntax,
};
use regex::Regex;
use std::sync::LazyLock;

/// Line pattern for ESLint's compact output format, e.g.
/// `stdin: line 3, col 5, Error - Missing semicolon.`
const OUTPUT_PATTERN: &str = r"^.+?: line (?P<line>\d+), col (?P<col>\d+), (?:(?P<error>Error)|(?P<warning>Warning)) - (?P<message>.+)";

/// Messages ESLint emits for a file skipped by its ignore configuration,
/// legacy wording first. They arrive shaped like ordinary findings.
const IGNORED_FILE_MESSAGES: [&str; 2] = [
    "File ignored because of your .eslintignore file. Use --no-ignore to override.",
    "File ignored because of a matching ignore pattern. Use --no-ignore to override.",
];

/// ESLint prints this instead of diagnostics when it cannot locate a
/// configuration file. The greedy prefix lets the phrase sit anywhere in the
/// output.
static CONFIG_FAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^.*(ESLint couldn't find a configuration file)").unwrap());

/// Banner ESLint prints when it crashes internally. Anchored: the banner
/// line must follow at least one line of output. The trace below the banner
/// is noise and is not captured.
static CRASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?)\r?\n\w*(Oops! Something went wrong!)").unwrap());

static CONFIG: LazyLock<LinterConfig> = LazyLock::new(|| {
    LinterConfig::new(
        "eslint",
        &[Syntax::Javascript, Syntax::Html, Syntax::Json],
        &[
            "eslint",
            "--format",
            "compact",
            "--stdin",
            "--stdin-filename",
            "@",
        ],
        OUTPUT_PATTERN,
    )
    .unwrap()
    .with_npm_package("eslint")
    .with_selector(Syntax::Html, "source.js.embedded.html")
});

/// Adapter between the lint host and the `eslint` executable.
///
/// The host locates and runs the tool from the declaration record; this
/// type only classifies the collected output. On top of the generic compact
/// format it recognizes two checker-level failure shapes (missing
/// configuration file, internal crash) and blanks the ignore-file notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct EslintLinter;

impl EslintLinter {
    /// Creates the adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Linter for EslintLinter {
    fn config(&self) -> &LinterConfig {
        &CONFIG
    }

    fn find_errors<'a>(&self, output: &'a str) -> Vec<RawMatch<'a>> {
        if let Some(caps) = CONFIG_FAIL_PATTERN.captures(output) {
            if let (Some(whole), Some(phrase)) = (caps.get(0), caps.get(1)) {
                log::debug!("eslint could not locate a configuration file");
                let span = Span::new(whole.start() as u32, whole.end() as u32);
                return vec![RawMatch::Resolved(Diagnostic::tool_failure(
                    span,
                    Category::Config,
                    phrase.as_str(),
                ))];
            }
        }

        if let Some(caps) = CRASH_PATTERN.captures(output) {
            if let (Some(whole), Some(banner)) = (caps.get(0), caps.get(2)) {
                log::debug!("eslint crashed; surfacing the banner only");
                let span = Span::new(whole.start() as u32, whole.end() as u32);
                return vec![RawMatch::Resolved(Diagnostic::tool_failure(
                    span,
                    Category::Exception,
                    banner.as_str(),
                ))];
            }
        }

        parse::find_errors(self.config().pattern(), output)
    }

    fn split_match(&self, m: &PatternMatch<'_>) -> Diagnostic {
        suppress_ignored(parse::split_match(m))
    }
}

/// Blanks the ignore-file notice; every other record passes unchanged.
///
/// The record is kept, not deleted, so cardinality with the raw matches is
/// preserved; the host discards empty-message records downstream.
fn suppress_ignored(diag: Diagnostic) -> Diagnostic {
    if IGNORED_FILE_MESSAGES.contains(&diag.message.as_str()) {
        return Diagnostic::suppressed(diag.span);
    }
    diag
}
