//! Contract surface between an editor linting host and its external-checker
//! adapters.
//!
//! The host owns process invocation, output collection, rendering and
//! caching; an adapter owns knowing one checker. This crate is the seam
//! between the two:
//! - [`Diagnostic`] records with byte [`Span`]s into the raw output
//! - the [`Linter`] extension-point trait with the host's default
//!   line-oriented parser
//! - the [`LinterConfig`] declaration record validated at registration time
//! - a [`Registry`] activating linters by [`Syntax`]
//!
//! # Example
//!
//! ```
//! use lint_host::{parse_output, Linter, LinterConfig, Syntax};
//!
//! struct Stub(LinterConfig);
//!
//! impl Linter for Stub {
//!     fn config(&self) -> &LinterConfig {
//!         &self.0
//!     }
//! }
//!
//! let config = LinterConfig::new(
//!     "stub",
//!     &[Syntax::Javascript],
//!     &["stub", "--stdin"],
//!     r"^.+?: line (?P<line>\d+), col (?P<col>\d+), (?:(?P<error>Error)|(?P<warning>Warning)) - (?P<message>.+)",
//! )?;
//! let linter = Stub(config);
//!
//! let records = parse_output(&linter, "stdin: line 3, col 5, Error - Missing semicolon.\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].line, Some(3));
//! # Ok::<(), lint_host::ConfigError>(())
//! ```

mod diagnostic;
mod error;
mod linter;
pub mod parse;
mod registry;
mod span;

pub use diagnostic::{Category, Diagnostic, Severity};
pub use error::ConfigError;
pub use linter::{Linter, LinterConfig, Syntax};
pub use parse::{parse_output, PatternMatch, RawMatch};
pub use registry::Registry;
pub use span::{ByteOffset, Span};
