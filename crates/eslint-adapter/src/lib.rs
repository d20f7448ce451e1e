//! ESLint adapter for the `lint-host` extension point.
//!
//! This crate knows one external checker: the `eslint` executable, invoked
//! by the host over stdin in compact output format. It declares the
//! invocation contract, classifies the collected output (configuration
//! failure, internal crash, or a normal diagnostic listing) and blanks the
//! non-actionable ignore-file notice.

mod adapter;

pub use adapter::EslintLinter;
