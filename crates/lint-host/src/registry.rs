//! Linter registration and activation.

use crate::linter::{Linter, Syntax};

/// Owns the registered linter strategies and activates them by syntax.
#[derive(Default)]
pub struct Registry {
    linters: Vec<Box<dyn Linter>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a linter strategy.
    pub fn register(&mut self, linter: Box<dyn Linter>) {
        log::debug!("registered linter `{}`", linter.config().name());
        self.linters.push(linter);
    }

    /// Returns the linters declared for `syntax`, in registration order.
    pub fn for_syntax(&self, syntax: Syntax) -> impl Iterator<Item = &dyn Linter> + '_ {
        self.linters
            .iter()
            .filter(move |linter| linter.config().supports(syntax))
            .map(|linter| linter.as_ref())
    }

    /// Number of registered linters.
    pub fn len(&self) -> usize {
        self.linters.len()
    }

    /// Returns true if no linter is registered.
    pub fn is_empty(&self) -> bool {
        self.linters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::LinterConfig;

    const TEST_PATTERN: &str = r"^(?P<line>\d+):(?P<col>\d+) (?:(?P<error>E)|(?P<warning>W)) (?P<message>.+)";

    struct StubLinter {
        config: LinterConfig,
    }

    impl StubLinter {
        fn new(name: &'static str, syntaxes: &'static [Syntax]) -> Self {
            let config = LinterConfig::new(name, syntaxes, &["stub"], TEST_PATTERN).unwrap();
            Self { config }
        }
    }

    impl Linter for StubLinter {
        fn config(&self) -> &LinterConfig {
            &self.config
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.for_syntax(Syntax::Javascript).count(), 0);
    }

    #[test]
    fn test_activation_by_syntax() {
        let mut registry = Registry::new();
        registry.register(Box::new(StubLinter::new(
            "js-only",
            &[Syntax::Javascript],
        )));
        registry.register(Box::new(StubLinter::new(
            "js-and-html",
            &[Syntax::Javascript, Syntax::Html],
        )));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.for_syntax(Syntax::Javascript).count(), 2);
        assert_eq!(registry.for_syntax(Syntax::Json).count(), 0);

        let names: Vec<&str> = registry
            .for_syntax(Syntax::Html)
            .map(|linter| linter.config().name())
            .collect();
        assert_eq!(names, ["js-and-html"]);
    }
}
