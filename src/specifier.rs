//! Rule specifiers contributed by the host program
//!
//! Lets the host declare additional inclusion/exclusion policy without
//! the engine having compile-time knowledge of it. Contributors register
//! a factory under a stable key at startup; the engine instantiates and
//! invokes each exactly once before the chain is frozen. Invocation is
//! key-sorted so registration order cannot change the final chain.

use tracing::debug;

use crate::error::EngineError;
use crate::rules::RuleChainBuilder;

/// Capability for contributing admission rules to the chain under construction
pub trait RuleSpecifier {
    /// Append rules to the chain
    fn specify(&self, rules: &mut RuleChainBuilder) -> Result<(), EngineError>;
}

type SpecifierFactory = Box<dyn Fn() -> Result<Box<dyn RuleSpecifier>, EngineError>>;

/// Registry of specifier factories, keyed by a stable name
#[derive(Default)]
pub struct SpecifierRegistry {
    factories: Vec<(String, SpecifierFactory)>,
}

impl SpecifierRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a specifier factory under a stable key
    pub fn register<F>(&mut self, key: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn RuleSpecifier>, EngineError> + 'static,
    {
        self.factories.push((key.into(), Box::new(factory)));
    }

    /// Number of registered specifiers
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no specifiers are registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Instantiate and invoke every registered specifier, sorted by key
    ///
    /// Any instantiation or invocation failure aborts the whole pass: a
    /// half-mutated chain is not safe to filter with.
    pub fn apply(&self, rules: &mut RuleChainBuilder) -> Result<(), EngineError> {
        let mut order: Vec<usize> = (0..self.factories.len()).collect();
        order.sort_by(|a, b| self.factories[*a].0.cmp(&self.factories[*b].0));

        for index in order {
            let (key, factory) = &self.factories[index];
            let specifier = factory()
                .map_err(|e| EngineError::SpecifierFailed(key.clone(), e.to_string()))?;
            specifier
                .specify(rules)
                .map_err(|e| EngineError::SpecifierFailed(key.clone(), e.to_string()))?;
            debug!("Applied specifier '{}'", key);
        }

        Ok(())
    }
}
