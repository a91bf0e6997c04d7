//! Admission rules for candidate modules
//!
//! Rules are predicate/effect pairs evaluated in insertion order; the
//! last matching rule decides, and a descriptor matched by no rule is
//! denied. A chain is assembled through `RuleChainBuilder` and frozen
//! into an immutable `RuleChain` before any filtering happens.

pub mod filter;

pub use filter::ModuleFilter;

use std::fmt;

use crate::descriptor::{ModuleDescriptor, ModuleOrigin};

/// Effect a matching rule has on a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    /// Admit the descriptor (unless a later rule overrides)
    Include,
    /// Drop the descriptor (unless a later rule overrides)
    Exclude,
}

type RulePredicate = Box<dyn Fn(&ModuleDescriptor) -> bool + Send + Sync>;

/// A single admission rule
///
/// Predicates must be referentially pure. A panicking predicate is a
/// programming defect; the engine deliberately does not catch it.
pub struct Rule {
    label: String,
    effect: RuleEffect,
    predicate: RulePredicate,
}

impl Rule {
    /// Create a rule from a label, effect, and predicate
    pub fn new(
        label: impl Into<String>,
        effect: RuleEffect,
        predicate: impl Fn(&ModuleDescriptor) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            effect,
            predicate: Box::new(predicate),
        }
    }

    /// Label used in events and failure context
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Effect applied when the predicate matches
    pub fn effect(&self) -> RuleEffect {
        self.effect
    }

    /// Evaluate the predicate against a descriptor
    pub fn matches(&self, descriptor: &ModuleDescriptor) -> bool {
        (self.predicate)(descriptor)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .field("effect", &self.effect)
            .finish_non_exhaustive()
    }
}

/// Ordered, frozen sequence of rules
///
/// Produced by `RuleChainBuilder::freeze`; read-only from then on.
#[derive(Debug, Default)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    /// Iterate rules in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules in the chain
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builder for assembling a rule chain
///
/// Append-only while building; `freeze` consumes the builder so the
/// resulting chain cannot be mutated after the filter is constructed.
#[derive(Debug, Default)]
pub struct RuleChainBuilder {
    rules: Vec<Rule>,
}

impl RuleChainBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a custom rule
    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Exclude every descriptor; the baseline for carve-out chains
    pub fn exclude_all(&mut self) -> &mut Self {
        self.rule(Rule::new("exclude-all", RuleEffect::Exclude, |_| true))
    }

    /// Include first-party project build output
    pub fn except_project_libraries(&mut self) -> &mut Self {
        self.rule(Rule::new(
            "except-project-libraries",
            RuleEffect::Include,
            |descriptor| descriptor.origin == ModuleOrigin::Project,
        ))
    }

    /// Include descriptors whose name starts with a recognized framework prefix
    pub fn except_framework_libraries(&mut self, prefixes: &[String]) -> &mut Self {
        let prefixes: Vec<String> = prefixes.iter().map(|p| p.to_ascii_lowercase()).collect();
        self.rule(Rule::new(
            "except-framework-libraries",
            RuleEffect::Include,
            move |descriptor| {
                let name = descriptor.name.to_ascii_lowercase();
                prefixes.iter().any(|prefix| name.starts_with(prefix))
            },
        ))
    }

    /// Include descriptors with the given name (case-insensitive)
    pub fn include_named(&mut self, name: &str) -> &mut Self {
        let label = format!("include-{}", name.to_ascii_lowercase());
        let name = name.to_string();
        self.rule(Rule::new(label, RuleEffect::Include, move |descriptor| {
            descriptor.matches_name(&name)
        }))
    }

    /// Exclude descriptors with the given name (case-insensitive)
    pub fn exclude_named(&mut self, name: &str) -> &mut Self {
        let label = format!("exclude-{}", name.to_ascii_lowercase());
        let name = name.to_string();
        self.rule(Rule::new(label, RuleEffect::Exclude, move |descriptor| {
            descriptor.matches_name(&name)
        }))
    }

    /// Number of rules appended so far
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules have been appended
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Freeze the builder into an immutable chain
    pub fn freeze(self) -> RuleChain {
        RuleChain { rules: self.rules }
    }
}
