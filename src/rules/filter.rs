//! Admission filter over a frozen rule chain
//!
//! Decides, per descriptor, whether the module is admitted into the
//! resolution pass. Evaluation is pure: the decision depends only on the
//! frozen chain and the descriptor's own fields.

use tracing::debug;

use crate::descriptor::ModuleDescriptor;
use crate::rules::{RuleChain, RuleEffect};

/// Evaluates a frozen rule chain against candidate descriptors
pub struct ModuleFilter {
    chain: RuleChain,
}

impl ModuleFilter {
    /// Construct a filter from a frozen chain
    pub fn new(chain: RuleChain) -> Self {
        Self { chain }
    }

    /// The chain this filter evaluates
    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }

    /// Decide admission for one descriptor
    ///
    /// Scans the full chain in insertion order; every matching rule
    /// overwrites the recorded effect, so the last match wins. No match
    /// means denied.
    pub fn admits(&self, descriptor: &ModuleDescriptor) -> bool {
        let mut decision: Option<(&str, RuleEffect)> = None;
        for rule in self.chain.iter() {
            if rule.matches(descriptor) {
                decision = Some((rule.label(), rule.effect()));
            }
        }

        match decision {
            Some((rule, RuleEffect::Include)) => {
                debug!("Module {} admitted by rule '{}'", descriptor, rule);
                true
            }
            Some((rule, RuleEffect::Exclude)) => {
                debug!("Module {} excluded by rule '{}'", descriptor, rule);
                false
            }
            None => {
                debug!("Module {} matched no rule, denied by default", descriptor);
                false
            }
        }
    }
}
