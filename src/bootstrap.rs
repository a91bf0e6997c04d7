//! Engine bootstrap
//!
//! Wires the baseline rule chain, host-registered specifiers, module
//! sources, and the resolution engine into a `ModuleSet`, in the order
//! the engine requires: specifiers run and the chain is frozen before
//! any filtering begins.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::host::HostProgram;
use crate::modules::ModuleSet;
use crate::resolve::{ResolutionEngine, SharedStoreProbe};
use crate::rules::{ModuleFilter, RuleChainBuilder};
use crate::source::{ManifestSource, ModuleSource, SourceSet};
use crate::specifier::SpecifierRegistry;

/// Initialize the engine for a host program
///
/// Builds the baseline exclude-all chain with project and framework
/// carve-outs, lets registered specifiers contribute, freezes the chain,
/// and registers the host manifest source ahead of any extra sources.
/// Specifier failures are fatal; nothing is resolved until the returned
/// set is first read.
pub fn initialize(
    host: HostProgram,
    config: &EngineConfig,
    specifiers: &SpecifierRegistry,
    extra_sources: Vec<Box<dyn ModuleSource>>,
) -> Result<ModuleSet, EngineError> {
    let mut rules = RuleChainBuilder::new();
    rules
        .exclude_all()
        .except_project_libraries()
        .except_framework_libraries(&config.framework_prefixes);

    specifiers.apply(&mut rules)?;

    let chain = rules.freeze();
    debug!("Rule chain frozen with {} rules", chain.len());
    let filter = ModuleFilter::new(chain);

    let mut sources = SourceSet::new();
    sources.register(Box::new(ManifestSource::new(host)));
    for source in extra_sources {
        sources.register(source);
    }

    let probe = SharedStoreProbe::new(config.share_dirs.clone());
    let engine = ResolutionEngine::new(sources, filter, probe);

    Ok(ModuleSet::new(engine))
}
