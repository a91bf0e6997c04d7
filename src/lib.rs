//! Modsieve - module discovery and filtering engine
//!
//! Decides, out of every binary module reachable from a host program's
//! dependency graph, which subset is loaded and treated as part of the
//! running system (plugin activation, code generation, post-build
//! processing). The engine only makes the decision and locates artifacts;
//! loading, invoking, and code generation are downstream concerns.
//!
//! ## Pipeline
//!
//! 1. Baseline rules plus host-registered specifiers build the rule chain
//! 2. The chain is frozen and the admission filter constructed from it
//! 3. Sources are enumerated eagerly and every candidate filtered
//!    independently (last matching rule wins, no match means denied)
//! 4. Each admitted candidate resolves to a loadable handle, probing the
//!    shared module store when the originating source misses
//! 5. The outcome is exposed as a lazily computed, cached [`ModuleSet`]

pub mod bootstrap;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod modules;
pub mod resolve;
pub mod rules;
pub mod source;
pub mod specifier;
pub mod utils;

pub use bootstrap::initialize;
pub use config::EngineConfig;
pub use descriptor::{ModuleDescriptor, ModuleHandle, ModuleOrigin};
pub use error::EngineError;
pub use host::{HostManifest, HostProgram};
pub use modules::ModuleSet;
pub use resolve::{Resolution, ResolutionEngine, ResolvedModule, SharedStoreProbe};
pub use rules::{ModuleFilter, Rule, RuleChain, RuleChainBuilder, RuleEffect};
pub use source::{ManifestSource, ModuleSource, PathListSource, SourceSet};
pub use specifier::{RuleSpecifier, SpecifierRegistry};
