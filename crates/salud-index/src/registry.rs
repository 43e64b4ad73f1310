//! Explicit corpus assembly.
//!
//! The original corpus composed categories with barrel re-exports; here that
//! is an explicit registry that enumerates modules and appends their records,
//! so assembly is visible and testable instead of relying on a module
//! system's re-export mechanics. The canonical convention is explicit named
//! aggregation: each module contributes an ordered record list and its ID
//! mirror, and building the registry publishes a single corpus index.

use salud_core::error::CoreError;
use salud_core::model::ContentId;
use salud_core::module::{load_module, ContentModule, ModuleSource};

use crate::error::IndexError;
use crate::index::CorpusIndex;

#[derive(Debug, Default)]
pub struct Registry {
    modules: Vec<ContentModule>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-loaded module. Registration order is corpus order.
    pub fn register(&mut self, module: ContentModule) -> &mut Self {
        tracing::debug!(module = %module.name, records = module.records.len(), "registered module");
        self.modules.push(module);
        self
    }

    /// Load a raw export surface and register it.
    pub fn register_source(
        &mut self,
        name: &str,
        source: ModuleSource,
    ) -> Result<&mut Self, CoreError> {
        let module = load_module(name, source)?;
        Ok(self.register(module))
    }

    /// Module names in registration order.
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    /// Every ID across all registered modules, in corpus order.
    pub fn ids(&self) -> Vec<ContentId> {
        self.modules.iter().flat_map(|m| m.ids()).collect()
    }

    /// Every record across all registered modules, in corpus order. Used by
    /// lint passes that must see the records before an index can be built
    /// (e.g. to report duplicates instead of aborting on them).
    pub fn records(&self) -> impl Iterator<Item = &salud_core::model::ContentRecord> {
        self.modules.iter().flat_map(|m| m.records.iter())
    }

    /// Flatten all modules into one index. Consumes the registry: the built
    /// index is the published, immutable artifact, and there is no
    /// incremental update path back into it.
    pub fn build(self) -> Result<CorpusIndex, IndexError> {
        let records = self
            .modules
            .into_iter()
            .flat_map(|m| m.records)
            .collect::<Vec<_>>();
        CorpusIndex::build(records)
    }
}
