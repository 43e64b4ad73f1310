use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use salud_core::module::ModuleSource;
use salud_index::{CorpusIndex, Registry};

/// Load a corpus index from JSON module files, or fall back to the built-in
/// corpus when no paths are given.
///
/// Each file is one module in the wire format: a single record object, a
/// named map of records, or an aggregate array. Directories contribute their
/// `.json` files in name order so assembly is deterministic.
pub fn load(paths: &[PathBuf]) -> Result<CorpusIndex> {
    load_registry(paths)?
        .build()
        .context("Failed to build corpus index")
}

/// Load modules into a registry without building the index, so callers can
/// inspect records even when the corpus would fail the duplicate-ID check.
pub fn load_registry(paths: &[PathBuf]) -> Result<Registry> {
    if paths.is_empty() {
        tracing::info!("no corpus paths given, using built-in content");
        return Ok(salud_content::builtin_registry());
    }

    let mut registry = Registry::new();
    for path in paths {
        if path.is_dir() {
            let mut files: Vec<PathBuf> = std::fs::read_dir(path)
                .with_context(|| format!("Failed to read directory {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            files.sort();
            for file in files {
                register_file(&mut registry, &file)?;
            }
        } else {
            register_file(&mut registry, path)?;
        }
    }

    Ok(registry)
}

fn register_file(registry: &mut Registry, path: &Path) -> Result<()> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("module")
        .to_string();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    registry
        .register_source(&name, ModuleSource::from_value(value))
        .with_context(|| format!("Failed to load module from {}", path.display()))?;
    tracing::debug!(module = %name, path = %path.display(), "registered module file");
    Ok(())
}
