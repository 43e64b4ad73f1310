use std::path::PathBuf;

use anyhow::Result;

use crate::corpus;

/// Print the assembled corpus as one JSON array in the interchange format.
pub fn run(paths: &[PathBuf]) -> Result<()> {
    let index = corpus::load(paths)?;
    println!("{}", serde_json::to_string_pretty(index.records())?);
    Ok(())
}
