use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use salud_core::model::ContentId;

use crate::corpus;
use crate::output::format::format_record_full;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Record ID
    pub id: String,

    /// Show only one reading level (1-5)
    #[arg(long)]
    pub level: Option<u8>,
}

pub fn run(args: &ShowArgs, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let index = corpus::load(paths)?;
    let id = ContentId::parse(&args.id).context("Invalid record ID")?;
    let record = index
        .get(&id)
        .with_context(|| format!("No record with ID '{id}' in the corpus"))?;

    if let Some(level) = args.level {
        // Level lookup is intentionally partial; surface absence clearly.
        record
            .level(level)
            .with_context(|| format!("Record '{id}' does not define level {level}"))?;
    }

    println!("{}", format_record_full(record, args.level, format));
    Ok(())
}
