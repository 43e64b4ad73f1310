use std::path::PathBuf;

use anyhow::Result;

use crate::corpus;
use crate::output::OutputFormat;

pub fn run(paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let index = corpus::load(paths)?;
    let stats = index.stats();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Text => {
            println!("Corpus Statistics");
            println!("=================");
            println!("Records:              {}", stats.records);
            println!("Cross-references:     {}", stats.cross_references);
            println!("Dangling references:  {}", stats.dangling_references);
            println!();

            println!("By Type:");
            for (kind, count) in &stats.by_type {
                println!("  {kind}: {count}");
            }
            println!();

            println!("By Status:");
            for (status, count) in &stats.by_status {
                println!("  {status}: {count}");
            }
            println!();

            println!("By Clinical Relevance:");
            for (relevance, count) in &stats.by_relevance {
                println!("  {relevance}: {count}");
            }
            println!();

            println!("Level Coverage:");
            for (level, count) in &stats.level_coverage {
                println!("  level {level}: {count} record(s)");
            }
        }
    }

    Ok(())
}
