use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use salud_core::schema::validate_batch;
use salud_index::CorpusIndex;

use crate::corpus;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct LintArgs {
    /// Treat dangling cross-references as errors instead of warnings
    #[arg(long)]
    pub strict: bool,
}

/// One-pass corpus lint: every validation issue and every dangling
/// cross-reference is reported together, so authors fix a batch at a time
/// instead of replaying the tool failure by failure.
pub fn run(args: &LintArgs, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let registry = corpus::load_registry(paths)?;
    let records: Vec<_> = registry.records().cloned().collect();

    let issues = validate_batch(&records);
    let fatal = issues.iter().filter(|i| i.is_fatal()).count();

    // Duplicates abort index construction, so the dangling sweep only runs
    // on a corpus that can actually be published.
    let dangling = if fatal == 0 {
        CorpusIndex::build(records.clone())
            .map(|index| index.check_references())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "records": records.len(),
                "errors": issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
                "dangling_references": dangling.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("Linted {} record(s)", records.len());
            for issue in &issues {
                println!("error: {issue}");
            }
            for miss in &dangling {
                println!("warning: {miss}");
            }
            if issues.is_empty() && dangling.is_empty() {
                println!("No issues found.");
            }
        }
    }

    let hard_errors = issues.len() + if args.strict { dangling.len() } else { 0 };
    if hard_errors > 0 {
        anyhow::bail!("corpus lint failed with {hard_errors} error(s)");
    }
    Ok(())
}
