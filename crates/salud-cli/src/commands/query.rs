use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use salud_core::model::{ClinicalRelevance, ContentRecord, ContentType, Status};

use crate::corpus;
use crate::output::format::format_record_list;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct QueryArgs {
    /// Record type (structure|system|pathway|process|condition|concept|topic)
    #[arg(long, value_enum)]
    pub content_type: Option<CliContentType>,

    /// Body system tag (e.g. renal, cardiovascular)
    #[arg(long)]
    pub system: Option<String>,

    /// Topic tag (e.g. nephrology, mental-health)
    #[arg(long)]
    pub topic: Option<String>,

    /// Minimum clinical relevance (low|medium|high|critical)
    #[arg(long, value_enum)]
    pub relevance: Option<CliRelevance>,

    /// Editorial status (draft|review|published)
    #[arg(long, value_enum)]
    pub status: Option<CliStatus>,

    /// Substring match against keywords and names (case-insensitive)
    #[arg(long)]
    pub keyword: Option<String>,
}

// clap-facing mirrors of the closed sets, kept local to the CLI so the core
// model stays free of clap derives.

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliContentType {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl From<CliContentType> for ContentType {
    fn from(v: CliContentType) -> Self {
        match v {
            CliContentType::Structure => ContentType::Structure,
            CliContentType::System => ContentType::System,
            CliContentType::Pathway => ContentType::Pathway,
            CliContentType::Process => ContentType::Process,
            CliContentType::Condition => ContentType::Condition,
            CliContentType::Concept => ContentType::Concept,
            CliContentType::Topic => ContentType::Topic,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliRelevance {
    Low,
    Medium,
    High,
    Critical,
}

impl From<CliRelevance> for ClinicalRelevance {
    fn from(v: CliRelevance) -> Self {
        match v {
            CliRelevance::Low => ClinicalRelevance::Low,
            CliRelevance::Medium => ClinicalRelevance::Medium,
            CliRelevance::High => ClinicalRelevance::High,
            CliRelevance::Critical => ClinicalRelevance::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliStatus {
    Draft,
    Review,
    Published,
}

impl From<CliStatus> for Status {
    fn from(v: CliStatus) -> Self {
        match v {
            CliStatus::Draft => Status::Draft,
            CliStatus::Review => Status::Review,
            CliStatus::Published => Status::Published,
        }
    }
}

pub fn run(args: &QueryArgs, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let index = corpus::load(paths)?;

    let content_type = args.content_type.map(ContentType::from);
    let relevance = args.relevance.map(ClinicalRelevance::from);
    let status = args.status.map(Status::from);
    let keyword = args.keyword.as_deref().map(str::to_lowercase);

    let matches: Vec<&ContentRecord> = index
        .query(|r| {
            content_type.map_or(true, |t| r.content_type == t)
                && args
                    .system
                    .as_deref()
                    .map_or(true, |s| r.tags.systems.iter().any(|x| x == s))
                && args
                    .topic
                    .as_deref()
                    .map_or(true, |t| r.tags.topics.iter().any(|x| x == t))
                && relevance.map_or(true, |min| r.tags.clinical_relevance >= min)
                && status.map_or(true, |s| r.status == s)
                && keyword.as_deref().map_or(true, |k| matches_keyword(r, k))
        })
        .collect();

    println!("{}", format_record_list(&matches, format));
    Ok(())
}

fn matches_keyword(record: &ContentRecord, keyword: &str) -> bool {
    record.name.to_lowercase().contains(keyword)
        || record
            .name_es
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(keyword))
        || record
            .tags
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(keyword))
}
