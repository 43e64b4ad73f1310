use salud_core::model::ContentRecord;

use super::OutputFormat;

pub fn format_record_list(records: &[&ContentRecord], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(records).unwrap_or_default(),
        OutputFormat::Text => format_record_list_text(records),
    }
}

fn format_record_list_text(records: &[&ContentRecord]) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let mut out = String::new();
    for r in records {
        let levels: Vec<String> = r.levels.keys().map(|k| k.to_string()).collect();
        out.push_str(&format!(
            "\u{25c6} {} {} [{}/{}] levels {}  relevance {}\n",
            r.id,
            r.name,
            r.content_type.as_str(),
            r.status.as_str(),
            levels.join(","),
            r.tags.clinical_relevance.as_str(),
        ));
    }
    out
}

pub fn format_record_full(record: &ContentRecord, level: Option<u8>, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(record).unwrap_or_default(),
        OutputFormat::Text => format_record_text(record, level),
    }
}

fn format_record_text(record: &ContentRecord, level: Option<u8>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  ({})\n", record.name, record.id));
    if let Some(es) = &record.name_es {
        out.push_str(&format!("  {es}\n"));
    }
    if !record.alternate_names.is_empty() {
        out.push_str(&format!("  aka: {}\n", record.alternate_names.join(", ")));
    }
    out.push_str(&format!(
        "  {} | {} | v{} | updated {}\n",
        record.content_type.as_str(),
        record.status.as_str(),
        record.version,
        record.updated_at,
    ));

    let shown: Vec<&salud_core::model::LevelContent> = match level {
        Some(n) => record.level(n).into_iter().collect(),
        None => record.levels.values().collect(),
    };
    for l in shown {
        out.push_str(&format!("\nLevel {}\n  {}\n", l.level, l.summary));
        for term in &l.key_terms {
            out.push_str(&format!("  - {}: {}\n", term.term, term.definition));
        }
    }

    if !record.cross_references.is_empty() {
        out.push_str("\nCross-references:\n");
        for xref in &record.cross_references {
            out.push_str(&format!(
                "  -> {} ({:?}) {}\n",
                xref.target_id, xref.relationship, xref.label
            ));
        }
    }
    out
}
