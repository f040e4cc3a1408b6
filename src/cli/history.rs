// ABOUTME: CLI history command - show recent entries from the audit trail

use anyhow::{Context, Result};
use std::process::ExitCode;

use super::util::{load_config, resolve_format, truncate};
use super::{GlobalArgs, HistoryArgs, OutputFormat};
use crate::audit::{read_recent, AuditEntry, AuditLogger, AuditResult};

/// Execute the history command
pub fn execute(args: &HistoryArgs, globals: &GlobalArgs) -> Result<ExitCode> {
    let config = load_config(globals)?;
    let format = resolve_format(globals, &config);

    let path = AuditLogger::log_path();
    let entries = read_recent(&path, args.limit)
        .with_context(|| format!("Failed to read audit log at {}", path.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => output_text(&entries),
    }
    Ok(ExitCode::SUCCESS)
}

fn output_text(entries: &[AuditEntry]) {
    if entries.is_empty() {
        println!("No audited actions yet.");
        return;
    }

    println!("{:<20} {:<20} {:<10} SUBJECT", "TIME", "ACTION", "RESULT");
    println!("{}", "-".repeat(90));

    for entry in entries {
        let result = match &entry.result {
            AuditResult::Success => "ok",
            AuditResult::Failed(_) => "failed",
            AuditResult::Rejected(_) => "rejected",
        };
        let mut subject = match (&entry.address, &entry.token_id) {
            (Some(address), Some(token_id)) => format!("{address} / {token_id}"),
            (Some(address), None) => address.clone(),
            (None, Some(token_id)) => token_id.clone(),
            (None, None) => String::new(),
        };
        if let Some(details) = &entry.details {
            if subject.is_empty() {
                subject.clone_from(details);
            } else {
                subject = format!("{subject} ({details})");
            }
        }
        println!(
            "{:<20} {:<20} {:<10} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.action.to_string(),
            result,
            truncate(&subject, 60)
        );
    }
}
