// ABOUTME: CLI auth command - store, clear and inspect the gateway API key

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::io::BufRead;
use std::process::ExitCode;

use super::util::{load_config, resolve_format};
use super::{AuthCommand, GlobalArgs, OutputFormat};
use crate::audit::{audit_log, AuditAction, AuditEntry, AuditResult, AuditTrigger};
use crate::credentials;

/// API key status for display
#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_key: Option<String>,
}

/// Execute an auth subcommand
pub fn execute(command: AuthCommand, globals: &GlobalArgs) -> Result<ExitCode> {
    match command {
        AuthCommand::Set { key } => {
            let key = match key {
                Some(key) => key,
                None => read_key_from_stdin()?,
            };
            let outcome = credentials::store_api_key(&key);
            audit_key_change(AuditAction::ApiKeyStored, "auth set", &outcome);
            outcome?;
            println!("✅ Gateway API key stored in the system keychain.");
            Ok(ExitCode::SUCCESS)
        }
        AuthCommand::Clear => {
            let outcome = credentials::delete_api_key();
            audit_key_change(AuditAction::ApiKeyDeleted, "auth clear", &outcome);
            outcome?;
            println!("✅ Gateway API key removed from the system keychain.");
            Ok(ExitCode::SUCCESS)
        }
        AuthCommand::Status => {
            let config = load_config(globals)?;
            let format = resolve_format(globals, &config);
            let status = match credentials::resolve_api_key(globals.api_key.as_deref())? {
                Some((key, source)) => AuthStatus {
                    configured: true,
                    source: Some(source.to_string()),
                    masked_key: Some(credentials::mask_api_key(&key)),
                },
                None => AuthStatus {
                    configured: false,
                    source: None,
                    masked_key: None,
                },
            };
            print_status(&status, format)?;
            Ok(if status.configured {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn read_key_from_stdin() -> Result<String> {
    eprintln!("Enter gateway API key:");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read API key from stdin")?;
    let key = line.trim().to_string();
    if key.is_empty() {
        return Err(anyhow!("API key cannot be empty"));
    }
    Ok(key)
}

fn audit_key_change(action: AuditAction, command: &str, outcome: &Result<()>) {
    let result = match outcome {
        Ok(()) => AuditResult::Success,
        Err(e) => AuditResult::Failed(e.to_string()),
    };
    audit_log(&AuditEntry::new(action, result, AuditTrigger::Command(command.to_string())));
}

fn print_status(status: &AuthStatus, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(status)?),
        OutputFormat::Text => match (&status.source, &status.masked_key) {
            (Some(source), Some(masked)) => {
                println!("🔐 API key: {masked}");
                println!("   Source:  {source}");
            }
            _ => {
                println!("⚠️  No gateway API key configured.");
                println!("   Run 'sbt auth set' or export SBT_API_KEY.");
            }
        },
    }
    Ok(())
}
