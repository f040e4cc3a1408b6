// ABOUTME: Shared CLI utilities: config/client setup, result rendering, audit recording
//
// Every token command follows the same path: resolve config and API key,
// build one gateway client, submit one form, print its result.

use anyhow::{Context, Result};
use std::process::ExitCode;

use super::{GlobalArgs, OutputFormat};
use crate::audit::{audit_log, AuditAction, AuditEntry, AuditResult, AuditTrigger};
use crate::config::AppConfig;
use crate::credentials;
use crate::dashboard::{FormData, FormResult, FormStatus};
use crate::gateway::{GatewayClient, GatewayError};

/// Load configuration honoring `--config` and `--gateway-url`
pub fn load_config(globals: &GlobalArgs) -> Result<AppConfig> {
    let mut config = match &globals.config {
        Some(path) => AppConfig::load_file(path)?,
        None => AppConfig::load()?,
    };

    if let Some(url) = &globals.gateway_url {
        config.gateway.base_url.clone_from(url);
    }

    Ok(config)
}

/// `--format` if given, else the configured default
pub fn resolve_format(globals: &GlobalArgs, config: &AppConfig) -> OutputFormat {
    globals
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format))
}

/// Build a gateway client from config and the resolved API key
pub fn build_client(globals: &GlobalArgs, config: &AppConfig) -> Result<GatewayClient> {
    let (api_key, source) = credentials::resolve_api_key(globals.api_key.as_deref())?
        .ok_or(GatewayError::MissingApiKey)?;
    tracing::debug!("Using gateway API key from {source}");

    GatewayClient::new(config.gateway.clone(), api_key).context("Failed to create gateway client")
}

/// Print a form result in the requested format
pub fn print_result(result: &FormResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => print!("{}", render_text(result)),
    }
    Ok(())
}

/// Render a form result the way the dashboard panel shows it
pub fn render_text(result: &FormResult) -> String {
    let mut out = String::new();
    let heading = match result.status {
        FormStatus::Success => "✅ Success!",
        FormStatus::Error => "❌ Error",
    };
    out.push_str(heading);
    out.push('\n');
    out.push_str(&format!("   {}\n", result.message));

    match &result.data {
        Some(FormData::Minted { token_id }) => {
            out.push_str(&format!("   Token ID: {token_id}\n"));
        }
        Some(FormData::Token(token)) => {
            out.push_str(&format!("   Owner:    {}\n", token.owner));
            out.push_str(&format!("   Token ID: {}\n", token.token_id));
            if let Some(description) = token.description() {
                out.push_str(&format!("   About:    {}\n", truncate(&description, 72)));
            }
        }
        Some(FormData::Owner(summary)) => {
            out.push_str(&format!("   Owner:       {}\n", summary.owner));
            out.push_str(&format!("   Token ID:    {}\n", summary.token_id));
            out.push_str(&format!("   Description: {}\n", truncate(&summary.description, 72)));
        }
        Some(FormData::TokenIds(ids)) => {
            for id in ids {
                out.push_str(&format!("   • {id}\n"));
            }
        }
        None => {}
    }

    out
}

/// Exit status for a form result
pub fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Record a submitted form in the audit trail
pub fn audit_form(
    action: AuditAction,
    command: &str,
    result: &FormResult,
    address: Option<&str>,
    token_id: Option<&str>,
) {
    let audit_result = match result.status {
        FormStatus::Success => AuditResult::Success,
        FormStatus::Error => AuditResult::Failed(result.message.clone()),
    };
    audit_form_with(action, command, audit_result, address, token_id, None);
}

/// Record a form outcome whose audit result differs from its display status
pub fn audit_form_with(
    action: AuditAction,
    command: &str,
    result: AuditResult,
    address: Option<&str>,
    token_id: Option<&str>,
    details: Option<&str>,
) {
    audit_log(&form_entry(action, command, result, address, token_id, details));
}

fn form_entry(
    action: AuditAction,
    command: &str,
    result: AuditResult,
    address: Option<&str>,
    token_id: Option<&str>,
    details: Option<&str>,
) -> AuditEntry {
    let mut entry = AuditEntry::new(action, result, AuditTrigger::Command(command.to_string()));
    if let Some(address) = address.filter(|a| !a.trim().is_empty()) {
        entry = entry.with_address(address.trim());
    }
    if let Some(token_id) = token_id.filter(|t| !t.trim().is_empty()) {
        entry = entry.with_token_id(token_id.trim());
    }
    if let Some(details) = details {
        entry = entry.with_details(details);
    }
    entry
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
