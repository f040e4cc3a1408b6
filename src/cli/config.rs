// ABOUTME: CLI config command - print the effective configuration or write defaults

use anyhow::{anyhow, Result};
use std::process::ExitCode;

use super::util::{load_config, resolve_format};
use super::{ConfigCommand, GlobalArgs, OutputFormat};
use crate::audit::{audit_log, AuditAction, AuditEntry, AuditResult, AuditTrigger};
use crate::config::AppConfig;

/// Execute a config subcommand
pub fn execute(command: ConfigCommand, globals: &GlobalArgs) -> Result<ExitCode> {
    match command {
        ConfigCommand::Show => {
            let config = load_config(globals)?;
            match resolve_format(globals, &config) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                OutputFormat::Text => print!("{}", toml::to_string_pretty(&config)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Init { force } => {
            let target = match &globals.config {
                Some(path) => path.clone(),
                None => AppConfig::user_config_path()?,
            };
            if target.exists() && !force {
                return Err(anyhow!(
                    "Config already exists at {}. Use --force to overwrite.",
                    target.display()
                ));
            }

            let defaults = AppConfig::default();
            let path = match &globals.config {
                Some(path) => {
                    defaults.save_to(path)?;
                    path.clone()
                }
                None => defaults.save()?,
            };
            audit_log(
                &AuditEntry::new(
                    AuditAction::ConfigSaved,
                    AuditResult::Success,
                    AuditTrigger::Command("config init".to_string()),
                )
                .with_details(path.display().to_string()),
            );
            println!("✅ Wrote default configuration to {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
