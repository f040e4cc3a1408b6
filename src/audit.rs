// ABOUTME: Audit logging for gateway actions and local configuration changes
//
// Provides a persistent trail of every token operation the user submits,
// including the rejected transfer attempts, plus credential and config edits.
//
// Audit log is written to: ~/.soulbound/logs/audit.jsonl
// Format: JSON Lines (one JSON object per line) for easy grep/parsing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info, warn};

/// Types of auditable actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    // Token operations
    SbtMinted,
    SbtQueried,
    SbtLookedUp,
    TokenIdsListed,
    TransferAttempted,

    // Local state
    ApiKeyStored,
    ApiKeyDeleted,
    ConfigSaved,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SbtMinted => write!(f, "SBT_MINTED"),
            Self::SbtQueried => write!(f, "SBT_QUERIED"),
            Self::SbtLookedUp => write!(f, "SBT_LOOKED_UP"),
            Self::TokenIdsListed => write!(f, "TOKEN_IDS_LISTED"),
            Self::TransferAttempted => write!(f, "TRANSFER_ATTEMPTED"),
            Self::ApiKeyStored => write!(f, "API_KEY_STORED"),
            Self::ApiKeyDeleted => write!(f, "API_KEY_DELETED"),
            Self::ConfigSaved => write!(f, "CONFIG_SAVED"),
        }
    }
}

/// Result of an audited action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditResult {
    Success,
    Failed(String),
    /// The gateway refused the action, as expected for transfers
    Rejected(String),
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action occurred
    pub timestamp: DateTime<Utc>,

    /// Type of action
    pub action: AuditAction,

    /// Result of the action
    pub result: AuditResult,

    /// Address the action concerned (recipient, owner, sender)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Token id if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,

    /// Additional context/details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Trigger source
    pub trigger: AuditTrigger,
}

impl AuditEntry {
    pub fn new(action: AuditAction, result: AuditResult, trigger: AuditTrigger) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            result,
            address: None,
            token_id: None,
            details: None,
            trigger,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// What triggered the audit action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditTrigger {
    /// CLI command
    Command(String),
}

impl std::fmt::Display for AuditTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(cmd) => write!(f, "command:{cmd}"),
        }
    }
}

/// Global audit logger
static AUDIT_LOGGER: Mutex<Option<AuditLogger>> = Mutex::new(None);

/// Audit logger that writes to a JSONL file
pub struct AuditLogger {
    writer: BufWriter<File>,
}

impl AuditLogger {
    /// Initialize the global audit logger
    pub fn init() -> std::io::Result<()> {
        Self::init_at(&Self::log_path())
    }

    /// Initialize the global audit logger at a specific path
    pub fn init_at(log_path: &Path) -> std::io::Result<()> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(log_path)?;

        let logger = Self {
            writer: BufWriter::new(file),
        };

        let mut global = AUDIT_LOGGER
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        *global = Some(logger);

        info!("Audit logging initialized: {:?}", log_path);
        Ok(())
    }

    /// Get the audit log file path
    pub fn log_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".soulbound")
            .join("logs")
            .join("audit.jsonl")
    }

    /// Write an entry to the audit log
    fn write_entry(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Log an audit entry (main API). Never fails the caller.
pub fn audit_log(entry: &AuditEntry) {
    // Also log to tracing for immediate visibility
    info!(
        target: "audit",
        action = %entry.action,
        result = ?entry.result,
        trigger = %entry.trigger,
        address = ?entry.address,
        token_id = ?entry.token_id,
        "AUDIT: {}",
        entry.action
    );

    let mut global = match AUDIT_LOGGER.lock() {
        Ok(g) => g,
        Err(e) => {
            error!("Failed to acquire audit logger lock: {}", e);
            return;
        }
    };

    if global.is_none() {
        drop(global);
        if let Err(e) = AuditLogger::init() {
            error!("Failed to initialize audit logger: {}", e);
            return;
        }
        global = match AUDIT_LOGGER.lock() {
            Ok(g) => g,
            Err(e) => {
                error!("Failed to acquire audit logger lock: {}", e);
                return;
            }
        };
    }

    if let Some(ref mut logger) = *global {
        if let Err(e) = logger.write_entry(entry) {
            error!("Failed to write audit entry: {}", e);
        }
    }
}

/// Read the last `limit` entries from an audit file, oldest first.
/// Lines that fail to parse are skipped.
pub fn read_recent(path: &Path, limit: usize) -> std::io::Result<Vec<AuditEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<AuditEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping malformed audit line: {e}"),
        }
    }

    let skip = entries.len().saturating_sub(limit);
    Ok(entries.split_off(skip))
}
