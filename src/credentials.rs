// ABOUTME: Gateway API key storage and resolution
// Uses keyring crate for cross-platform support (macOS Keychain, Linux Secret Service)

use anyhow::{Context, Result};
use keyring::Entry;
use std::collections::HashMap;

const SERVICE_NAME: &str = "soulbound";
const API_KEY_ENTRY: &str = "gateway_api_key";

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["SBT_API_KEY", "NEXT_PUBLIC_API_KEY"];

/// Where a resolved API key came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    Flag,
    Env(&'static str),
    Keychain,
}

impl std::fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--api-key flag"),
            Self::Env(name) => write!(f, "environment variable {name}"),
            Self::Keychain => write!(f, "system keychain"),
        }
    }
}

fn entry() -> Result<Entry> {
    Entry::new(SERVICE_NAME, API_KEY_ENTRY).context("Failed to create keyring entry")
}

/// Store the gateway API key in the system keychain
pub fn store_api_key(api_key: &str) -> Result<()> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(anyhow::anyhow!("API key cannot be empty"));
    }

    entry()?
        .set_password(api_key)
        .context("Failed to store credential in keychain")?;

    tracing::info!("Stored credential: {API_KEY_ENTRY}");
    Ok(())
}

/// Retrieve the gateway API key from the system keychain
pub fn get_api_key() -> Result<Option<String>> {
    match entry()?.get_password() {
        Ok(password) => {
            tracing::debug!("Retrieved credential: {API_KEY_ENTRY}");
            Ok(Some(password))
        }
        Err(keyring::Error::NoEntry) => {
            tracing::debug!("No credential found for: {API_KEY_ENTRY}");
            Ok(None)
        }
        Err(e) => {
            tracing::warn!("Failed to retrieve credential {API_KEY_ENTRY}: {e}");
            Err(anyhow::anyhow!("Failed to retrieve credential: {e}"))
        }
    }
}

/// Delete the gateway API key from the system keychain
pub fn delete_api_key() -> Result<()> {
    match entry()?.delete_credential() {
        Ok(()) => {
            tracing::info!("Deleted credential: {API_KEY_ENTRY}");
            Ok(())
        }
        // Already gone
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(anyhow::anyhow!("Failed to delete credential: {e}")),
    }
}

/// Resolve the API key: flag, then environment, then keychain
pub fn resolve_api_key(flag: Option<&str>) -> Result<Option<(String, ApiKeySource)>> {
    let env: HashMap<String, String> = API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok().map(|v| ((*name).to_string(), v)))
        .collect();
    resolve_api_key_from(flag, &env, get_api_key)
}

/// Resolution with injectable environment and keychain lookup
pub fn resolve_api_key_from<F>(
    flag: Option<&str>,
    env: &HashMap<String, String>,
    keychain: F,
) -> Result<Option<(String, ApiKeySource)>>
where
    F: FnOnce() -> Result<Option<String>>,
{
    if let Some(key) = flag.map(str::trim).filter(|k| !k.is_empty()) {
        return Ok(Some((key.to_string(), ApiKeySource::Flag)));
    }

    for name in API_KEY_ENV_VARS {
        if let Some(key) = env.get(name).map(|v| v.trim()).filter(|k| !k.is_empty()) {
            return Ok(Some((key.to_string(), ApiKeySource::Env(name))));
        }
    }

    Ok(keychain()?
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .map(|k| (k, ApiKeySource::Keychain)))
}

/// Masked display of an API key (for status output)
pub fn mask_api_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() > 8 {
        format!("{visible}••••••••")
    } else {
        "••••••••".to_string()
    }
}
