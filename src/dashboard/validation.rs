// ABOUTME: Input checks shared by the dashboard forms

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use super::FormResult;

lazy_static! {
    static ref WALLET_ADDRESS: Regex = Regex::new(r"^(0x)?[0-9a-fA-F]{40}$").expect("valid regex");
}

/// Trim `value`; an empty result becomes an error result carrying `message`
pub fn require(value: &str, message: &str) -> Result<String, FormResult> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormResult::error(message))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Whether `address` has the 40-hex-digit wallet shape
pub fn looks_like_wallet_address(address: &str) -> bool {
    WALLET_ADDRESS.is_match(address)
}

/// Log a warning for unusual addresses; the gateway stays authoritative
pub fn check_address(field: &str, address: &str) {
    if !looks_like_wallet_address(address) {
        warn!("{field} '{address}' does not look like a wallet address; sending as-is");
    }
}
