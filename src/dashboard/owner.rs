// ABOUTME: Owner search form - looks up the SBT held by an address
//
// The contract reports a missing token as a failure whose text names the
// owner; that case gets its own message, every other contract failure a
// generic one.

use serde::Serialize;
use tracing::error;

use super::validation::{check_address, require};
use super::{
    FormData, FormResult, MSG_ENTER_OWNER_SEARCH, MSG_NO_DESCRIPTION, MSG_NO_VALID_DATA,
    MSG_OWNER_LOOKUP_FAILED,
};
use crate::gateway::{GatewayClient, GatewayError, SoulboundToken};

/// What the owner panel shows for a found token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerSummary {
    pub owner: String,
    #[serde(rename = "tokenID")]
    pub token_id: String,
    pub description: String,
}

impl From<SoulboundToken> for OwnerSummary {
    fn from(token: SoulboundToken) -> Self {
        let description = token
            .description()
            .unwrap_or_else(|| MSG_NO_DESCRIPTION.to_string());
        Self {
            owner: token.owner,
            token_id: token.token_id,
            description,
        }
    }
}

#[derive(Debug, Default)]
pub struct OwnerForm {
    pub owner: String,
    result: Option<FormResult>,
}

impl OwnerForm {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            result: None,
        }
    }

    pub const fn result(&self) -> Option<&FormResult> {
        self.result.as_ref()
    }

    pub async fn submit(&mut self, client: &GatewayClient) -> &FormResult {
        let result = match require(&self.owner, MSG_ENTER_OWNER_SEARCH) {
            Err(invalid) => invalid,
            Ok(owner) => {
                check_address("owner", &owner);
                match client.get_sbt_by_owner(&owner).await {
                    Ok(token) => {
                        self.owner.clear();
                        let summary = OwnerSummary::from(token);
                        FormResult::success(format!(
                            "{} holds SBT {}: {}",
                            summary.owner, summary.token_id, summary.description
                        ))
                        .with_data(FormData::Owner(summary))
                    }
                    Err(e) => {
                        error!("SearchByOwner error: {e}");
                        FormResult::error(lookup_error_message(&owner, &e))
                    }
                }
            }
        };

        self.result.insert(result)
    }
}

fn lookup_error_message(owner: &str, err: &GatewayError) -> String {
    match err {
        GatewayError::Contract(failure) if failure.is_missing_owner_sbt() => {
            format!("The owner '{owner}' does not have any Soulbound Tokens (SBTs).")
        }
        GatewayError::Contract(_) => MSG_OWNER_LOOKUP_FAILED.to_string(),
        GatewayError::UnexpectedPayload(_) | GatewayError::Decode(_) => {
            MSG_NO_VALID_DATA.to_string()
        }
        other => other.to_string(),
    }
}
