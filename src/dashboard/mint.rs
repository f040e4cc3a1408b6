// ABOUTME: Mint form - issues a certification SBT to a recipient address

use tracing::error;

use super::validation::{check_address, require};
use super::{FormData, FormResult, MSG_AUTH_FAILED, MSG_ENTER_RECIPIENT, MSG_MINT_SUCCESS};
use crate::gateway::GatewayClient;

#[derive(Debug, Default)]
pub struct MintForm {
    pub recipient: String,
    result: Option<FormResult>,
}

impl MintForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            result: None,
        }
    }

    pub const fn result(&self) -> Option<&FormResult> {
        self.result.as_ref()
    }

    /// Validate, mint, and record the outcome. Clears the input on success.
    pub async fn submit(&mut self, client: &GatewayClient) -> &FormResult {
        let result = match require(&self.recipient, MSG_ENTER_RECIPIENT) {
            Err(invalid) => invalid,
            Ok(recipient) => {
                check_address("recipient", &recipient);
                match client.mint_sbt(&recipient).await {
                    Ok(receipt) => {
                        self.recipient.clear();
                        let result = FormResult::success(MSG_MINT_SUCCESS);
                        match receipt.token_id {
                            Some(token_id) => result.with_data(FormData::Minted { token_id }),
                            None => result,
                        }
                    }
                    Err(e) => {
                        error!("Mint error: {e}");
                        if e.is_auth() {
                            FormResult::error(MSG_AUTH_FAILED)
                        } else {
                            FormResult::error(e.to_string())
                        }
                    }
                }
            }
        };

        self.result.insert(result)
    }
}
