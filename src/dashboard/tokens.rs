// ABOUTME: Token list form - fetches every token id known to the contract

use tracing::error;

use super::{FormData, FormResult, MSG_NO_TOKEN_IDS};
use crate::gateway::{GatewayClient, GatewayError};

#[derive(Debug, Default)]
pub struct TokenListForm {
    result: Option<FormResult>,
}

impl TokenListForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn result(&self) -> Option<&FormResult> {
        self.result.as_ref()
    }

    pub async fn submit(&mut self, client: &GatewayClient) -> &FormResult {
        let result = match client.get_all_token_ids().await {
            Ok(ids) if ids.is_empty() => FormResult::error(MSG_NO_TOKEN_IDS),
            Ok(ids) => {
                FormResult::success(format!("Successfully retrieved {} token IDs.", ids.len()))
                    .with_data(FormData::TokenIds(ids))
            }
            // An empty ledger is reported by the contract as a failure
            Err(GatewayError::Contract(failure)) => {
                error!("SearchByAllSBT error: {failure}");
                FormResult::error(MSG_NO_TOKEN_IDS)
            }
            Err(e) => {
                error!("SearchByAllSBT error: {e}");
                FormResult::error(e.to_string())
            }
        };

        self.result.insert(result)
    }
}
