// ABOUTME: Query form - fetches one SBT by owner address and token id

use tracing::error;

use super::validation::require;
use super::{FormData, FormResult, MSG_ENTER_OWNER, MSG_ENTER_TOKEN_ID};
use crate::gateway::GatewayClient;

#[derive(Debug, Default)]
pub struct QueryForm {
    pub owner: String,
    pub token_id: String,
    result: Option<FormResult>,
}

impl QueryForm {
    pub fn new(owner: impl Into<String>, token_id: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            token_id: token_id.into(),
            result: None,
        }
    }

    pub const fn result(&self) -> Option<&FormResult> {
        self.result.as_ref()
    }

    pub async fn submit(&mut self, client: &GatewayClient) -> &FormResult {
        let result = match self.inputs() {
            Err(invalid) => invalid,
            Ok((owner, token_id)) => match client.query_sbt(&owner, &token_id).await {
                Ok(token) => {
                    self.owner.clear();
                    self.token_id.clear();
                    FormResult::success(format!(
                        "SBT {} is held by {}",
                        token.token_id, token.owner
                    ))
                    .with_data(FormData::Token(token))
                }
                Err(e) => {
                    error!("Query error: {e}");
                    FormResult::error(e.to_string())
                }
            },
        };

        self.result.insert(result)
    }

    fn inputs(&self) -> Result<(String, String), FormResult> {
        let owner = require(&self.owner, MSG_ENTER_OWNER)?;
        let token_id = require(&self.token_id, MSG_ENTER_TOKEN_ID)?;
        Ok((owner, token_id))
    }
}
