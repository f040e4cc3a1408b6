// ABOUTME: Transfer form - demonstrates that the contract refuses to move an SBT
//
// Rejection is the expected outcome and is reported with the contract's
// standard wording regardless of how the gateway phrased the failure.

use tracing::{error, info};

use super::validation::{check_address, require};
use super::{
    FormResult, MSG_ENTER_OWNER, MSG_ENTER_RECIPIENT, MSG_ENTER_TOKEN_ID, MSG_NOT_TRANSFERABLE,
    MSG_UNEXPECTED_TRANSFER,
};
use crate::gateway::GatewayClient;

/// How the last transfer attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Input was missing; nothing was sent
    Invalid,
    /// The gateway refused the transfer
    Rejected,
    /// The gateway accepted the transfer
    UnexpectedSuccess,
}

#[derive(Debug, Default)]
pub struct TransferForm {
    pub from: String,
    pub to: String,
    pub token_id: String,
    outcome: Option<TransferOutcome>,
    result: Option<FormResult>,
}

impl TransferForm {
    pub fn new(from: impl Into<String>, to: impl Into<String>, token_id: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            token_id: token_id.into(),
            outcome: None,
            result: None,
        }
    }

    pub const fn result(&self) -> Option<&FormResult> {
        self.result.as_ref()
    }

    pub const fn outcome(&self) -> Option<TransferOutcome> {
        self.outcome
    }

    /// Attempt the transfer. Every result carries error status; the
    /// outcome tells an expected rejection apart from the rest.
    pub async fn submit(&mut self, client: &GatewayClient) -> &FormResult {
        let (outcome, result) = match self.inputs() {
            Err(invalid) => (TransferOutcome::Invalid, invalid),
            Ok((from, to, token_id)) => {
                check_address("from", &from);
                check_address("to", &to);
                match client.attempt_transfer(&from, &to, &token_id).await {
                    Ok(_) => (
                        TransferOutcome::UnexpectedSuccess,
                        FormResult::error(MSG_UNEXPECTED_TRANSFER),
                    ),
                    Err(e) => {
                        error!("Transfer error: {e}");
                        info!("Transfer of {token_id} rejected as expected");
                        (TransferOutcome::Rejected, FormResult::error(MSG_NOT_TRANSFERABLE))
                    }
                }
            }
        };

        self.outcome = Some(outcome);
        self.result.insert(result)
    }

    fn inputs(&self) -> Result<(String, String, String), FormResult> {
        let from = require(&self.from, MSG_ENTER_OWNER)?;
        let to = require(&self.to, MSG_ENTER_RECIPIENT)?;
        let token_id = require(&self.token_id, MSG_ENTER_TOKEN_ID)?;
        Ok((from, to, token_id))
    }
}
