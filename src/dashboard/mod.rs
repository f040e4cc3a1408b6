// ABOUTME: Dashboard forms: input validation, one gateway call per submit, user-facing result messages
//
// Each form mirrors one panel of the dashboard (mint, query, owner search,
// token list, transfer). Submitting takes `&mut self`, so a form can never
// have two requests in flight.

pub mod mint;
pub mod owner;
pub mod query;
pub mod tokens;
pub mod transfer;
pub mod validation;

use serde::Serialize;

use crate::gateway::SoulboundToken;

pub use mint::MintForm;
pub use owner::{OwnerForm, OwnerSummary};
pub use query::QueryForm;
pub use tokens::TokenListForm;
pub use transfer::{TransferForm, TransferOutcome};

pub const MSG_ENTER_RECIPIENT: &str = "Please enter recipient address";
pub const MSG_ENTER_OWNER: &str = "Please enter owner's address";
pub const MSG_ENTER_OWNER_SEARCH: &str = "Please enter the owner's address.";
pub const MSG_ENTER_TOKEN_ID: &str = "Please enter Token ID";
pub const MSG_MINT_SUCCESS: &str = "Certification SBT minted successfully! Your achievement is now permanently recorded on the blockchain.";
pub const MSG_AUTH_FAILED: &str = "Authentication failed. Please check API key.";
pub const MSG_OWNER_LOOKUP_FAILED: &str = "An unexpected error occurred while fetching SBTs.";
pub const MSG_NO_VALID_DATA: &str = "No valid data found.";
pub const MSG_NO_DESCRIPTION: &str = "No description available";
pub const MSG_NO_TOKEN_IDS: &str = "No token IDs found or the response was empty.";
pub const MSG_NOT_TRANSFERABLE: &str = "soulbound tokens are not transferable";
pub const MSG_UNEXPECTED_TRANSFER: &str = "Unexpected success response. This should not happen.";

/// Outcome shown under a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Success,
    Error,
}

/// Structured payload accompanying a successful result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormData {
    Minted { token_id: String },
    Token(SoulboundToken),
    Owner(OwnerSummary),
    TokenIds(Vec<String>),
}

/// Status, single user-facing message, optional data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormResult {
    pub status: FormStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<FormData>,
}

impl FormResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Success,
            message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: FormStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: FormData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == FormStatus::Success
    }
}
