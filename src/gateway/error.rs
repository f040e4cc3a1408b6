// ABOUTME: Error types for gateway calls, including classification of contract failure text

use thiserror::Error;

/// Errors that can occur while talking to the contract gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key could be resolved for the `x-api-key` header
    #[error("Gateway API key is not configured. Run 'sbt auth set' or export SBT_API_KEY.")]
    MissingApiKey,

    /// Base URL or contract id does not form a valid endpoint
    #[error("Invalid gateway endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport failure before a response arrived
    #[error("Failed to reach gateway: {0}")]
    Network(#[from] reqwest::Error),

    /// Gateway rejected the API key
    #[error("AUTH_ERROR: {message}")]
    Unauthorized { status: u16, message: String },

    /// Non-2xx response
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Gateway answered but the contract reported `FAILURE`
    #[error("{0}")]
    Contract(ContractFailure),

    /// Body could not be decoded as JSON
    #[error("Failed to parse gateway response: {0}")]
    Decode(#[from] serde_json::Error),

    /// JSON decoded but lacked the expected contract payload
    #[error("Unexpected gateway payload: {0}")]
    UnexpectedPayload(String),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// HTTP status carried by the error, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn contract_failure(&self) -> Option<&ContractFailure> {
        match self {
            Self::Contract(failure) => Some(failure),
            _ => None,
        }
    }

    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::MissingApiKey)
    }
}

/// Failure text reported by the contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFailure {
    pub message: String,
}

impl ContractFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Classify the failure by the phrases the SBT contract emits
    pub fn kind(&self) -> ContractFailureKind {
        let text = self.message.to_lowercase();
        if text.contains("does not have an sbt") {
            ContractFailureKind::NoSbtForOwner
        } else if text.contains("already has an sbt") {
            ContractFailureKind::AlreadyHasSbt
        } else if text.contains("not transferable") {
            ContractFailureKind::NotTransferable
        } else if text.contains("no sbts found") {
            ContractFailureKind::NoTokens
        } else if text.contains("does not exist") || text.contains("sbt not found") {
            ContractFailureKind::TokenNotFound
        } else if text.contains("metadata is not set") {
            ContractFailureKind::NotInitialized
        } else {
            ContractFailureKind::Other
        }
    }

    /// True when the text names an owner without a token
    pub fn is_missing_owner_sbt(&self) -> bool {
        self.message.contains("owner") && self.message.contains("does not have an SBT")
    }
}

impl std::fmt::Display for ContractFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Known contract failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFailureKind {
    NoSbtForOwner,
    AlreadyHasSbt,
    NotTransferable,
    TokenNotFound,
    NoTokens,
    NotInitialized,
    Other,
}
