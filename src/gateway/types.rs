// ABOUTME: Wire types for the smart-contract gateway: request envelope, response body, token records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contract status reported by the gateway when the contract call failed
pub const STATUS_FAILURE: &str = "FAILURE";

/// Body POSTed to every gateway endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub network: String,
    pub blockchain: String,
    pub wallet_address: String,
    pub args: Map<String, Value>,
}

/// Contract arguments for one operation.
///
/// Serialized field names follow the contract's parameter names, so
/// `tokenID` keeps its odd casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractArgs {
    Mint { address: String },
    Query { owner: String, token_id: String },
    ByOwner { owner: String },
    Transfer { from: String, to: String, token_id: String },
    AllTokenIds,
}

impl ContractArgs {
    /// Contract method invoked by these arguments
    pub const fn method(&self) -> ContractMethod {
        match self {
            Self::Mint { .. } => ContractMethod::MintSbt,
            Self::Query { .. } => ContractMethod::QuerySbt,
            Self::ByOwner { .. } => ContractMethod::GetSbtByOwner,
            Self::Transfer { .. } => ContractMethod::TransferSbt,
            Self::AllTokenIds => ContractMethod::GetAllTokenIds,
        }
    }

    /// Render as the `args` object of the envelope
    pub fn to_json(&self) -> Map<String, Value> {
        let mut args = Map::new();
        match self {
            Self::Mint { address } => {
                args.insert("address".into(), Value::String(address.clone()));
            }
            Self::Query { owner, token_id } => {
                args.insert("owner".into(), Value::String(owner.clone()));
                args.insert("tokenID".into(), Value::String(token_id.clone()));
            }
            Self::ByOwner { owner } => {
                args.insert("owner".into(), Value::String(owner.clone()));
            }
            Self::Transfer { from, to, token_id } => {
                args.insert("from".into(), Value::String(from.clone()));
                args.insert("to".into(), Value::String(to.clone()));
                args.insert("tokenID".into(), Value::String(token_id.clone()));
            }
            Self::AllTokenIds => {}
        }
        args
    }
}

/// Whether a gateway route submits a transaction or only reads state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Invoke,
    Query,
}

impl CallKind {
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Invoke => "invoke",
            Self::Query => "query",
        }
    }
}

/// Methods exposed by the SBT contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractMethod {
    MintSbt,
    QuerySbt,
    GetSbtByOwner,
    TransferSbt,
    GetAllTokenIds,
}

impl ContractMethod {
    /// Method name as it appears in the endpoint path
    pub const fn name(self) -> &'static str {
        match self {
            Self::MintSbt => "MintSBT",
            Self::QuerySbt => "QuerySBT",
            Self::GetSbtByOwner => "GetSBTByOwner",
            Self::TransferSbt => "TransferSBT",
            Self::GetAllTokenIds => "GetAllTokenIDs",
        }
    }

    /// Route used for this method.
    ///
    /// Only minting goes through `invoke`; transfers are sent through the
    /// query route since the contract rejects them unconditionally.
    pub const fn kind(self) -> CallKind {
        match self {
            Self::MintSbt => CallKind::Invoke,
            _ => CallKind::Query,
        }
    }

    /// Whether this method lives on the separate transfer deployment
    pub const fn uses_transfer_contract(self) -> bool {
        matches!(self, Self::TransferSbt)
    }
}

impl std::fmt::Display for ContractMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// JSON body returned by the gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl GatewayResponse {
    pub fn is_failure(&self) -> bool {
        self.status.as_deref() == Some(STATUS_FAILURE)
    }

    /// The contract's return value, nested at `result.result`
    pub fn payload(&self) -> Option<&Value> {
        self.result
            .as_ref()
            .and_then(|r| r.get("result"))
            .filter(|v| !v.is_null())
    }

    /// Best-effort failure text for a `FAILURE` response
    pub fn failure_message(&self) -> String {
        if let Some(Value::String(text)) = &self.result {
            if !text.is_empty() {
                return text.clone();
            }
        }
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        if let Some(result) = &self.result {
            for key in ["error", "message", "result"] {
                if let Some(Value::String(text)) = result.get(key) {
                    return text.clone();
                }
            }
        }
        "contract call failed".to_string()
    }
}

/// Token record stored by the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoulboundToken {
    pub owner: String,
    #[serde(rename = "tokenID")]
    pub token_id: String,
    /// Raw metadata JSON as stored on the ledger
    #[serde(default)]
    pub metadata: String,
}

impl SoulboundToken {
    /// Parse the embedded metadata, tolerating empty or malformed JSON
    pub fn parsed_metadata(&self) -> Option<SbtMetadata> {
        if self.metadata.trim().is_empty() {
            return None;
        }
        serde_json::from_str(&self.metadata).ok()
    }

    pub fn description(&self) -> Option<String> {
        self.parsed_metadata()
            .and_then(|m| m.description)
            .filter(|d| !d.is_empty())
    }
}

/// Metadata attached to every token at contract initialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbtMetadata {
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of a successful mint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MintReceipt {
    /// Token id issued by the contract, when the gateway echoes it back
    pub token_id: Option<String>,
    /// Full gateway body, kept for transaction details
    pub response: GatewayResponse,
}
