// ABOUTME: Smart-contract gateway integration for Soulbound Token operations
// Every contract call is a single JSON POST authenticated with an API key

pub mod client;
pub mod error;
pub mod types;

pub use client::GatewayClient;
pub use error::{ContractFailure, ContractFailureKind, GatewayError, GatewayResult};
pub use types::{GatewayResponse, MintReceipt, SbtMetadata, SoulboundToken};
