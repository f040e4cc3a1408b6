// ABOUTME: Gateway API client: shapes contract calls into request envelopes and normalizes responses

use crate::config::GatewayConfig;
use crate::gateway::error::{ContractFailure, GatewayError, GatewayResult};
use crate::gateway::types::{
    ContractArgs, ContractMethod, GatewayResponse, MintReceipt, RequestEnvelope, SoulboundToken,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Header carrying the gateway API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for the SBT contract gateway.
///
/// Holds no per-call state; every operation is one POST awaited to
/// completion.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    config: GatewayConfig,
    api_key: String,
    base_url: Url,
}

impl GatewayClient {
    /// Create a client for the given gateway settings and API key
    pub fn new(config: GatewayConfig, api_key: impl Into<String>) -> GatewayResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidEndpoint(config.base_url.clone()));
        }

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            api_key,
            base_url,
        })
    }

    /// Full URL for a contract method
    pub fn endpoint(&self, method: ContractMethod) -> GatewayResult<Url> {
        let contract_id = if method.uses_transfer_contract() {
            &self.config.transfer_contract_id
        } else {
            &self.config.sbt_contract_id
        };
        if contract_id.is_empty() || contract_id.contains('/') {
            return Err(GatewayError::InvalidEndpoint(format!(
                "contract id '{contract_id}' for {method}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidEndpoint(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend([method.kind().as_path(), contract_id.as_str(), method.name()]);
        Ok(url)
    }

    /// Wrap contract arguments in the fixed network/wallet envelope
    pub fn envelope(&self, args: &ContractArgs) -> RequestEnvelope {
        RequestEnvelope {
            network: self.config.network.clone(),
            blockchain: self.config.blockchain.clone(),
            wallet_address: self.config.wallet_address.clone(),
            args: args.to_json(),
        }
    }

    /// Mint a token to `address`
    pub async fn mint_sbt(&self, address: &str) -> GatewayResult<MintReceipt> {
        let response = self
            .call(ContractArgs::Mint {
                address: address.to_string(),
            })
            .await?;

        let token_id = response.payload().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        info!("Minted SBT for {address}: {}", token_id.as_deref().unwrap_or("<no id returned>"));

        Ok(MintReceipt { token_id, response })
    }

    /// Fetch the token identified by `owner` and `token_id`
    pub async fn query_sbt(&self, owner: &str, token_id: &str) -> GatewayResult<SoulboundToken> {
        let response = self
            .call(ContractArgs::Query {
                owner: owner.to_string(),
                token_id: token_id.to_string(),
            })
            .await?;
        decode_token(&response)
    }

    /// Fetch the token held by `owner`
    pub async fn get_sbt_by_owner(&self, owner: &str) -> GatewayResult<SoulboundToken> {
        let response = self
            .call(ContractArgs::ByOwner {
                owner: owner.to_string(),
            })
            .await?;
        decode_token(&response)
    }

    /// Ask the contract to move a token. The contract refuses every transfer,
    /// so an `Ok` here means the gateway misbehaved.
    pub async fn attempt_transfer(
        &self,
        from: &str,
        to: &str,
        token_id: &str,
    ) -> GatewayResult<GatewayResponse> {
        let response = self
            .call(ContractArgs::Transfer {
                from: from.to_string(),
                to: to.to_string(),
                token_id: token_id.to_string(),
            })
            .await?;
        warn!("Transfer of {token_id} from {from} to {to} was not rejected by the gateway");
        Ok(response)
    }

    /// List every token id known to the contract
    pub async fn get_all_token_ids(&self) -> GatewayResult<Vec<String>> {
        let response = self.call(ContractArgs::AllTokenIds).await?;

        let ids: Vec<String> = match response.payload() {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Some(other) => {
                return Err(GatewayError::UnexpectedPayload(format!(
                    "expected a list of token ids, got {other}"
                )));
            }
        };

        for id in ids.iter().filter(|id| Uuid::parse_str(id).is_err()) {
            debug!("Token id {id} is not a UUID");
        }

        Ok(ids)
    }

    /// POST one contract call and map HTTP and contract failures to errors
    async fn call(&self, args: ContractArgs) -> GatewayResult<GatewayResponse> {
        let method = args.method();
        let url = self.endpoint(method)?;
        let envelope = self.envelope(&args);

        debug!("Calling gateway {method} at {url}");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(&envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!("Gateway {method} failed with HTTP {}: {message}", status.as_u16());
            return Err(
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                    GatewayError::Unauthorized {
                        status: status.as_u16(),
                        message,
                    }
                } else {
                    GatewayError::Http {
                        status: status.as_u16(),
                        message,
                    }
                },
            );
        }

        let parsed: GatewayResponse = serde_json::from_str(&body)?;

        if parsed.is_failure() {
            let failure = ContractFailure::new(parsed.failure_message());
            debug!("Contract {method} reported failure: {failure}");
            return Err(GatewayError::Contract(failure));
        }

        debug!("Gateway {method} succeeded");
        Ok(parsed)
    }
}

/// Message for a non-2xx response: the body's `message`, else a status line
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}

fn decode_token(response: &GatewayResponse) -> GatewayResult<SoulboundToken> {
    let payload = response
        .payload()
        .ok_or_else(|| GatewayError::UnexpectedPayload("response has no token record".into()))?;

    // Some gateway versions return the record as a JSON string
    match payload {
        Value::String(raw) => Ok(serde_json::from_str(raw)?),
        other => Ok(serde_json::from_value(other.clone())?),
    }
}
