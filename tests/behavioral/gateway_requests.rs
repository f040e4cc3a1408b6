// ABOUTME: Behavioral tests for request shape: routes, headers and envelope per operation

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::fixtures::*;

#[tokio::test]
async fn test_mint_posts_envelope_to_invoke_route() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .and(path(format!("/invoke/{SBT_CONTRACT}/MintSBT")))
        .and(header("x-api-key", API_KEY))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(envelope(json!({ "address": RECIPIENT }))))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(TOKEN_ID))))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client.mint_sbt(RECIPIENT).await.unwrap();
    assert_eq!(receipt.token_id.as_deref(), Some(TOKEN_ID));
    assert_eq!(receipt.response.status.as_deref(), Some("SUCCESS"));
}

#[tokio::test]
async fn test_query_sends_owner_and_token_id() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .and(path(format!("/query/{SBT_CONTRACT}/QuerySBT")))
        .and(body_json(envelope(json!({ "owner": OWNER, "tokenID": TOKEN_ID }))))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success(token_record(OWNER, TOKEN_ID, "Rust course"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = client.query_sbt(OWNER, TOKEN_ID).await.unwrap();
    assert_eq!(token.owner, OWNER);
    assert_eq!(token.token_id, TOKEN_ID);
    assert_eq!(token.description().as_deref(), Some("Rust course"));
}

#[tokio::test]
async fn test_lookup_by_owner_sends_owner_only() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .and(path(format!("/query/{SBT_CONTRACT}/GetSBTByOwner")))
        .and(body_json(envelope(json!({ "owner": OWNER }))))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(token_record(OWNER, TOKEN_ID, "x"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = client.get_sbt_by_owner(OWNER).await.unwrap();
    assert_eq!(token.token_id, TOKEN_ID);
}

#[tokio::test]
async fn test_transfer_goes_to_transfer_contract_query_route() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .and(path(format!("/query/{TRANSFER_CONTRACT}/TransferSBT")))
        .and(body_json(envelope(
            json!({ "from": OWNER, "to": RECIPIENT, "tokenID": TOKEN_ID }),
        )))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(failure("soulbound tokens are not transferable")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client.attempt_transfer(OWNER, RECIPIENT, TOKEN_ID).await.unwrap_err();
    assert_eq!(err.to_string(), "soulbound tokens are not transferable");
}

#[tokio::test]
async fn test_list_sends_empty_args() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .and(path(format!("/query/{SBT_CONTRACT}/GetAllTokenIDs")))
        .and(body_json(envelope(json!({}))))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(["t1", "t2", "t3"]))))
        .expect(1)
        .mount(&server)
        .await;

    let ids = client.get_all_token_ids().await.unwrap();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[tokio::test]
async fn test_list_with_null_payload_is_empty() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .and(path(format!("/query/{SBT_CONTRACT}/GetAllTokenIDs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(null))))
        .mount(&server)
        .await;

    assert!(client.get_all_token_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_custom_envelope_settings_are_sent() {
    let server = wiremock::MockServer::start().await;
    let config = soulbound::config::GatewayConfig {
        network: "MAINNET".to_string(),
        wallet_address: "abcdef".to_string(),
        ..gateway_config(&server)
    };
    let client = soulbound::gateway::GatewayClient::new(config, API_KEY).unwrap();

    Mock::given(method("POST"))
        .and(body_json(json!({
            "network": "MAINNET",
            "blockchain": "KALP",
            "walletAddress": "abcdef",
            "args": {},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(["t1"]))))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.get_all_token_ids().await.unwrap(), vec!["t1"]);
}
