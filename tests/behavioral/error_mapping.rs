// ABOUTME: Behavioral tests for mapping HTTP and contract failures to gateway errors

use serde_json::json;
use soulbound::gateway::{ContractFailureKind, GatewayError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::fixtures::*;

#[tokio::test]
async fn test_http_error_uses_body_message() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "invalid args for QuerySBT" })),
        )
        .mount(&server)
        .await;

    let err = client.query_sbt(OWNER, TOKEN_ID).await.unwrap_err();
    assert!(matches!(err, GatewayError::Http { status: 400, .. }));
    assert_eq!(err.to_string(), "invalid args for QuerySBT");
}

#[tokio::test]
async fn test_http_error_without_json_body() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client.get_all_token_ids().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "HTTP error! status: 502");
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid API key" })))
        .mount(&server)
        .await;

    let err = client.mint_sbt(RECIPIENT).await.unwrap_err();
    assert!(err.is_auth());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_forbidden_is_auth_error() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client.mint_sbt(RECIPIENT).await.unwrap_err();
    assert!(matches!(err, GatewayError::Unauthorized { status: 403, .. }));
}

#[tokio::test]
async fn test_contract_failure_is_classified() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .and(path(format!("/invoke/{SBT_CONTRACT}/MintSBT")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(failure(&format!("owner '{RECIPIENT}' already has an SBT"))),
        )
        .mount(&server)
        .await;

    let err = client.mint_sbt(RECIPIENT).await.unwrap_err();
    let failure = err.contract_failure().expect("contract failure");
    assert_eq!(failure.kind(), ContractFailureKind::AlreadyHasSbt);
    assert!(err.to_string().contains("already has an SBT"));
}

#[tokio::test]
async fn test_contract_failure_with_object_result() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "FAILURE",
            "result": { "error": "no SBTs found in the system" }
        })))
        .mount(&server)
        .await;

    let err = client.get_all_token_ids().await.unwrap_err();
    assert_eq!(
        err.contract_failure().map(|f| f.kind()),
        Some(ContractFailureKind::NoTokens)
    );
}

#[tokio::test]
async fn test_success_body_that_is_not_json() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = client.get_all_token_ids().await.unwrap_err();
    assert!(matches!(err, GatewayError::Decode(_)));
}

#[tokio::test]
async fn test_query_without_record_is_unexpected_payload() {
    let (server, client) = fake_gateway().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "SUCCESS" })))
        .mount(&server)
        .await;

    let err = client.query_sbt(OWNER, TOKEN_ID).await.unwrap_err();
    assert!(matches!(err, GatewayError::UnexpectedPayload(_)));
}

#[tokio::test]
async fn test_unreachable_gateway_is_network_error() {
    let config = soulbound::config::GatewayConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 5,
        ..soulbound::config::GatewayConfig::default()
    };

    let client = soulbound::gateway::GatewayClient::new(config, API_KEY).unwrap();
    let err = client.get_all_token_ids().await.unwrap_err();
    assert!(matches!(err, GatewayError::Network(_)));
}
