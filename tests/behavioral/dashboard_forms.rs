// ABOUTME: Behavioral tests for dashboard forms: validation messages and user-facing outcomes

use pretty_assertions::assert_eq;
use serde_json::json;
use soulbound::cli::transfer::ended_as_expected;
use soulbound::dashboard::{
    FormData, FormStatus, MintForm, OwnerForm, QueryForm, TokenListForm, TransferForm,
    TransferOutcome, MSG_AUTH_FAILED, MSG_ENTER_OWNER, MSG_ENTER_OWNER_SEARCH,
    MSG_ENTER_RECIPIENT, MSG_ENTER_TOKEN_ID, MSG_MINT_SUCCESS, MSG_NOT_TRANSFERABLE,
    MSG_NO_DESCRIPTION, MSG_NO_TOKEN_IDS, MSG_OWNER_LOOKUP_FAILED, MSG_UNEXPECTED_TRANSFER,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::fixtures::*;

#[tokio::test]
async fn test_mint_requires_recipient_and_sends_nothing() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = MintForm::new("   ");
    let result = form.submit(&client).await;
    assert_eq!(result.status, FormStatus::Error);
    assert_eq!(result.message, MSG_ENTER_RECIPIENT);
}

#[tokio::test]
async fn test_mint_success_clears_input_and_reports_token() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .and(path(format!("/invoke/{SBT_CONTRACT}/MintSBT")))
        .and(body_json(envelope(json!({ "address": RECIPIENT }))))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(TOKEN_ID))))
        .expect(1)
        .mount(&server)
        .await;

    // Surrounding whitespace is trimmed before sending
    let mut form = MintForm::new(format!("  {RECIPIENT}\n"));
    let result = form.submit(&client).await.clone();

    assert_eq!(result.status, FormStatus::Success);
    assert_eq!(result.message, MSG_MINT_SUCCESS);
    assert_eq!(
        result.data,
        Some(FormData::Minted {
            token_id: TOKEN_ID.to_string()
        })
    );
    assert!(form.recipient.is_empty());
    assert_eq!(form.result(), Some(&result));
}

#[tokio::test]
async fn test_mint_auth_failure_message() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized" })))
        .mount(&server)
        .await;

    let mut form = MintForm::new(RECIPIENT);
    let result = form.submit(&client).await;
    assert_eq!(result.message, MSG_AUTH_FAILED);
    // Input is kept so the user can retry
    assert_eq!(form.recipient, RECIPIENT);
}

#[tokio::test]
async fn test_mint_contract_failure_shows_contract_text() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(failure(&format!("owner '{RECIPIENT}' already has an SBT"))),
        )
        .mount(&server)
        .await;

    let mut form = MintForm::new(RECIPIENT);
    let result = form.submit(&client).await;
    assert_eq!(result.status, FormStatus::Error);
    assert_eq!(result.message, format!("owner '{RECIPIENT}' already has an SBT"));
}

#[tokio::test]
async fn test_query_validation_order() {
    let (_server, client) = fake_gateway().await;

    let mut form = QueryForm::new("", "");
    assert_eq!(form.submit(&client).await.message, MSG_ENTER_OWNER);

    let mut form = QueryForm::new(OWNER, " ");
    assert_eq!(form.submit(&client).await.message, MSG_ENTER_TOKEN_ID);
}

#[tokio::test]
async fn test_query_success_returns_record() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .and(path(format!("/query/{SBT_CONTRACT}/QuerySBT")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success(token_record(OWNER, TOKEN_ID, "Rust course"))),
        )
        .mount(&server)
        .await;

    let mut form = QueryForm::new(OWNER, TOKEN_ID);
    let result = form.submit(&client).await.clone();
    assert!(result.is_success());
    match result.data {
        Some(FormData::Token(token)) => {
            assert_eq!(token.owner, OWNER);
            assert_eq!(token.token_id, TOKEN_ID);
        }
        other => panic!("unexpected data: {other:?}"),
    }
    assert!(form.owner.is_empty());
    assert!(form.token_id.is_empty());
}

#[tokio::test]
async fn test_query_missing_token_shows_contract_text() {
    let (server, client) = fake_gateway().await;
    let text = format!("SBT with owner '{OWNER}' and tokenID 'nope' does not exist");
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure(&text)))
        .mount(&server)
        .await;

    let mut form = QueryForm::new(OWNER, "nope");
    let result = form.submit(&client).await;
    assert_eq!(result.status, FormStatus::Error);
    assert_eq!(result.message, text);
}

#[tokio::test]
async fn test_owner_requires_address() {
    let (_server, client) = fake_gateway().await;
    let mut form = OwnerForm::new("");
    assert_eq!(form.submit(&client).await.message, MSG_ENTER_OWNER_SEARCH);
}

#[tokio::test]
async fn test_owner_without_sbt() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .and(path(format!("/query/{SBT_CONTRACT}/GetSBTByOwner")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(failure(&format!("owner '{OWNER}' does not have an SBT"))),
        )
        .mount(&server)
        .await;

    let mut form = OwnerForm::new(OWNER);
    let result = form.submit(&client).await;
    assert_eq!(
        result.message,
        format!("The owner '{OWNER}' does not have any Soulbound Tokens (SBTs).")
    );
}

#[tokio::test]
async fn test_owner_other_contract_failure_is_generic() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure("failed to retrieve SBT data")))
        .mount(&server)
        .await;

    let mut form = OwnerForm::new(OWNER);
    assert_eq!(form.submit(&client).await.message, MSG_OWNER_LOOKUP_FAILED);
}

#[tokio::test]
async fn test_owner_success_summarizes_metadata() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "owner": OWNER,
            "tokenID": TOKEN_ID,
            "metadata": "",
        }))))
        .mount(&server)
        .await;

    let mut form = OwnerForm::new(OWNER);
    let result = form.submit(&client).await.clone();
    assert!(result.is_success());
    assert_eq!(
        serde_json::to_value(&result.data).unwrap(),
        json!({ "owner": OWNER, "tokenID": TOKEN_ID, "description": MSG_NO_DESCRIPTION })
    );
    assert!(form.owner.is_empty());
}

#[tokio::test]
async fn test_token_list_success() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(["a", "b"]))))
        .mount(&server)
        .await;

    let mut form = TokenListForm::new();
    let result = form.submit(&client).await;
    assert_eq!(result.message, "Successfully retrieved 2 token IDs.");
    assert_eq!(
        result.data,
        Some(FormData::TokenIds(vec!["a".to_string(), "b".to_string()]))
    );
}

#[tokio::test]
async fn test_token_list_empty_ledger() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure("no SBTs found in the system")))
        .mount(&server)
        .await;

    let mut form = TokenListForm::new();
    let result = form.submit(&client).await;
    assert_eq!(result.status, FormStatus::Error);
    assert_eq!(result.message, MSG_NO_TOKEN_IDS);
}

#[tokio::test]
async fn test_token_list_empty_array() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([]))))
        .mount(&server)
        .await;

    let mut form = TokenListForm::new();
    assert_eq!(form.submit(&client).await.message, MSG_NO_TOKEN_IDS);
}

#[tokio::test]
async fn test_token_list_http_error_passes_message() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut form = TokenListForm::new();
    assert_eq!(form.submit(&client).await.message, "HTTP error! status: 500");
}

#[tokio::test]
async fn test_transfer_validation_messages() {
    let (_server, client) = fake_gateway().await;

    let mut form = TransferForm::new("", RECIPIENT, TOKEN_ID);
    assert_eq!(form.submit(&client).await.message, MSG_ENTER_OWNER);
    assert_eq!(form.outcome(), Some(TransferOutcome::Invalid));
    assert!(!ended_as_expected(form.outcome()));

    let mut form = TransferForm::new(OWNER, "", TOKEN_ID);
    assert_eq!(form.submit(&client).await.message, MSG_ENTER_RECIPIENT);

    let mut form = TransferForm::new(OWNER, RECIPIENT, "");
    assert_eq!(form.submit(&client).await.message, MSG_ENTER_TOKEN_ID);
}

#[tokio::test]
async fn test_transfer_rejection_is_expected() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .and(path(format!("/query/{TRANSFER_CONTRACT}/TransferSBT")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "chaincode error" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = TransferForm::new(OWNER, RECIPIENT, TOKEN_ID);
    let result = form.submit(&client).await;
    assert_eq!(result.status, FormStatus::Error);
    assert_eq!(result.message, MSG_NOT_TRANSFERABLE);
    assert_eq!(form.outcome(), Some(TransferOutcome::Rejected));
    assert!(ended_as_expected(form.outcome()));
    // Transfer inputs are never cleared
    assert_eq!(form.token_id, TOKEN_ID);
}

#[tokio::test]
async fn test_transfer_unexpected_success() {
    let (server, client) = fake_gateway().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(null))))
        .mount(&server)
        .await;

    let mut form = TransferForm::new(OWNER, RECIPIENT, TOKEN_ID);
    let result = form.submit(&client).await;
    assert_eq!(result.status, FormStatus::Error);
    assert_eq!(result.message, MSG_UNEXPECTED_TRANSFER);
    assert_eq!(form.outcome(), Some(TransferOutcome::UnexpectedSuccess));
    assert!(!ended_as_expected(form.outcome()));
}
