// ABOUTME: CLI transfer command - attempt a transfer and confirm the contract refuses it
//
// A rejection is the expected result, so it exits 0. Missing input or an
// accepted transfer exits non-zero.

use anyhow::Result;
use std::process::ExitCode;

use super::util::{audit_form_with, build_client, exit_code, load_config, print_result, resolve_format};
use super::{GlobalArgs, TransferArgs};
use crate::audit::{AuditAction, AuditResult};
use crate::dashboard::{TransferForm, TransferOutcome};

/// Execute the transfer command
pub async fn execute(args: TransferArgs, globals: &GlobalArgs) -> Result<ExitCode> {
    let config = load_config(globals)?;
    let format = resolve_format(globals, &config);
    let client = build_client(globals, &config)?;

    let mut form = TransferForm::new(args.from.clone(), args.to.clone(), args.token_id.clone());
    let message = form.submit(&client).await.message.clone();
    let outcome = form.outcome();

    let audit_result = match outcome {
        Some(TransferOutcome::Rejected) => AuditResult::Rejected(message),
        Some(TransferOutcome::UnexpectedSuccess) => AuditResult::Success,
        _ => AuditResult::Failed(message),
    };
    audit_form_with(
        AuditAction::TransferAttempted,
        "transfer",
        audit_result,
        Some(&args.from),
        Some(&args.token_id),
        Some(&format!("to {}", args.to.trim())),
    );

    if let Some(result) = form.result() {
        print_result(result, format)?;
    }
    Ok(exit_code(ended_as_expected(outcome)))
}

/// Only the contract's refusal counts as a successful run
pub fn ended_as_expected(outcome: Option<TransferOutcome>) -> bool {
    outcome == Some(TransferOutcome::Rejected)
}
