// ABOUTME: CLI owner command - find the SBT held by an address

use anyhow::Result;
use std::process::ExitCode;

use super::util::{audit_form, build_client, exit_code, load_config, print_result, resolve_format};
use super::{GlobalArgs, OwnerArgs};
use crate::audit::AuditAction;
use crate::dashboard::{FormData, OwnerForm};

/// Execute the owner command
pub async fn execute(args: OwnerArgs, globals: &GlobalArgs) -> Result<ExitCode> {
    let config = load_config(globals)?;
    let format = resolve_format(globals, &config);
    let client = build_client(globals, &config)?;

    let mut form = OwnerForm::new(args.owner.clone());
    let result = form.submit(&client).await;

    let token_id = match &result.data {
        Some(FormData::Owner(summary)) => Some(summary.token_id.as_str()),
        _ => None,
    };
    audit_form(AuditAction::SbtLookedUp, "owner", result, Some(&args.owner), token_id);

    print_result(result, format)?;
    Ok(exit_code(result.is_success()))
}
