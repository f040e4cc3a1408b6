// ABOUTME: CLI tokens command - list every SBT token id

use anyhow::Result;
use std::process::ExitCode;

use super::util::{audit_form, build_client, exit_code, load_config, print_result, resolve_format};
use super::GlobalArgs;
use crate::audit::AuditAction;
use crate::dashboard::TokenListForm;

/// Execute the tokens command
pub async fn execute(globals: &GlobalArgs) -> Result<ExitCode> {
    let config = load_config(globals)?;
    let format = resolve_format(globals, &config);
    let client = build_client(globals, &config)?;

    let mut form = TokenListForm::new();
    let result = form.submit(&client).await;
    audit_form(AuditAction::TokenIdsListed, "tokens", result, None, None);

    print_result(result, format)?;
    Ok(exit_code(result.is_success()))
}
