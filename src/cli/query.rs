// ABOUTME: CLI query command - fetch one SBT by owner and token id

use anyhow::Result;
use std::process::ExitCode;

use super::util::{audit_form, build_client, exit_code, load_config, print_result, resolve_format};
use super::{GlobalArgs, QueryArgs};
use crate::audit::AuditAction;
use crate::dashboard::QueryForm;

/// Execute the query command
pub async fn execute(args: QueryArgs, globals: &GlobalArgs) -> Result<ExitCode> {
    let config = load_config(globals)?;
    let format = resolve_format(globals, &config);
    let client = build_client(globals, &config)?;

    let mut form = QueryForm::new(args.owner.clone(), args.token_id.clone());
    let result = form.submit(&client).await;
    audit_form(
        AuditAction::SbtQueried,
        "query",
        result,
        Some(&args.owner),
        Some(&args.token_id),
    );

    print_result(result, format)?;
    Ok(exit_code(result.is_success()))
}
