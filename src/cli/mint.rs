// ABOUTME: CLI mint command - issue a certification SBT to an address

use anyhow::Result;
use std::process::ExitCode;

use super::util::{audit_form, build_client, exit_code, load_config, print_result, resolve_format};
use super::{GlobalArgs, MintArgs};
use crate::audit::AuditAction;
use crate::dashboard::{FormData, MintForm};

/// Execute the mint command
pub async fn execute(args: MintArgs, globals: &GlobalArgs) -> Result<ExitCode> {
    let config = load_config(globals)?;
    let format = resolve_format(globals, &config);
    let client = build_client(globals, &config)?;

    let recipient = args.address.clone();
    let mut form = MintForm::new(args.address);
    let result = form.submit(&client).await;

    let minted_id = match &result.data {
        Some(FormData::Minted { token_id }) => Some(token_id.as_str()),
        _ => None,
    };
    audit_form(AuditAction::SbtMinted, "mint", result, Some(&recipient), minted_id);

    print_result(result, format)?;
    Ok(exit_code(result.is_success()))
}
