use crate::cli_args::AccountCommand;
use crate::modules::system::CommandContext;
use crate::modules::users::{
    handle_profile, handle_register, handle_renew_password, handle_reset_password,
    handle_verify_account, handle_verify_password,
};

pub(crate) async fn handle_command(
    command: AccountCommand,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    match command {
        AccountCommand::Profile => handle_profile(ctx).await?,
        AccountCommand::Register(args) => handle_register(args, ctx).await?,
        AccountCommand::ResetPassword(args) => handle_reset_password(args, ctx).await?,
        AccountCommand::VerifyPassword(args) => handle_verify_password(args, ctx).await?,
        AccountCommand::RenewPassword(args) => handle_renew_password(args, ctx).await?,
        AccountCommand::VerifyAccount(args) => handle_verify_account(args, ctx).await?,
    }

    Ok(())
}
