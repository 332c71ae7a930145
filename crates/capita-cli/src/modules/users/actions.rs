use capita_core::{NewUser, ACCESS_TOKEN_KEY};

use crate::cli_args::{
    RegisterArgs, RenewPasswordArgs, ResetPasswordArgs, VerifyAccountArgs, VerifyPasswordArgs,
};
use crate::modules::auth::{KeyringTokenStore, TokenStore};
use crate::modules::system::CommandContext;
use crate::prompt_password;

pub(crate) async fn handle_profile(ctx: &CommandContext) -> anyhow::Result<()> {
    let access_token = resolve_access_token(ctx)?;
    let response = ctx.service.profile(&access_token).await?;
    let profile = response
        .into_data()
        .ok_or_else(|| anyhow::anyhow!("profile response carried no data"))?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let user = NewUser {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password,
    };
    let response = ctx.service.register(&user).await?;
    println!("{}", response.message);
    if let Some(created) = response.data {
        println!("Created {} <{}>", created.user.display_name(), created.user.email);
    }
    Ok(())
}

pub(crate) async fn handle_reset_password(
    args: ResetPasswordArgs,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let response = ctx.service.reset_password(&args.email).await?;
    println!("{}", response.message);
    Ok(())
}

pub(crate) async fn handle_verify_password(
    args: VerifyPasswordArgs,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let response = ctx.service.verify_password(&args.key).await?;
    println!("{}", response.message);
    if let Some(profile) = response.data {
        println!("Reset key belongs to {}", profile.user.email);
    }
    Ok(())
}

pub(crate) async fn handle_renew_password(
    args: RenewPasswordArgs,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let (password, confirm_password) = match (args.password, args.confirm_password) {
        (Some(password), Some(confirm)) => (password, confirm),
        (Some(password), None) => (password.clone(), password),
        (None, confirm) => {
            let password = prompt_password("New password: ")?;
            let confirm = match confirm {
                Some(confirm) => confirm,
                None => prompt_password("Confirm password: ")?,
            };
            (password, confirm)
        }
    };
    // The backend compares both values and rejects a mismatch with a reason.
    let response = ctx
        .service
        .renew_password(&args.key, &password, &confirm_password)
        .await?;
    println!("{}", response.message);
    Ok(())
}

pub(crate) async fn handle_verify_account(
    args: VerifyAccountArgs,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    let response = ctx.service.verify_account(&args.key).await?;
    println!("{}", response.message);
    Ok(())
}

fn resolve_access_token(ctx: &CommandContext) -> anyhow::Result<String> {
    if let Some(token) = ctx.access_token.clone() {
        return Ok(token);
    }
    let context_name = ctx
        .context_name
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("context not set; run `capita login` or pass --token"))?;
    KeyringTokenStore::new(context_name)
        .get_item(ACCESS_TOKEN_KEY)?
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no access token stored for context '{}'; run `capita login`",
                context_name
            )
        })
}
