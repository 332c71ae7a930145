use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::{handle_login_command, handle_logout};
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, resolve_addr, save_config,
    CommandContext,
};
use crate::modules::users::UserService;

pub(crate) const DEFAULT_CONTEXT: &str = "default";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;
    let mut config = load_config()?;
    let addr_arg = cli.addr.clone();
    let context_arg = cli.context.clone();

    match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        Command::Login(args) => {
            handle_login_command(
                args,
                addr_arg,
                context_arg,
                cli.insecure,
                &client,
                &mut config,
            )
            .await?;
            save_config(&config)?;
        }
        Command::Logout(args) => {
            handle_logout(args, context_arg, &mut config)?;
            save_config(&config)?;
        }
        Command::Account(command) => {
            let context_name = context_arg.or_else(|| config.current_context.clone());
            let addr = resolve_addr(addr_arg, context_name.as_deref(), &config);
            ensure_secure_addr(&addr, cli.insecure)?;

            let ctx = CommandContext {
                service: UserService::new(client, &addr),
                access_token: cli.token,
                context_name,
            };
            handle_command(command, &ctx).await?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    let value = input.trim().to_string();
    if value.is_empty() {
        anyhow::bail!("{} is required", prompt.trim_end_matches([':', ' ']));
    }
    Ok(value)
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
