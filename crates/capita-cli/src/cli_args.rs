use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::system::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "capita")]
#[command(about = "Capita account CLI")]
pub struct Cli {
    #[arg(long, env = "CAPITA_ADDR")]
    pub addr: Option<String>,
    #[arg(long, env = "CAPITA_TOKEN", help = "Access token to use instead of the stored one")]
    pub token: Option<String>,
    #[arg(long)]
    pub context: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// to non-local hosts and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Logout(LogoutArgs),
    Config(ConfigArgs),
    #[command(flatten)]
    Account(AccountCommand),
}

/// Commands that talk to the user API of the resolved context.
#[derive(Subcommand)]
pub enum AccountCommand {
    #[command(about = "Show the signed-in user's profile")]
    Profile,
    Register(RegisterArgs),
    #[command(about = "Request a password reset email")]
    ResetPassword(ResetPasswordArgs),
    #[command(about = "Check a password reset key and show whose account it belongs to")]
    VerifyPassword(VerifyPasswordArgs),
    #[command(about = "Set a new password using a password reset key")]
    RenewPassword(RenewPasswordArgs),
    #[command(about = "Confirm an account with the key from the verification email")]
    VerifyAccount(VerifyAccountArgs),
}
