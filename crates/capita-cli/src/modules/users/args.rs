use clap::Args;

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct ResetPasswordArgs {
    #[arg(long)]
    pub email: String,
}

#[derive(Args)]
pub struct VerifyAccountArgs {
    #[arg(long)]
    pub key: String,
}

#[derive(Args)]
pub struct VerifyPasswordArgs {
    #[arg(long)]
    pub key: String,
}

#[derive(Args)]
pub struct RenewPasswordArgs {
    #[arg(long)]
    pub key: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub confirm_password: Option<String>,
}
