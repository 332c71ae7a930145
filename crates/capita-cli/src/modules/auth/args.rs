use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Args)]
pub struct LogoutArgs {
    #[arg(long)]
    pub context: Option<String>,
}
