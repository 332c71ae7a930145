use capita_core::{DataState, ACCESS_TOKEN_KEY, HOME_ROUTE, REFRESH_TOKEN_KEY};
use chrono::Utc;
use tracing::{debug, info, warn};

use super::flow::{LoginFlow, LoginForm, Navigator};
use super::storage::{KeyringTokenStore, TokenStore};
use crate::cli_args::{LoginArgs, LogoutArgs};
use crate::modules::system::{ensure_secure_addr, resolve_addr, CliConfig, CliContext};
use crate::modules::users::UserService;
use crate::{prompt_line, prompt_password, DEFAULT_CONTEXT};

/// Records the route a login lands on; the CLI renders it once the flow is done.
#[derive(Default)]
pub(crate) struct TerminalNavigator {
    route: Option<String>,
}

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, route: &str) {
        debug!(route, "navigating");
        self.route = Some(route.to_string());
    }
}

pub(crate) async fn handle_login_command(
    args: LoginArgs,
    addr_arg: Option<String>,
    context_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    let context_name = args
        .context
        .or(context_arg)
        .or_else(|| config.current_context.clone())
        .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());
    let addr = resolve_addr(addr_arg, Some(&context_name), config);
    ensure_secure_addr(&addr, allow_insecure)?;

    let email = match args.email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    let service = UserService::new(client.clone(), &addr);
    let (mut flow, mut states) = LoginFlow::new(
        &service,
        KeyringTokenStore::new(&context_name),
        TerminalNavigator::default(),
    );
    let form = LoginForm {
        email: email.clone(),
        password,
    };
    let state = flow.submit(&form).await;
    while let Ok(observed) = states.try_recv() {
        debug!(state = %observed.data_state, "login state");
    }
    let (store, navigator) = flow.into_parts();

    if state.data_state == DataState::Error {
        let message = state.error.unwrap_or_else(|| "login failed".to_string());
        anyhow::bail!("{message}");
    }
    let Some(route) = navigator.route else {
        anyhow::bail!("login response did not include a profile; no tokens were stored");
    };

    let entry = config
        .contexts
        .entry(context_name.clone())
        .or_insert_with(|| CliContext::new(addr.clone()));
    entry.addr = addr;
    entry.email = Some(email);
    entry.logged_in_at = Some(Utc::now().to_rfc3339());
    config.current_context = Some(context_name.clone());
    info!(context = %context_name, "logged in");

    println!("Logged in");
    render_route(&service, &store, &route).await;
    Ok(())
}

/// Shows what the landing route would: the home view greets the signed-in user.
async fn render_route(service: &UserService, store: &impl TokenStore, route: &str) {
    if route != HOME_ROUTE {
        return;
    }
    let access_token = match store.get_item(ACCESS_TOKEN_KEY) {
        Ok(Some(token)) => token,
        Ok(None) => return,
        Err(err) => {
            warn!("failed to read access token: {err}");
            return;
        }
    };
    match service.profile(&access_token).await {
        Ok(response) => {
            if let Some(profile) = response.data {
                let user = profile.user;
                println!("Signed in as {} <{}>", user.display_name(), user.email);
                if !user.role_name.is_empty() {
                    println!("Role: {}", user.role_name);
                }
            }
        }
        Err(err) => warn!("failed to load profile: {err}"),
    }
}

pub(crate) fn handle_logout(
    args: LogoutArgs,
    context_arg: Option<String>,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    let context_name = args
        .context
        .or(context_arg)
        .or_else(|| config.current_context.clone())
        .ok_or_else(|| anyhow::anyhow!("context not set"))?;
    forget_context(
        config,
        &context_name,
        &mut KeyringTokenStore::new(&context_name),
    )?;

    println!("Logged out");
    Ok(())
}

/// Drops both tokens of a context and, only once they are gone, the account
/// recorded for it. Both removals are attempted even if the first fails.
pub(crate) fn forget_context(
    config: &mut CliConfig,
    context_name: &str,
    store: &mut impl TokenStore,
) -> anyhow::Result<()> {
    let Some(context) = config.contexts.get_mut(context_name) else {
        anyhow::bail!("context not found: {}", context_name);
    };

    let refresh = store.remove_item(REFRESH_TOKEN_KEY);
    let access = store.remove_item(ACCESS_TOKEN_KEY);
    refresh.and(access)?;

    context.email = None;
    context.logged_in_at = None;
    info!(context = %context_name, "cleared stored tokens");
    Ok(())
}
