use capita_core::{
    CustomHttpResponse, LoginState, Profile, ACCESS_TOKEN_KEY, HOME_ROUTE, REFRESH_TOKEN_KEY,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::storage::TokenStore;
use crate::modules::users::UserService;

/// Where the flow sends the user once the tokens are in place.
pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Drives one login attempt per [`submit`](Self::submit): a `Loading` state,
/// a single request, then exactly one terminal state on the channel.
pub struct LoginFlow<'a, S, N> {
    service: &'a UserService,
    store: S,
    navigator: N,
    states: mpsc::UnboundedSender<LoginState>,
}

impl<'a, S: TokenStore, N: Navigator> LoginFlow<'a, S, N> {
    pub fn new(
        service: &'a UserService,
        store: S,
        navigator: N,
    ) -> (Self, mpsc::UnboundedReceiver<LoginState>) {
        let (states, receiver) = mpsc::unbounded_channel();
        let flow = Self {
            service,
            store,
            navigator,
            states,
        };
        (flow, receiver)
    }

    pub async fn submit(&mut self, form: &LoginForm) -> LoginState {
        self.emit(LoginState::loading());
        info!(server = %self.service.server(), "submitting login");
        debug!(email = %form.email, "login account");

        let state = match self.service.login(&form.email, &form.password).await {
            Ok(response) => match self.complete(response) {
                Ok(()) => LoginState::loaded(),
                Err(err) => {
                    warn!("login succeeded but tokens were not saved: {err}");
                    LoginState::error(err.to_string())
                }
            },
            Err(err) => {
                info!("login failed: {err}");
                LoginState::error(err.to_string())
            }
        };

        self.emit(state.clone());
        state
    }

    pub fn into_parts(self) -> (S, N) {
        (self.store, self.navigator)
    }

    fn complete(&mut self, response: CustomHttpResponse<Profile>) -> anyhow::Result<()> {
        let Some(profile) = response.data else {
            debug!(message = %response.message, "login response carried no profile");
            return Ok(());
        };
        self.store.set_item(ACCESS_TOKEN_KEY, &profile.access_token)?;
        self.store
            .set_item(REFRESH_TOKEN_KEY, &profile.refresh_token)?;
        self.navigator.navigate(HOME_ROUTE);
        Ok(())
    }

    fn emit(&self, state: LoginState) {
        if self.states.send(state).is_err() {
            debug!("login state receiver dropped");
        }
    }
}
