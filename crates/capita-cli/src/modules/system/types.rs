use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::modules::users::UserService;

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: HashMap<String, CliContext>,
}

/// A named server the CLI talks to. Tokens live in the keyring, not here.
#[derive(Serialize, Deserialize, Clone)]
pub struct CliContext {
    pub addr: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub logged_in_at: Option<String>,
}

impl CliContext {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            email: None,
            logged_in_at: None,
        }
    }
}

pub struct CommandContext {
    pub service: UserService,
    pub access_token: Option<String>,
    pub context_name: Option<String>,
}
