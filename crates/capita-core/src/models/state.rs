use serde::{Deserialize, Serialize};

use super::enums::DataState;

/// Outcome of the most recent login attempt. Each attempt produces fresh
/// values; nothing is patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginState {
    pub data_state: DataState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl LoginState {
    fn with_state(data_state: DataState) -> Self {
        Self {
            data_state,
            login_success: None,
            error: None,
            message: None,
            phone: None,
        }
    }

    pub fn loading() -> Self {
        Self::with_state(DataState::Loading)
    }

    pub fn loaded() -> Self {
        Self::with_state(DataState::Loaded)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            login_success: Some(false),
            error: Some(message.into()),
            ..Self::with_state(DataState::Error)
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.data_state.is_terminal()
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::loaded()
    }
}
