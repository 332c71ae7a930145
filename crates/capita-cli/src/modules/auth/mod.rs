mod actions;
pub(crate) mod args;
mod flow;
mod storage;

pub(crate) use actions::{handle_login_command, handle_logout};
#[cfg(test)]
pub(crate) use actions::forget_context;
#[cfg(test)]
pub(crate) use flow::{LoginFlow, LoginForm, Navigator};
pub(crate) use storage::{KeyringTokenStore, TokenStore};
#[cfg(test)]
pub(crate) use storage::{clear_keyring_mock, lock_keyring_tests_async, lock_keyring_tests_sync};
