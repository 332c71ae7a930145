#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};
#[cfg(test)]
use tokio::sync::Mutex as TokioMutex;
use tracing::debug;

/// Key-value persistence for the tokens a login hands back, shaped after
/// browser local storage.
pub trait TokenStore {
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn remove_item(&mut self, key: &str) -> anyhow::Result<()>;
}

/// Stores tokens in the OS keyring, one namespace per CLI context.
pub struct KeyringTokenStore {
    context_name: String,
}

impl KeyringTokenStore {
    pub fn new(context_name: &str) -> Self {
        Self {
            context_name: context_name.to_string(),
        }
    }
}

impl TokenStore for KeyringTokenStore {
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        keyring_set(&self.context_name, key, value)?;
        debug!(context = %self.context_name, key, "stored token in keyring");
        Ok(())
    }

    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        keyring_get(&self.context_name, key)
    }

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()> {
        keyring_delete(&self.context_name, key)
    }
}

fn keyring_key(context_name: &str, key: &str) -> String {
    format!("{context_name}::{key}")
}

#[cfg(test)]
fn keyring_store() -> &'static Mutex<HashMap<String, String>> {
    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
static KEYRING_TEST_LOCK: OnceLock<TokioMutex<()>> = OnceLock::new();

#[cfg(test)]
pub(crate) fn lock_keyring_tests_sync() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .blocking_lock()
}

#[cfg(test)]
pub(crate) async fn lock_keyring_tests_async() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .lock()
        .await
}

#[cfg(test)]
pub(crate) fn clear_keyring_mock() {
    if let Ok(mut map) = keyring_store().lock() {
        map.clear();
    }
}

#[cfg(not(test))]
fn keyring_entry(context_name: &str, key: &str) -> anyhow::Result<keyring::Entry> {
    let service = "capita-cli";
    keyring::Entry::new(service, &keyring_key(context_name, key))
        .map_err(|err| anyhow::anyhow!("failed to access keyring: {err}"))
}

#[cfg(not(test))]
fn keyring_set(context_name: &str, key: &str, value: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(context_name, key)?;
    entry
        .set_password(value)
        .map_err(|err| anyhow::anyhow!("failed to store {key}: {err}"))
}

#[cfg(not(test))]
fn keyring_get(context_name: &str, key: &str) -> anyhow::Result<Option<String>> {
    let entry = keyring_entry(context_name, key)?;
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(anyhow::anyhow!(
            "failed to load {key} from keychain for context '{}': {err}",
            context_name
        )),
    }
}

#[cfg(not(test))]
fn keyring_delete(context_name: &str, key: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(context_name, key)?;
    match entry.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => Err(anyhow::anyhow!(
            "failed to delete {key} from keychain for context '{}': {err}",
            context_name
        )),
    }
}

#[cfg(test)]
fn keyring_set(context_name: &str, key: &str, value: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.insert(keyring_key(context_name, key), value.to_string());
    Ok(())
}

#[cfg(test)]
fn keyring_get(context_name: &str, key: &str) -> anyhow::Result<Option<String>> {
    let store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    Ok(store.get(&keyring_key(context_name, key)).cloned())
}

#[cfg(test)]
fn keyring_delete(context_name: &str, key: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.remove(&keyring_key(context_name, key));
    Ok(())
}
