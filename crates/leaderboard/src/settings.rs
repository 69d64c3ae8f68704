//! Setup slots: player name and timer preference.

use thiserror::Error;

use crate::store::{KeyValueStore, StoreError, PLAYER_NAME_KEY, TIMER_ENABLED_KEY};

/// Name used when setup never stored one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("player name must not be empty")]
    BlankName,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Values written by the setup step and read at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub player_name: String,
    pub timer_enabled: bool,
}

impl Setup {
    /// Read both slots. Missing values fall back to `"Player"` and a
    /// disabled timer; only the exact string `"true"` enables the timer.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let player_name = store
            .get(PLAYER_NAME_KEY)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
        let timer_enabled = store.get(TIMER_ENABLED_KEY).as_deref() == Some("true");

        Self {
            player_name,
            timer_enabled,
        }
    }
}

/// Store a player name after trimming it. Blank names are rejected.
pub fn save_player_name(store: &mut impl KeyValueStore, name: &str) -> Result<String, SettingsError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SettingsError::BlankName);
    }
    store.set(PLAYER_NAME_KEY, name.to_string())?;
    Ok(name.to_string())
}

pub fn save_timer_enabled(store: &mut impl KeyValueStore, enabled: bool) -> Result<(), StoreError> {
    store.set(TIMER_ENABLED_KEY, enabled.to_string())
}
