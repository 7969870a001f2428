//! Application settings.

use serde::{Deserialize, Serialize};

/// Smallest selectable auto-lock delay, in minutes.
pub const MIN_AUTO_LOCK_DELAY: u8 = 1;

/// Largest selectable auto-lock delay, in minutes.
pub const MAX_AUTO_LOCK_DELAY: u8 = 10;

/// Client settings persisted alongside the account profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Lock the vault automatically after a period of inactivity.
    pub auto_lock: bool,
    /// Inactivity period before locking, in minutes.
    pub auto_lock_delay: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_lock: true,
            auto_lock_delay: 5,
        }
    }
}

/// Partial settings change; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    /// New auto-lock flag.
    pub auto_lock: Option<bool>,
    /// New auto-lock delay, in minutes.
    pub auto_lock_delay: Option<u8>,
}

impl Settings {
    /// Apply `update`, clamping the delay into
    /// [`MIN_AUTO_LOCK_DELAY`]..=[`MAX_AUTO_LOCK_DELAY`].
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(auto_lock) = update.auto_lock {
            self.auto_lock = auto_lock;
        }
        if let Some(delay) = update.auto_lock_delay {
            self.auto_lock_delay = delay.clamp(MIN_AUTO_LOCK_DELAY, MAX_AUTO_LOCK_DELAY);
        }
    }
}
