//! Account backend interface.
//!
//! The flows in [`AccountActions`](crate::AccountActions) only decide *when*
//! a mutation may run; implementations of [`Account`] perform it.

use async_trait::async_trait;

use crate::error::Result;
use crate::settings::{Settings, SettingsUpdate};

/// Identifying information for the logged-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Email address the account is registered under.
    pub email: String,
}

/// The account backend a client drives.
#[async_trait]
pub trait Account: Send + Sync {
    /// Current profile information.
    async fn profile(&self) -> Result<Profile>;

    /// Verify the master password, failing with
    /// [`AccountError::WrongPassword`](crate::AccountError::WrongPassword)
    /// on a mismatch.
    async fn unlock(&self, password: &str) -> Result<()>;

    /// Replace the master password.
    async fn change_password(&self, new_password: &str) -> Result<()>;

    /// Permanently delete the account.
    ///
    /// A failure carries a human-readable description shown to the user.
    async fn delete(&self) -> Result<()>;

    /// Change the display name.
    async fn rename(&self, name: &str) -> Result<()>;

    /// End the current session.
    async fn logout(&self) -> Result<()>;

    /// Current application settings.
    async fn settings(&self) -> Result<Settings>;

    /// Apply a partial settings update, returning the effective settings.
    async fn set_settings(&self, update: SettingsUpdate) -> Result<Settings>;
}
