//! Credential-gated account flows.
//!
//! Each flow is a linear sequence of suspend points. A dismissed prompt at
//! any point ends the flow in [`Outcome::Cancelled`] without invoking any
//! account mutation that has not yet been reached; mutations sit behind the
//! prompt step that gates them.

use std::sync::Arc;

use crate::account::Account;
use crate::error::Result;
use crate::notify::{AlertLevel, Navigator, Notifier};
use crate::prompt::{InputKind, PromptRequest, Prompter, Validation};
use crate::settings::{Settings, SettingsUpdate};

/// User-facing strings shared by the flows.
///
/// Kept in one place so front-ends and tests refer to the exact wording.
pub mod msg {
    /// Rejection for a failed master-password check. Also used verbatim for
    /// the repeat-password mismatch.
    pub const WRONG_PASSWORD: &str = "Wrong password! Please try again!";
    /// Rejection for an empty new password.
    pub const EMPTY_PASSWORD: &str = "Please enter a password!";
    /// Rejection for an empty profile name.
    pub const EMPTY_NAME: &str = "Please enter a name!";
    /// Token the deletion gate requires, typed exactly.
    pub const DELETE_TOKEN: &str = "DELETE";
    /// Rejection for a deletion confirmation that is not the exact token.
    pub const TYPE_DELETE: &str = "Type 'DELETE' to confirm";
    /// Fallback when a deletion failure carries no description.
    pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later!";
    /// Success notice after a password change.
    pub const PASSWORD_CHANGED: &str = "Master password changed successfully.";
    /// Question asked before logging out.
    pub const LOGOUT_CONFIRM: &str = "Do you really want to log out?";
    /// Intro for the current-password gate of a password change.
    pub const ENTER_CURRENT_PASSWORD: &str = "Please enter your current password!";
    /// Intro for the new-password prompt.
    pub const CHOOSE_NEW_PASSWORD: &str = "Now choose a new master password!";
    /// Intro for the repeat-password prompt.
    pub const CONFIRM_NEW_PASSWORD: &str = "Please confirm your new password!";
    /// Intro for the current-password gate of an account deletion.
    pub const ENTER_PASSWORD_TO_PROCEED: &str = "Please enter your master password to proceed.";
    /// Warning shown by the destructive deletion prompt.
    pub const DELETE_WARNING: &str = "Are you sure you want to delete this account? \
        All associated vaults and the data within them will be lost and any active \
        subscriptions will be canceled immediately. This action can not be undone!";
}

/// A sensitive mutation that requires re-proving the master password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatedAction {
    /// Replace the master password.
    ChangePassword,
    /// Permanently delete the account.
    DeleteAccount,
}

/// Terminal state of a flow that ran to an end.
///
/// Failures travel separately as
/// [`AccountError`](crate::AccountError), so callers can propagate them
/// with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step was accepted and the gated operation went through.
    Completed,
    /// The user dismissed a prompt before the operation was reached.
    Cancelled,
}

/// Account flows with their collaborators injected.
///
/// Replaces the application-wide singletons of a typical client shell:
/// the account backend, prompt service, notifier and navigator are all
/// passed in explicitly.
pub struct AccountActions {
    account: Arc<dyn Account>,
    prompter: Arc<dyn Prompter>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl AccountActions {
    /// Bundle the collaborators the flows drive.
    pub fn new(
        account: Arc<dyn Account>,
        prompter: Arc<dyn Prompter>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            account,
            prompter,
            notifier,
            navigator,
        }
    }

    /// Run a gated action end to end.
    pub async fn run_gated(&self, action: GatedAction) -> Result<Outcome> {
        match action {
            GatedAction::ChangePassword => self.change_password().await,
            GatedAction::DeleteAccount => self.delete_account().await,
        }
    }

    /// Prompt for the current master password until it unlocks the account.
    ///
    /// Resolves to `None` when the user dismisses the prompt.
    async fn confirm_master_password(
        &self,
        message: &str,
        title: &str,
        label: &str,
    ) -> Option<String> {
        let account = Arc::clone(&self.account);
        let request = PromptRequest::new(title, label, InputKind::Password, move |pwd: String| {
            let account = Arc::clone(&account);
            async move {
                match account.unlock(&pwd).await {
                    Ok(()) => Validation::Accepted(pwd),
                    Err(_) => Validation::Rejected(msg::WRONG_PASSWORD.into()),
                }
            }
        });
        self.prompter.prompt(message, request).await
    }

    /// Change the master password after re-authentication.
    ///
    /// A failure of the final `change_password` call is not handled here and
    /// propagates to the caller.
    pub async fn change_password(&self) -> Result<Outcome> {
        let current = self
            .confirm_master_password(
                msg::ENTER_CURRENT_PASSWORD,
                "Change Master Password",
                "Enter Current Password",
            )
            .await;
        if current.is_none() {
            return Ok(Outcome::Cancelled);
        }

        let request = PromptRequest::new(
            "Change Master Password",
            "Enter New Password",
            InputKind::Password,
            |pwd: String| async move {
                if pwd.is_empty() {
                    Validation::Rejected(msg::EMPTY_PASSWORD.into())
                } else {
                    Validation::Accepted(pwd)
                }
            },
        );
        let Some(new_password) = self.prompter.prompt(msg::CHOOSE_NEW_PASSWORD, request).await
        else {
            return Ok(Outcome::Cancelled);
        };

        let expected = new_password.clone();
        let request = PromptRequest::new(
            "Change Master Password",
            "Repeat New Password",
            InputKind::Password,
            move |pwd: String| {
                let expected = expected.clone();
                async move {
                    if pwd == expected {
                        Validation::Accepted(pwd)
                    } else {
                        Validation::Rejected(msg::WRONG_PASSWORD.into())
                    }
                }
            },
        );
        if self
            .prompter
            .prompt(msg::CONFIRM_NEW_PASSWORD, request)
            .await
            .is_none()
        {
            return Ok(Outcome::Cancelled);
        }

        self.account.change_password(&new_password).await?;
        self.notifier.alert(msg::PASSWORD_CHANGED, AlertLevel::Success);
        Ok(Outcome::Completed)
    }

    /// Delete the account after re-authentication and an exact-token
    /// confirmation.
    ///
    /// The deletion call runs inside the validator, so a backend failure
    /// re-displays the prompt with the failure's description instead of
    /// aborting the flow.
    pub async fn delete_account(&self) -> Result<Outcome> {
        let unlocked = self
            .confirm_master_password(
                msg::ENTER_PASSWORD_TO_PROCEED,
                "Delete Account",
                "Enter Master Password",
            )
            .await;
        if unlocked.is_none() {
            return Ok(Outcome::Cancelled);
        }

        let account = Arc::clone(&self.account);
        let request = PromptRequest::new(
            "Delete Account",
            msg::TYPE_DELETE,
            InputKind::Destructive,
            move |value: String| {
                let account = Arc::clone(&account);
                async move {
                    if value != msg::DELETE_TOKEN {
                        return Validation::Rejected(msg::TYPE_DELETE.into());
                    }
                    match account.delete().await {
                        Ok(()) => Validation::Accepted(value),
                        Err(err) => {
                            let reason = err.to_string();
                            Validation::Rejected(if reason.is_empty() {
                                msg::GENERIC_FAILURE.into()
                            } else {
                                reason
                            })
                        }
                    }
                }
            },
        )
        .with_confirm_label("Delete")
        .with_placeholder(msg::TYPE_DELETE);
        if self
            .prompter
            .prompt(msg::DELETE_WARNING, request)
            .await
            .is_none()
        {
            return Ok(Outcome::Cancelled);
        }

        self.navigator.go("");
        Ok(Outcome::Completed)
    }

    /// Edit the profile display name.
    ///
    /// An unchanged name is accepted without touching the backend.
    pub async fn edit_profile(&self) -> Result<Outcome> {
        let profile = self.account.profile().await?;
        let current = profile.name.clone();
        let account = Arc::clone(&self.account);
        let request = PromptRequest::new(
            "Edit Profile",
            "Name",
            InputKind::Text,
            move |name: String| {
                let account = Arc::clone(&account);
                let current = current.clone();
                async move {
                    if name.is_empty() {
                        return Validation::Rejected(msg::EMPTY_NAME.into());
                    }
                    if name != current {
                        if let Err(err) = account.rename(&name).await {
                            return Validation::Rejected(err.to_string());
                        }
                    }
                    Validation::Accepted(name)
                }
            },
        )
        .with_confirm_label("Save")
        .with_value(profile.name);

        match self.prompter.prompt("", request).await {
            Some(_) => Ok(Outcome::Completed),
            None => Ok(Outcome::Cancelled),
        }
    }

    /// Log out after confirmation.
    pub async fn logout(&self) -> Result<Outcome> {
        if !self.prompter.confirm(msg::LOGOUT_CONFIRM, "Log Out").await {
            return Ok(Outcome::Cancelled);
        }
        self.account.logout().await?;
        Ok(Outcome::Completed)
    }

    /// Apply a partial settings update, returning the effective settings.
    pub async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings> {
        self.account.set_settings(update).await
    }
}
