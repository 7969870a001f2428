//! Interactive settings menu.
//!
//! The terminal analog of the client's settings screen: profile header on
//! top, then the security, auto-lock and danger-zone actions.

use std::sync::Arc;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use keyward_core::{
    Account, AccountActions, GatedAction, MAX_AUTO_LOCK_DELAY, MIN_AUTO_LOCK_DELAY, Outcome,
    SettingsUpdate,
};

use crate::error::Result;
use crate::store::LocalAccount;
use crate::term::MenuNavigator;

pub struct SettingsMenu {
    account: Arc<LocalAccount>,
    actions: AccountActions,
    navigator: Arc<MenuNavigator>,
    theme: ColorfulTheme,
}

impl SettingsMenu {
    pub fn new(
        account: Arc<LocalAccount>,
        actions: AccountActions,
        navigator: Arc<MenuNavigator>,
    ) -> Self {
        Self {
            account,
            actions,
            navigator,
            theme: ColorfulTheme::default(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        loop {
            let profile = self.account.profile().await?;
            let settings = self.account.settings().await?;

            println!();
            println!("{} <{}>", style(profile.name).bold(), profile.email);

            let items = [
                "Edit Profile".to_string(),
                "Log Out".to_string(),
                "Change Master Password".to_string(),
                format!(
                    "Auto Lock: {}",
                    if settings.auto_lock { "on" } else { "off" }
                ),
                format!("Auto Lock Delay: {} min", settings.auto_lock_delay),
                "Delete Account".to_string(),
                "Quit".to_string(),
            ];
            let Some(choice) = Select::with_theme(&self.theme)
                .with_prompt("Settings")
                .items(&items)
                .default(0)
                .interact_opt()?
            else {
                return Ok(());
            };

            match choice {
                0 => {
                    self.actions.edit_profile().await?;
                }
                1 => {
                    if self.actions.logout().await? == Outcome::Completed {
                        return Ok(());
                    }
                }
                2 => {
                    self.actions.run_gated(GatedAction::ChangePassword).await?;
                }
                3 => {
                    self.actions
                        .update_settings(SettingsUpdate {
                            auto_lock: Some(!settings.auto_lock),
                            ..Default::default()
                        })
                        .await?;
                }
                4 => {
                    let delay: u8 = Input::with_theme(&self.theme)
                        .with_prompt(format!(
                            "Minutes ({MIN_AUTO_LOCK_DELAY}-{MAX_AUTO_LOCK_DELAY})"
                        ))
                        .default(settings.auto_lock_delay)
                        .interact_text()?;
                    self.actions
                        .update_settings(SettingsUpdate {
                            auto_lock_delay: Some(delay),
                            ..Default::default()
                        })
                        .await?;
                }
                5 => {
                    self.actions.run_gated(GatedAction::DeleteAccount).await?;
                }
                _ => return Ok(()),
            }

            // A successful deletion asks to leave the view.
            if self.navigator.take().is_some() {
                return Ok(());
            }
        }
    }
}
