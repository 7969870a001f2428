//! Keyward terminal client.

mod config;
mod error;
mod menu;
mod store;
mod term;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};
use keyward_core::{Account, AccountActions, GatedAction, Outcome, msg};

use crate::config::Config;
use crate::menu::SettingsMenu;
use crate::store::LocalAccount;
use crate::term::{MenuNavigator, TerminalNotifier, TerminalPrompter};

#[derive(Parser)]
#[command(
    name = "keyward",
    version,
    about = "Terminal client for Keyward account management"
)]
struct Cli {
    /// Path to a configuration file.
    #[arg(long, env = "KEYWARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new local account profile.
    Init,
    /// Open the interactive settings menu.
    Settings,
    /// Change the master password.
    ChangePassword,
    /// Delete the account permanently.
    DeleteAccount,
    /// Log out of the current session.
    Logout,
    /// Show the account profile.
    Profile,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let data_dir = config.data_dir();
    log::debug!("using data dir {}", data_dir.display());

    if let Command::Init = cli.command {
        return init(&data_dir);
    }

    let account = Arc::new(LocalAccount::open(&data_dir)?);
    let prompter = Arc::new(TerminalPrompter::default());
    let notifier = Arc::new(TerminalNotifier);
    let navigator = Arc::new(MenuNavigator::default());
    let actions = AccountActions::new(account.clone(), prompter, notifier, navigator.clone());

    match cli.command {
        Command::Init => unreachable!("handled above"),
        Command::Settings => SettingsMenu::new(account, actions, navigator).run().await?,
        Command::ChangePassword => {
            report(actions.run_gated(GatedAction::ChangePassword).await?);
        }
        Command::DeleteAccount => {
            report(actions.run_gated(GatedAction::DeleteAccount).await?);
        }
        Command::Logout => report(actions.logout().await?),
        Command::Profile => {
            let profile = account.profile().await?;
            println!("{} <{}>", profile.name, profile.email);
        }
    }

    Ok(())
}

fn report(outcome: Outcome) {
    if outcome == Outcome::Cancelled {
        println!("Cancelled.");
    }
}

fn init(data_dir: &Path) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt("Name")
        .interact_text()?;
    let email: String = Input::with_theme(&theme)
        .with_prompt("Email")
        .interact_text()?;
    let password = Password::with_theme(&theme)
        .with_prompt("Master Password")
        .with_confirmation("Repeat Master Password", msg::WRONG_PASSWORD)
        .interact()?;

    LocalAccount::create(data_dir, &name, &email, &password)?;
    println!(
        "Account profile created at {}",
        data_dir.join(LocalAccount::PROFILE_FILE).display()
    );
    Ok(())
}
