//! Account flows for Keyward clients.
//!
//! This crate holds the client-side interaction logic that sits between a
//! user interface and an account backend: modal prompt requests with async
//! validators, and the credential-gated flows (change master password,
//! delete account) built on top of them. It performs no I/O of its own;
//! every collaborator is injected.
//!
//! ## Quick start
//!
//! ```ignore
//! let actions = AccountActions::new(account, prompter, notifier, navigator);
//!
//! match actions.run_gated(GatedAction::ChangePassword).await? {
//!     Outcome::Completed => {}
//!     Outcome::Cancelled => {}
//! }
//! ```
//!
//! A flow suspends at each prompt until the user submits or dismisses.
//! Dismissal at any step ends the flow in [`Outcome::Cancelled`] without
//! invoking any account mutation that has not yet been reached.

mod account;
mod actions;
mod error;
mod notify;
mod prompt;
mod settings;

pub use account::{Account, Profile};
pub use actions::{AccountActions, GatedAction, Outcome, msg};
pub use error::{AccountError, Result};
pub use notify::{AlertLevel, Navigator, Notifier};
pub use prompt::{InputKind, PromptRequest, Prompter, Validation, Validator};
pub use settings::{MAX_AUTO_LOCK_DELAY, MIN_AUTO_LOCK_DELAY, Settings, SettingsUpdate};
