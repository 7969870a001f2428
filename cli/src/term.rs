//! Terminal implementations of the prompt, notification and navigation
//! collaborators.

use std::sync::Mutex;

use async_trait::async_trait;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use keyward_core::{
    AlertLevel, InputKind, Navigator, Notifier, PromptRequest, Prompter, Validation,
};

/// Prompter backed by dialoguer.
///
/// An interrupted or failed read counts as dismissal. An empty submission is
/// a real value and goes through the validator like any other, so empty-input
/// rejections stay reachable.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    fn read(&self, request: &PromptRequest) -> Option<String> {
        // Destructive prompts carry their instruction in the placeholder.
        let label = match (request.kind, &request.placeholder) {
            (InputKind::Destructive, Some(placeholder)) => placeholder.clone(),
            _ => request.label.clone(),
        };
        let result = match request.kind {
            InputKind::Password => Password::with_theme(&self.theme)
                .with_prompt(label)
                .allow_empty_password(true)
                .interact(),
            InputKind::Text | InputKind::Destructive => {
                let mut input = Input::<String>::with_theme(&self.theme)
                    .with_prompt(label)
                    .allow_empty(true);
                if let Some(value) = &request.value {
                    input = input.with_initial_text(value.clone());
                }
                input.interact_text()
            }
        };
        result.ok()
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn prompt(&self, message: &str, request: PromptRequest) -> Option<String> {
        println!();
        println!("{}", style(&request.title).bold());
        if !message.is_empty() {
            println!("{message}");
        }
        loop {
            let input = self.read(&request)?;
            match request.submit(input).await {
                Validation::Accepted(value) => return Some(value),
                Validation::Rejected(reason) => {
                    eprintln!("{}", style(reason).red());
                }
            }
        }
    }

    async fn confirm(&self, message: &str, title: &str) -> bool {
        println!();
        println!("{}", style(title).bold());
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Prints notifications to the terminal.
#[derive(Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str, level: AlertLevel) {
        match level {
            AlertLevel::Success => println!("{} {message}", style("✓").green().bold()),
            AlertLevel::Info => println!("{message}"),
            AlertLevel::Warning => eprintln!("{} {message}", style("!").yellow().bold()),
            AlertLevel::Error => eprintln!("{} {message}", style("✗").red().bold()),
        }
    }
}

/// Records the route the flows asked to navigate to.
///
/// The menu loop checks it after every action and leaves the view once a
/// navigation has been requested.
#[derive(Default)]
pub struct MenuNavigator {
    target: Mutex<Option<String>>,
}

impl MenuNavigator {
    /// Route requested since the last call, if any.
    pub fn take(&self) -> Option<String> {
        self.target.lock().unwrap().take()
    }
}

impl Navigator for MenuNavigator {
    fn go(&self, route: &str) {
        *self.target.lock().unwrap() = Some(route.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigator_take_clears_target() {
        let navigator = MenuNavigator::default();
        assert_eq!(navigator.take(), None);

        navigator.go("");
        assert_eq!(navigator.take(), Some(String::new()));
        assert_eq!(navigator.take(), None);
    }
}
