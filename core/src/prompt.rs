//! Modal prompt requests and their validators.
//!
//! A prompt asks the user for a single typed value and gates acceptance
//! behind an async validator. Side-effecting calls placed inside the
//! validator turn their failures into recoverable rejections: the prompt
//! re-displays with the rejection message and the user may retry or dismiss.

use std::future::Future;

use async_trait::async_trait;
use futures::future::BoxFuture;

/// How the prompted value is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Plain visible text.
    Text,
    /// Masked secret input.
    Password,
    /// Free text confirming a destructive action.
    Destructive,
}

/// Outcome of running a validator over one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The value passed validation and may resolve the prompt.
    Accepted(String),
    /// The value was refused; the prompt re-displays with this message.
    Rejected(String),
}

/// Boxed async validator applied to every submission.
pub type Validator = Box<dyn Fn(String) -> BoxFuture<'static, Validation> + Send + Sync>;

/// A single modal request for a typed value.
///
/// Built per step and discarded once the prompt resolves.
pub struct PromptRequest {
    /// Dialog title.
    pub title: String,
    /// Label for the input field.
    pub label: String,
    /// Input treatment.
    pub kind: InputKind,
    /// Placeholder shown in an empty input.
    pub placeholder: Option<String>,
    /// Label for the confirm control.
    pub confirm_label: Option<String>,
    /// Value the input is pre-filled with.
    pub value: Option<String>,
    /// Gatekeeper for submissions.
    pub validate: Validator,
}

impl PromptRequest {
    /// Create a request with the mandatory fields.
    pub fn new<F, Fut>(
        title: impl Into<String>,
        label: impl Into<String>,
        kind: InputKind,
        validate: F,
    ) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Validation> + Send + 'static,
    {
        Self {
            title: title.into(),
            label: label.into(),
            kind,
            placeholder: None,
            confirm_label: None,
            value: None,
            validate: Box::new(move |input| -> BoxFuture<'static, Validation> {
                Box::pin(validate(input))
            }),
        }
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the confirm control label.
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Pre-fill the input with a value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Run the validator over one submission.
    pub async fn submit(&self, input: String) -> Validation {
        (self.validate)(input).await
    }
}

/// Presents prompts and confirm dialogs to the user.
///
/// `prompt` owns the retry loop: a rejected submission re-displays the same
/// request together with the rejection message, and only an accepted value
/// resolves the call. A prompt therefore never resolves with a value its
/// validator refused. Dismissal resolves to `None` and is distinct from
/// rejection.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Present `request` until a submission is accepted or the user
    /// dismisses the prompt.
    async fn prompt(&self, message: &str, request: PromptRequest) -> Option<String>;

    /// Ask a yes/no question.
    async fn confirm(&self, message: &str, title: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_runs_validator() {
        let request = PromptRequest::new("T", "L", InputKind::Text, |input: String| async move {
            if input.is_empty() {
                Validation::Rejected("empty".into())
            } else {
                Validation::Accepted(input)
            }
        });

        assert_eq!(
            request.submit("hello".into()).await,
            Validation::Accepted("hello".into())
        );
        assert_eq!(
            request.submit(String::new()).await,
            Validation::Rejected("empty".into())
        );
    }

    #[test]
    fn test_builder_fields() {
        let request = PromptRequest::new("T", "L", InputKind::Destructive, |input: String| {
            async move { Validation::Accepted(input) }
        })
        .with_placeholder("type it")
        .with_confirm_label("Go")
        .with_value("prefill");

        assert_eq!(request.title, "T");
        assert_eq!(request.kind, InputKind::Destructive);
        assert_eq!(request.placeholder.as_deref(), Some("type it"));
        assert_eq!(request.confirm_label.as_deref(), Some("Go"));
        assert_eq!(request.value.as_deref(), Some("prefill"));
    }
}
