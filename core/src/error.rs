use thiserror::Error;

/// Errors surfaced by [`Account`](crate::Account) implementations and the
/// flows built on top of them.
///
/// `Display` is the human-readable description of the failure; the deletion
/// gate shows it verbatim when the backend refuses to delete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The supplied master password did not unlock the account.
    #[error("wrong password")]
    WrongPassword,
    /// The operation requires an unlocked session.
    #[error("not logged in")]
    NotLoggedIn,
    /// The account store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
    /// The backend refused the operation with the given description.
    #[error("{0}")]
    Failed(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AccountError>;
