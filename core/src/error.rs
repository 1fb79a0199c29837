//! Error types for tree registration and dispatch.
//!
//! Registration-time errors ([`RegistrationError`]) are startup-fatal: an
//! inconsistent tree must never be handed to the transport layer. Dispatch
//! errors ([`DispatchError`]) are recoverable and returned to the dispatch
//! caller as a normal failure result.

use thiserror::Error;

/// Errors raised while a command tree is being registered.
///
/// # Examples
///
/// ```
/// use command_tree_core::RegistrationError;
///
/// let error = RegistrationError::DuplicateName {
///     parent: "profile".into(),
///     name: "view".into(),
/// };
/// assert_eq!(error.to_string(), "duplicate name under 'profile': view");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Two siblings under the same parent share a name.
    #[error("duplicate name under '{parent}': {name}")]
    DuplicateName {
        /// Name of the parent whose children collided.
        parent: String,
        /// The colliding child name.
        name: String,
    },

    /// An attachment targeted a parent that cannot own the child, or was
    /// attempted out of registration order.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Failure reported by an invocation handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("handler failed: {0}")]
pub struct HandlerError(pub String);

/// Errors raised while resolving or dispatching an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The invocation path does not resolve to a leaf command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The resolved handler reported a failure.
    #[error(transparent)]
    Handler(#[from] HandlerError),
}
