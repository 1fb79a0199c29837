//! Invocation events and the dispatcher contract.
//!
//! The transport layer turns each incoming interaction into an
//! [`Invocation`] naming a path through the tree — root, optional group,
//! leaf — plus an opaque payload. A [`Dispatcher`] resolves that path against
//! the frozen [`CommandTree`] and runs the target leaf's handler. Resolution
//! misses are normal failure results ([`DispatchError::UnknownCommand`]),
//! never a crash.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DispatchError, HandlerError};
use crate::tree::{CommandTree, RootNode, Subcommand};

/// An invocation event received from the transport layer.
///
/// # Examples
///
/// ```
/// use command_tree_core::Invocation;
///
/// let event = Invocation::grouped("profile", "settings", "update");
/// assert_eq!(event.path(), "profile settings update");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    /// Root command name.
    pub root: String,
    /// Group name, when the target leaf is nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Leaf command name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf: Option<String>,
    /// Opaque payload carried to the handler; option value semantics belong
    /// to the transport layer.
    #[serde(default)]
    pub payload: Value,
}

impl Invocation {
    /// Invocation of a leaf attached directly under a root.
    pub fn direct(root: impl Into<String>, leaf: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            group: None,
            leaf: Some(leaf.into()),
            payload: Value::Null,
        }
    }

    /// Invocation of a leaf nested under a group.
    pub fn grouped(
        root: impl Into<String>,
        group: impl Into<String>,
        leaf: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            group: Some(group.into()),
            leaf: Some(leaf.into()),
            payload: Value::Null,
        }
    }

    /// Attaches a payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// The invocation path as a space-separated string, for diagnostics.
    pub fn path(&self) -> String {
        let mut path = self.root.clone();
        if let Some(group) = &self.group {
            path.push(' ');
            path.push_str(group);
        }
        if let Some(leaf) = &self.leaf {
            path.push(' ');
            path.push_str(leaf);
        }
        path
    }
}

/// Executable behavior carried by a leaf command.
///
/// One handler instance serves every invocation of its leaf, possibly
/// concurrently for simultaneous external events; implementations must be
/// stateless or internally synchronized.
pub trait InvocationHandler: Send + Sync {
    /// Handles one invocation event.
    fn handle(&self, invocation: &Invocation) -> Result<(), HandlerError>;
}

impl<F> InvocationHandler for F
where
    F: Fn(&Invocation) -> Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, invocation: &Invocation) -> Result<(), HandlerError> {
        self(invocation)
    }
}

/// Wraps a plain function as a shared handler.
///
/// # Examples
///
/// ```
/// use command_tree_core::handler_fn;
///
/// let handler = handler_fn(|invocation| {
///     let _ = invocation.path();
///     Ok(())
/// });
/// ```
pub fn handler_fn<F>(handler: F) -> Arc<dyn InvocationHandler>
where
    F: Fn(&Invocation) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    Arc::new(handler)
}

/// Consumer-facing contract for routing invocation events.
pub trait Dispatcher {
    /// Resolves the invocation path and runs the target handler.
    fn dispatch(&self, invocation: &Invocation) -> Result<(), DispatchError>;
}

fn unknown(invocation: &Invocation) -> DispatchError {
    DispatchError::UnknownCommand(invocation.path())
}

impl CommandTree {
    /// Resolves an invocation path to its leaf command.
    ///
    /// The root name is looked up among the discovered roots; with a group
    /// name present, the named child must be a group and the leaf is looked
    /// up inside it, otherwise the leaf is looked up directly under the root.
    /// Every miss, including a path that never names a leaf, fails with
    /// [`DispatchError::UnknownCommand`].
    pub fn resolve(&self, invocation: &Invocation) -> Result<&Subcommand, DispatchError> {
        let root = self
            .root(&invocation.root)
            .ok_or_else(|| unknown(invocation))?;
        let leaf_name = invocation
            .leaf
            .as_deref()
            .ok_or_else(|| unknown(invocation))?;

        match invocation.group.as_deref() {
            Some(group_name) => {
                let Some(RootNode::Group(group)) = root.child(group_name) else {
                    return Err(unknown(invocation));
                };
                group.child(leaf_name).ok_or_else(|| unknown(invocation))
            }
            None => {
                let Some(RootNode::Leaf(leaf)) = root.child(leaf_name) else {
                    return Err(unknown(invocation));
                };
                Ok(leaf)
            }
        }
    }
}

impl Dispatcher for CommandTree {
    fn dispatch(&self, invocation: &Invocation) -> Result<(), DispatchError> {
        let leaf = self.resolve(invocation)?;
        leaf.invoke(invocation)?;
        Ok(())
    }
}
