//! Command node model.
//!
//! This module defines the three node variants of a command tree — a
//! [`RootCommand`] at the top, [`CommandGroup`]s one level below it, and
//! executable [`Subcommand`] leaves — plus the [`CommandTree`] that holds
//! every discovered root. The tree is at most three levels deep: a root owns
//! leaves and groups, a group owns only leaves, and groups never nest.
//!
//! Roots are assembled through [`RootBuilder`](crate::RootBuilder) during the
//! registration phase and frozen when the builder is consumed; after that the
//! children never change, so concurrent readers need no locking.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dispatch::{Invocation, InvocationHandler};
use crate::error::{HandlerError, RegistrationError};

/// Option type tag carried by every schema fragment.
///
/// # Examples
///
/// ```
/// use command_tree_core::OptionKind;
///
/// assert_eq!(OptionKind::Subcommand.code(), 1);
/// assert_eq!(OptionKind::SubcommandGroup.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// An executable leaf command.
    Subcommand,
    /// A named container of leaf commands.
    SubcommandGroup,
}

impl OptionKind {
    /// Numeric code used by the external declarative schema.
    pub fn code(&self) -> u8 {
        match self {
            OptionKind::Subcommand => 1,
            OptionKind::SubcommandGroup => 2,
        }
    }
}

/// Abstract reference to a declared node.
///
/// Leaves and groups carry a `NodeRef` naming their declared parent. Whether
/// the referenced node can own a children mapping is an explicit query
/// ([`children_owner`](NodeRef::children_owner)), so attaching under a parent
/// that cannot own subcommands fails predictably instead of panicking on a
/// bad cast.
///
/// # Examples
///
/// ```
/// use command_tree_core::NodeRef;
///
/// assert_eq!(NodeRef::root("profile").children_owner(), Some("profile"));
/// assert_eq!(NodeRef::subcommand("view").children_owner(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    /// A top-level command.
    Root(String),
    /// A second-level group.
    Group(String),
    /// A leaf command.
    Subcommand(String),
}

impl NodeRef {
    /// Reference to a root command.
    pub fn root(name: impl Into<String>) -> Self {
        NodeRef::Root(name.into())
    }

    /// Reference to a group.
    pub fn group(name: impl Into<String>) -> Self {
        NodeRef::Group(name.into())
    }

    /// Reference to a leaf command.
    pub fn subcommand(name: impl Into<String>) -> Self {
        NodeRef::Subcommand(name.into())
    }

    /// Name of the referenced node.
    pub fn name(&self) -> &str {
        match self {
            NodeRef::Root(name) | NodeRef::Group(name) | NodeRef::Subcommand(name) => name,
        }
    }

    /// Returns the owning root's name when the referenced node can own a
    /// children mapping, `None` otherwise.
    pub fn children_owner(&self) -> Option<&str> {
        match self {
            NodeRef::Root(name) => Some(name),
            NodeRef::Group(_) | NodeRef::Subcommand(_) => None,
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Root(name) => write!(f, "root '{name}'"),
            NodeRef::Group(name) => write!(f, "group '{name}'"),
            NodeRef::Subcommand(name) => write!(f, "subcommand '{name}'"),
        }
    }
}

/// An executable leaf command.
///
/// A leaf owns its identity, the declared parent reference, the optional
/// group relation it is nested under, its schema fragment tag, and the shared
/// invocation handler. The handler is a singleton serving every invocation of
/// this leaf, possibly concurrently.
pub struct Subcommand {
    name: String,
    description: String,
    parent: NodeRef,
    group: Option<String>,
    kind: OptionKind,
    handler: Arc<dyn InvocationHandler>,
}

impl Subcommand {
    /// Declares a leaf command.
    ///
    /// The fragment tag defaults to [`OptionKind::Subcommand`]; the attach
    /// operations fix it when the leaf joins a tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree_core::{NodeRef, Subcommand, handler_fn};
    ///
    /// let view = Subcommand::new(
    ///     "view",
    ///     "View a profile",
    ///     NodeRef::root("profile"),
    ///     handler_fn(|_| Ok(())),
    /// );
    /// assert_eq!(view.name(), "view");
    /// assert!(view.group().is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parent: NodeRef,
        handler: Arc<dyn InvocationHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parent,
            group: None,
            kind: OptionKind::Subcommand,
            handler,
        }
    }

    /// Declares the group this leaf nests under.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree_core::{NodeRef, Subcommand, handler_fn};
    ///
    /// let update = Subcommand::new(
    ///     "update",
    ///     "Update settings",
    ///     NodeRef::root("profile"),
    ///     handler_fn(|_| Ok(())),
    /// )
    /// .in_group("settings");
    /// assert_eq!(update.group(), Some("settings"));
    /// ```
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Leaf name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Leaf description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared parent reference.
    pub fn parent(&self) -> &NodeRef {
        &self.parent
    }

    /// Group relation, when nested under a group.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Schema fragment tag.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: OptionKind) {
        self.kind = kind;
    }

    /// Runs the handler for a resolved invocation.
    pub fn invoke(&self, invocation: &Invocation) -> Result<(), HandlerError> {
        self.handler.handle(invocation)
    }
}

impl fmt::Debug for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subcommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parent", &self.parent)
            .field("group", &self.group)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A named, non-executable container of leaf commands.
///
/// Groups sit directly under a root and own only leaves; they cannot nest.
#[derive(Debug)]
pub struct CommandGroup {
    name: String,
    description: String,
    parent: NodeRef,
    children: Vec<Subcommand>,
}

impl CommandGroup {
    /// Declares an empty group.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parent: NodeRef,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parent,
            children: Vec::new(),
        }
    }

    /// Group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared parent reference.
    pub fn parent(&self) -> &NodeRef {
        &self.parent
    }

    /// Leaf children, in attachment order.
    pub fn children(&self) -> &[Subcommand] {
        &self.children
    }

    /// Finds a leaf child by name.
    pub fn child(&self, name: &str) -> Option<&Subcommand> {
        self.children.iter().find(|leaf| leaf.name() == name)
    }

    /// Inserts a leaf directly into this group's children.
    ///
    /// Unlike [`RootBuilder::attach_leaf`](crate::RootBuilder::attach_leaf),
    /// this bypasses parent capability resolution entirely: the leaf lands in
    /// this group regardless of its declared parent, its fragment is tagged
    /// with the caller-supplied `declared_type`, and its group relation is
    /// rebound to this group.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::DuplicateName`] when a leaf with the same name is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree_core::{CommandGroup, NodeRef, OptionKind, Subcommand, handler_fn};
    ///
    /// let mut settings = CommandGroup::new(
    ///     "settings",
    ///     "Profile settings",
    ///     NodeRef::root("profile"),
    /// );
    /// let update = Subcommand::new(
    ///     "update",
    ///     "Update settings",
    ///     NodeRef::root("profile"),
    ///     handler_fn(|_| Ok(())),
    /// );
    /// settings.attach_leaf(update, OptionKind::Subcommand).unwrap();
    /// assert_eq!(settings.children().len(), 1);
    /// assert_eq!(settings.child("update").unwrap().group(), Some("settings"));
    /// ```
    pub fn attach_leaf(
        &mut self,
        mut leaf: Subcommand,
        declared_type: OptionKind,
    ) -> Result<&mut Self, RegistrationError> {
        if self.child(leaf.name()).is_some() {
            return Err(RegistrationError::DuplicateName {
                parent: self.name.clone(),
                name: leaf.name().to_string(),
            });
        }

        leaf.kind = declared_type;
        leaf.group = Some(self.name.clone());
        self.children.push(leaf);
        Ok(self)
    }
}

/// A direct child of a root: an executable leaf or a group of leaves.
#[derive(Debug)]
pub enum RootNode {
    /// A leaf attached directly under the root.
    Leaf(Subcommand),
    /// A group of leaves.
    Group(CommandGroup),
}

impl RootNode {
    /// Name of the underlying node.
    pub fn name(&self) -> &str {
        match self {
            RootNode::Leaf(leaf) => leaf.name(),
            RootNode::Group(group) => group.name(),
        }
    }
}

/// Immutable snapshot of a fully registered top-level command.
///
/// Produced by consuming a [`RootBuilder`](crate::RootBuilder); from then on
/// the children are frozen. The root owns the full external schema for
/// itself and its descendants, exposed through
/// [`schema`](RootCommand::schema).
#[derive(Debug)]
pub struct RootCommand {
    name: String,
    description: String,
    children: Vec<RootNode>,
}

impl RootCommand {
    pub(crate) fn new(name: String, description: String, children: Vec<RootNode>) -> Self {
        Self {
            name,
            description,
            children,
        }
    }

    /// Root command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root command description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Direct children, in attachment order.
    pub fn children(&self) -> &[RootNode] {
        &self.children
    }

    /// Finds a direct child by name.
    pub fn child(&self, name: &str) -> Option<&RootNode> {
        self.children.iter().find(|child| child.name() == name)
    }
}

/// The frozen set of discovered roots handed to the transport layer.
///
/// A tree is assembled once, at startup, after every root has finished
/// registration; it is never mutated afterwards, so it can be shared freely
/// across threads serving invocation traffic.
#[derive(Debug)]
pub struct CommandTree {
    roots: Vec<RootCommand>,
}

impl CommandTree {
    /// Assembles a tree from finished roots.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::DuplicateName`] when two roots share a name; an
    /// ambiguous tree is never published.
    pub fn new(roots: Vec<RootCommand>) -> Result<Self, RegistrationError> {
        for (index, root) in roots.iter().enumerate() {
            if roots[..index].iter().any(|other| other.name() == root.name()) {
                return Err(RegistrationError::DuplicateName {
                    parent: "command tree".to_string(),
                    name: root.name().to_string(),
                });
            }
        }

        Ok(Self { roots })
    }

    /// Discovered roots, in discovery order.
    pub fn roots(&self) -> &[RootCommand] {
        &self.roots
    }

    /// Finds a root by name.
    pub fn root(&self, name: &str) -> Option<&RootCommand> {
        self.roots.iter().find(|root| root.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::handler_fn;

    use super::*;

    fn leaf(name: &str, parent: NodeRef) -> Subcommand {
        Subcommand::new(name, format!("{name} description"), parent, handler_fn(|_| Ok(())))
    }

    #[test]
    fn test_children_owner_is_root_only() {
        assert_eq!(NodeRef::root("profile").children_owner(), Some("profile"));
        assert_eq!(NodeRef::group("settings").children_owner(), None);
        assert_eq!(NodeRef::subcommand("view").children_owner(), None);
    }

    #[test]
    fn test_group_attach_rebinds_group_relation() {
        let mut settings = CommandGroup::new("settings", "Settings", NodeRef::root("profile"));

        // Declared parent is not even a root; the explicit overload does not care.
        let stray = leaf("update", NodeRef::subcommand("view"));
        settings.attach_leaf(stray, OptionKind::Subcommand).unwrap();

        let attached = settings.child("update").unwrap();
        assert_eq!(attached.group(), Some("settings"));
        assert_eq!(attached.kind(), OptionKind::Subcommand);
    }

    #[test]
    fn test_group_attach_tags_fragment_with_declared_type() {
        let mut settings = CommandGroup::new("settings", "Settings", NodeRef::root("profile"));
        settings
            .attach_leaf(leaf("update", NodeRef::root("profile")), OptionKind::SubcommandGroup)
            .unwrap();

        assert_eq!(
            settings.child("update").unwrap().kind(),
            OptionKind::SubcommandGroup
        );
    }

    #[test]
    fn test_group_attach_rejects_duplicate_names() {
        let mut settings = CommandGroup::new("settings", "Settings", NodeRef::root("profile"));
        settings
            .attach_leaf(leaf("update", NodeRef::root("profile")), OptionKind::Subcommand)
            .unwrap();

        let error = settings
            .attach_leaf(leaf("update", NodeRef::root("profile")), OptionKind::Subcommand)
            .unwrap_err();
        assert_eq!(
            error,
            RegistrationError::DuplicateName {
                parent: "settings".to_string(),
                name: "update".to_string(),
            }
        );
        assert_eq!(settings.children().len(), 1);
    }

    #[test]
    fn test_tree_rejects_duplicate_root_names() {
        let roots = vec![
            RootCommand::new("profile".into(), "first".into(), Vec::new()),
            RootCommand::new("profile".into(), "second".into(), Vec::new()),
        ];

        let error = CommandTree::new(roots).unwrap_err();
        assert!(matches!(error, RegistrationError::DuplicateName { .. }));
    }

    #[test]
    fn test_tree_lookup_by_root_name() {
        let roots = vec![RootCommand::new("profile".into(), "Profiles".into(), Vec::new())];
        let tree = CommandTree::new(roots).unwrap();

        assert!(tree.root("profile").is_some());
        assert!(tree.root("admin").is_none());
    }
}
