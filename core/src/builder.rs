//! Registration API for assembling a root command's tree.
//!
//! A [`RootBuilder`] is the mutable, registration-phase view of a root. The
//! attach operations validate the hierarchy invariants, report each
//! attachment through the injected [`RegistrationLog`], and fail fast with
//! typed errors; [`build`](RootBuilder::build) consumes the builder into an
//! immutable [`RootCommand`] snapshot. All registration happens
//! single-threaded at process startup, before any invocation traffic.

use crate::error::RegistrationError;
use crate::log::RegistrationLog;
use crate::tree::{CommandGroup, OptionKind, RootCommand, RootNode, Subcommand};

/// Mutable builder for a top-level command.
///
/// # Examples
///
/// ```
/// use command_tree_core::{NodeRef, NullLog, RootBuilder, Subcommand, handler_fn};
///
/// let log = NullLog;
/// let mut builder = RootBuilder::new("profile", "Manage user profiles", &log);
/// builder
///     .attach_leaf(Subcommand::new(
///         "view",
///         "View a profile",
///         NodeRef::root("profile"),
///         handler_fn(|_| Ok(())),
///     ))
///     .unwrap();
///
/// let root = builder.build();
/// assert_eq!(root.children().len(), 1);
/// ```
pub struct RootBuilder<'log> {
    name: String,
    description: String,
    children: Vec<RootNode>,
    log: &'log dyn RegistrationLog,
}

impl std::fmt::Debug for RootBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootBuilder")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

impl<'log> RootBuilder<'log> {
    /// Starts registration for a root with the given identity.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        log: &'log dyn RegistrationLog,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            children: Vec::new(),
            log,
        }
    }

    /// Root name under registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches a leaf under this root, or under one of its groups when the
    /// leaf declares a group relation.
    ///
    /// The leaf's declared parent must be a reference that can own
    /// subcommands — a root reference naming this builder. The fragment is
    /// forced to [`OptionKind::Subcommand`], and one diagnostic line naming
    /// root, leaf, and group (when present) is emitted on success.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::InvalidOperation`] when the declared parent
    ///   cannot own subcommands, names a different root, or names a group
    ///   that has not been attached yet.
    /// - [`RegistrationError::DuplicateName`] when the target's children
    ///   already contain the leaf's name; the tree is left unchanged.
    pub fn attach_leaf(
        &mut self,
        mut leaf: Subcommand,
    ) -> Result<&mut Self, RegistrationError> {
        let owner = leaf.parent().children_owner().ok_or_else(|| {
            RegistrationError::InvalidOperation(format!(
                "parent cannot own subcommands: leaf '{}' declares parent {}",
                leaf.name(),
                leaf.parent(),
            ))
        })?;
        if owner != self.name {
            return Err(RegistrationError::InvalidOperation(format!(
                "leaf '{}' declares parent root '{owner}' but is attached to '{}'",
                leaf.name(),
                self.name,
            )));
        }

        leaf.set_kind(OptionKind::Subcommand);

        match leaf.group().map(str::to_string) {
            Some(group_name) => {
                let log = self.log;
                let root_name = self.name.clone();
                let leaf_name = leaf.name().to_string();

                let Some(group) = self.group_mut(&group_name) else {
                    return Err(RegistrationError::InvalidOperation(format!(
                        "group '{group_name}' is not attached to root '{root_name}'"
                    )));
                };
                group.attach_leaf(leaf, OptionKind::Subcommand)?;

                log.success(&format!(
                    "{root_name} - added subcommand '{leaf_name}' (group: {group_name})"
                ));
            }
            None => {
                if self.children.iter().any(|child| child.name() == leaf.name()) {
                    return Err(RegistrationError::DuplicateName {
                        parent: self.name.clone(),
                        name: leaf.name().to_string(),
                    });
                }

                self.log.success(&format!(
                    "{} - added subcommand '{}'",
                    self.name,
                    leaf.name()
                ));
                self.children.push(RootNode::Leaf(leaf));
            }
        }

        Ok(self)
    }

    /// Attaches a group, with whatever leaves it already contains, under
    /// this root.
    ///
    /// Emits one diagnostic line announcing the group, then one per leaf
    /// registered inside it at attach time.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::InvalidOperation`] when the group's declared
    ///   parent cannot own subcommands or names a different root.
    /// - [`RegistrationError::DuplicateName`] when a direct child with the
    ///   group's name already exists; the tree is left unchanged.
    pub fn attach_group(
        &mut self,
        group: CommandGroup,
    ) -> Result<&mut Self, RegistrationError> {
        let owner = group.parent().children_owner().ok_or_else(|| {
            RegistrationError::InvalidOperation(format!(
                "parent cannot own subcommands: group '{}' declares parent {}",
                group.name(),
                group.parent(),
            ))
        })?;
        if owner != self.name {
            return Err(RegistrationError::InvalidOperation(format!(
                "group '{}' declares parent root '{owner}' but is attached to '{}'",
                group.name(),
                self.name,
            )));
        }

        if self.children.iter().any(|child| child.name() == group.name()) {
            return Err(RegistrationError::DuplicateName {
                parent: self.name.clone(),
                name: group.name().to_string(),
            });
        }

        self.log
            .success(&format!("{} - added group '{}'", self.name, group.name()));
        for child in group.children() {
            self.log.success(&format!(
                "{} - {} - added subcommand '{}'",
                self.name,
                group.name(),
                child.name()
            ));
        }

        self.children.push(RootNode::Group(group));
        Ok(self)
    }

    /// Finishes registration and returns the immutable snapshot.
    pub fn build(self) -> RootCommand {
        RootCommand::new(self.name, self.description, self.children)
    }

    fn group_mut(&mut self, name: &str) -> Option<&mut CommandGroup> {
        self.children.iter_mut().find_map(|child| match child {
            RootNode::Group(group) if group.name() == name => Some(group),
            _ => None,
        })
    }
}
