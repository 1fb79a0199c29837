//! Explicit registration list of root command types.
//!
//! Runtime type scanning is replaced by a [`RootRegistry`]: the process
//! declares its root command types up front, each as a [`RootEntry`] with a
//! stable identifier, the module path used for namespace filtering, and a
//! constructor. Iteration order is registration order, so discovery output
//! is stable within a process run.

use command_tree_core::{RegistrationError, RegistrationLog, RootCommand};

/// Constructor signature for a root command type.
///
/// Performs the type's own attach calls against the injected log before
/// returning the finished snapshot.
pub type RootConstructor = fn(&dyn RegistrationLog) -> Result<RootCommand, RegistrationError>;

/// One registered root command type.
#[derive(Debug, Clone, Copy)]
pub struct RootEntry {
    /// Stable identifier for the implementing type.
    pub id: &'static str,
    /// Module path used for namespace filtering.
    pub namespace: &'static str,
    /// Zero-argument initializer, aside from the injected log.
    pub construct: RootConstructor,
}

/// The fixed set of root command types known to the process.
///
/// # Examples
///
/// ```
/// use command_tree_core::{
///     NodeRef, RegistrationError, RegistrationLog, RootBuilder, RootCommand, Subcommand,
///     handler_fn,
/// };
/// use command_tree_discovery::{RootEntry, RootRegistry};
///
/// fn profile(log: &dyn RegistrationLog) -> Result<RootCommand, RegistrationError> {
///     let mut builder = RootBuilder::new("profile", "Manage user profiles", log);
///     builder.attach_leaf(Subcommand::new(
///         "view",
///         "View a profile",
///         NodeRef::root("profile"),
///         handler_fn(|_| Ok(())),
///     ))?;
///     Ok(builder.build())
/// }
///
/// let mut registry = RootRegistry::new();
/// registry.register(RootEntry {
///     id: "profile",
///     namespace: "bot::commands",
///     construct: profile,
/// });
/// assert_eq!(registry.entries().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RootRegistry {
    entries: Vec<RootEntry>,
}

impl RootRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a registry from a fixed entry list.
    pub fn from_entries(entries: impl IntoIterator<Item = RootEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Registers a root command type.
    pub fn register(&mut self, entry: RootEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Registered entries, in registration order.
    pub fn entries(&self) -> &[RootEntry] {
        &self.entries
    }
}
