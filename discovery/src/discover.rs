//! Startup-time discovery of root commands.

use command_tree_core::{CommandTree, RegistrationError, RegistrationLog, RootCommand};
use tracing::debug;

use crate::registry::RootRegistry;

/// Errors raised while discovering and constructing root commands.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// A selected root type's constructor failed; the whole run is
    /// abandoned and no partial tree is published.
    #[error("constructing root '{id}' failed: {source}")]
    Construction {
        /// Stable identifier of the failing entry.
        id: String,
        /// The constructor's registration failure.
        #[source]
        source: RegistrationError,
    },

    /// The constructed roots could not be assembled into a tree.
    #[error("tree assembly failed: {0}")]
    Registration(#[from] RegistrationError),
}

impl RootRegistry {
    /// Discovers root commands whose namespace matches the prefix and
    /// constructs exactly one instance per distinct entry id.
    ///
    /// With `include_sub_namespaces` set, an entry matches when its
    /// namespace starts with `namespace_prefix`; otherwise the namespace
    /// must match exactly. Entries are visited in registration order, and
    /// each constructor performs its own attach calls against `log` before
    /// returning. A repeated id is constructed once; later duplicates are
    /// reported through the log's warning level and skipped.
    ///
    /// # Errors
    ///
    /// [`DiscoveryError::Construction`] on the first constructor failure,
    /// [`DiscoveryError::Registration`] when the finished roots collide on a
    /// name. Either way the run is abandoned whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree_core::{
    ///     NodeRef, NullLog, RegistrationError, RegistrationLog, RootBuilder, RootCommand,
    ///     Subcommand, handler_fn,
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
    /// let registry = RootRegistry::from_entries([RootEntry {
    ///     id: "profile",
    ///     namespace: "bot::commands",
    ///     construct: profile,
    /// }]);
    ///
    /// let tree = registry.discover("bot::commands", false, &NullLog).unwrap();
    /// assert_eq!(tree.roots().len(), 1);
    /// assert_eq!(tree.roots()[0].name(), "profile");
    /// ```
    pub fn discover(
        &self,
        namespace_prefix: &str,
        include_sub_namespaces: bool,
        log: &dyn RegistrationLog,
    ) -> Result<CommandTree, DiscoveryError> {
        let mut constructed_ids: Vec<&str> = Vec::new();
        let mut roots: Vec<RootCommand> = Vec::new();

        for entry in self.entries() {
            if !namespace_matches(entry.namespace, namespace_prefix, include_sub_namespaces) {
                continue;
            }
            if constructed_ids.contains(&entry.id) {
                log.warning(&format!(
                    "skipping duplicate root registration '{}'",
                    entry.id
                ));
                continue;
            }

            debug!(
                target: "command_tree",
                id = entry.id,
                namespace = entry.namespace,
                "constructing root"
            );
            let root = (entry.construct)(log).map_err(|source| DiscoveryError::Construction {
                id: entry.id.to_string(),
                source,
            })?;

            constructed_ids.push(entry.id);
            roots.push(root);
        }

        debug!(target: "command_tree", count = roots.len(), "discovery complete");
        Ok(CommandTree::new(roots)?)
    }
}

fn namespace_matches(namespace: &str, prefix: &str, include_sub_namespaces: bool) -> bool {
    if include_sub_namespaces {
        namespace.starts_with(prefix)
    } else {
        namespace == prefix
    }
}
