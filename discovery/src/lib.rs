//! Startup-time discovery of root command types.
//!
//! This crate populates a [`CommandTree`](command_tree_core::CommandTree)
//! from the set of root command types known to the process. The set is an
//! explicit [`RootRegistry`] — a registration list of constructors keyed by
//! stable identifiers and module paths — and
//! [`discover`](RootRegistry::discover) filters it by namespace prefix,
//! constructs exactly one instance per distinct root type, and hands back
//! the frozen tree.
//!
//! Discovery runs once, synchronously, at process startup; any constructor
//! failure abandons the whole run so an inconsistent tree is never exposed
//! to the transport layer.
//!
//! # Example
//!
//! ```
//! use command_tree_core::{
//!     Dispatcher, Invocation, NodeRef, NullLog, RegistrationError, RegistrationLog,
//!     RootBuilder, RootCommand, Subcommand, handler_fn,
//! };
//! use command_tree_discovery::{RootEntry, RootRegistry};
//!
//! fn profile(log: &dyn RegistrationLog) -> Result<RootCommand, RegistrationError> {
//!     let mut builder = RootBuilder::new("profile", "Manage user profiles", log);
//!     builder.attach_leaf(Subcommand::new(
//!         "view",
//!         "View a profile",
//!         NodeRef::root("profile"),
//!         handler_fn(|_| Ok(())),
//!     ))?;
//!     Ok(builder.build())
//! }
//!
//! let registry = RootRegistry::from_entries([RootEntry {
//!     id: "profile",
//!     namespace: "bot::commands",
//!     construct: profile,
//! }]);
//!
//! let tree = registry.discover("bot::commands", false, &NullLog).unwrap();
//! assert!(tree.dispatch(&Invocation::direct("profile", "view")).is_ok());
//! ```

mod discover;
mod registry;

pub use discover::DiscoveryError;
pub use registry::{RootConstructor, RootEntry, RootRegistry};
