//! Command tree model, registration API, and dispatch contract for remotely
//! invokable commands.
//!
//! This crate defines the foundational types for exposing a bounded set of
//! operations to an external interaction dispatcher:
//!
//! - [`RootCommand`], [`CommandGroup`], [`Subcommand`] — the three node
//!   variants of a command tree, at most three levels deep (root → leaf, or
//!   root → group → leaf).
//! - [`RootBuilder`] — the registration API: attach leaves and groups with
//!   validated hierarchy invariants, then consume the builder into an
//!   immutable snapshot.
//! - [`CommandSchema`] / [`build_schema`] — pure translation of a finished
//!   root into the nested options document registered with the transport
//!   layer.
//! - [`CommandTree`] and the [`Dispatcher`] contract — resolve an incoming
//!   invocation path back to exactly one executable handler.
//! - [`RegistrationLog`] — the injected sink for attachment diagnostics;
//!   [`TracingLog`] forwards to the `tracing` facade.
//!
//! Tree construction is single-threaded and happens once at startup; the
//! built tree is immutable and freely shared across threads serving
//! invocation traffic.
//!
//! # Example
//!
//! ```
//! use command_tree_core::{
//!     CommandGroup, CommandTree, Dispatcher, Invocation, NodeRef, NullLog, OptionKind,
//!     RootBuilder, Subcommand, handler_fn,
//! };
//!
//! let log = NullLog;
//! let mut builder = RootBuilder::new("profile", "Manage user profiles", &log);
//! builder
//!     .attach_leaf(Subcommand::new(
//!         "view",
//!         "View a profile",
//!         NodeRef::root("profile"),
//!         handler_fn(|_| Ok(())),
//!     ))
//!     .unwrap();
//!
//! let mut settings = CommandGroup::new("settings", "Profile settings", NodeRef::root("profile"));
//! settings
//!     .attach_leaf(
//!         Subcommand::new(
//!             "update",
//!             "Update settings",
//!             NodeRef::root("profile"),
//!             handler_fn(|_| Ok(())),
//!         ),
//!         OptionKind::Subcommand,
//!     )
//!     .unwrap();
//! builder.attach_group(settings).unwrap();
//!
//! let tree = CommandTree::new(vec![builder.build()]).unwrap();
//! assert_eq!(tree.schemas()[0].options.len(), 2);
//! assert!(tree.dispatch(&Invocation::grouped("profile", "settings", "update")).is_ok());
//! ```

mod builder;
mod dispatch;
mod error;
mod log;
mod schema;
mod tree;

pub use builder::RootBuilder;
pub use dispatch::{Dispatcher, Invocation, InvocationHandler, handler_fn};
pub use error::{DispatchError, HandlerError, RegistrationError};
pub use log::{NullLog, RegistrationLog, TracingLog};
pub use schema::{CommandSchema, OptionSchema, build_schema};
pub use tree::{CommandGroup, CommandTree, NodeRef, OptionKind, RootCommand, RootNode, Subcommand};
