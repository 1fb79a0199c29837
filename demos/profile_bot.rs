//! End-to-end walkthrough: register two root commands, discover them, dump
//! the schemas a transport would receive, and dispatch a few invocation
//! paths.
//!
//! Run with: `cargo run --example profile_bot`

use command_tree_core::{
    CommandGroup, Dispatcher, Invocation, NodeRef, OptionKind, RegistrationError, RegistrationLog,
    RootBuilder, RootCommand, Subcommand, handler_fn,
};
use command_tree_discovery::{RootEntry, RootRegistry};

/// Prints registration diagnostics to stdout, one line per level.
struct StdoutLog;

impl RegistrationLog for StdoutLog {
    fn success(&self, message: &str) {
        println!("[ok]   {message}");
    }

    fn info(&self, message: &str) {
        println!("[info] {message}");
    }

    fn warning(&self, message: &str) {
        println!("[warn] {message}");
    }

    fn error(&self, message: &str) {
        println!("[err]  {message}");
    }
}

fn profile(log: &dyn RegistrationLog) -> Result<RootCommand, RegistrationError> {
    let mut builder = RootBuilder::new("profile", "Manage user profiles", log);

    builder.attach_leaf(Subcommand::new(
        "view",
        "View a profile",
        NodeRef::root("profile"),
        handler_fn(|invocation| {
            println!("viewing profile, payload: {}", invocation.payload);
            Ok(())
        }),
    ))?;

    let mut settings = CommandGroup::new("settings", "Profile settings", NodeRef::root("profile"));
    settings.attach_leaf(
        Subcommand::new(
            "update",
            "Update a profile setting",
            NodeRef::root("profile"),
            handler_fn(|invocation| {
                println!("updating settings, payload: {}", invocation.payload);
                Ok(())
            }),
        ),
        OptionKind::Subcommand,
    )?;
    builder.attach_group(settings)?;

    Ok(builder.build())
}

fn moderation(log: &dyn RegistrationLog) -> Result<RootCommand, RegistrationError> {
    let mut builder = RootBuilder::new("moderation", "Moderation tools", log);
    builder.attach_leaf(Subcommand::new(
        "ban",
        "Ban a user",
        NodeRef::root("moderation"),
        handler_fn(|_| Ok(())),
    ))?;
    Ok(builder.build())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = StdoutLog;
    let registry = RootRegistry::from_entries([
        RootEntry {
            id: "profile",
            namespace: "demo::commands",
            construct: profile,
        },
        RootEntry {
            id: "moderation",
            namespace: "demo::commands::staff",
            construct: moderation,
        },
    ]);

    println!("-- discovery --");
    let tree = registry.discover("demo::commands", true, &log)?;

    println!("\n-- schemas registered with the transport --");
    for schema in tree.schemas() {
        println!("{}", serde_json::to_string_pretty(&schema)?);
    }

    println!("\n-- dispatching --");
    tree.dispatch(
        &Invocation::direct("profile", "view").with_payload(serde_json::json!({"user": "1234"})),
    )?;
    tree.dispatch(
        &Invocation::grouped("profile", "settings", "update")
            .with_payload(serde_json::json!({"visibility": "private"})),
    )?;

    // A grouped leaf is unreachable without its group; this is a normal
    // failure result, not a crash.
    if let Err(error) = tree.dispatch(&Invocation::direct("profile", "update")) {
        println!("dispatch miss: {error}");
    }

    Ok(())
}
