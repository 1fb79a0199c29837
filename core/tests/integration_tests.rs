use std::sync::{Arc, Mutex};

use command_tree_core::{
    CommandGroup, CommandTree, DispatchError, Dispatcher, Invocation, NodeRef, OptionKind,
    RegistrationError, RegistrationLog, RootBuilder, RootCommand, Subcommand, handler_fn,
};

/// Log sink that records every line for assertions.
#[derive(Default)]
struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl RegistrationLog for RecordingLog {
    fn success(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Builds the profile root: a direct `view` leaf plus a `settings` group
/// holding an `update` leaf. Handlers append to `calls`.
fn profile_root(
    log: &dyn RegistrationLog,
    calls: &Arc<Mutex<Vec<String>>>,
) -> Result<RootCommand, RegistrationError> {
    let mut builder = RootBuilder::new("profile", "Manage user profiles", log);

    let view_calls = Arc::clone(calls);
    builder.attach_leaf(Subcommand::new(
        "view",
        "View a profile",
        NodeRef::root("profile"),
        handler_fn(move |invocation| {
            view_calls.lock().unwrap().push(invocation.path());
            Ok(())
        }),
    ))?;

    let mut settings = CommandGroup::new("settings", "Profile settings", NodeRef::root("profile"));
    let update_calls = Arc::clone(calls);
    settings.attach_leaf(
        Subcommand::new(
            "update",
            "Update settings",
            NodeRef::root("profile"),
            handler_fn(move |invocation| {
                update_calls.lock().unwrap().push(invocation.path());
                Ok(())
            }),
        ),
        OptionKind::Subcommand,
    )?;
    builder.attach_group(settings)?;

    Ok(builder.build())
}

#[test]
fn test_dispatch_routes_each_path_to_its_handler() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = RecordingLog::default();
    let tree = CommandTree::new(vec![profile_root(&log, &calls).unwrap()]).unwrap();

    tree.dispatch(&Invocation::direct("profile", "view")).unwrap();
    tree.dispatch(&Invocation::grouped("profile", "settings", "update"))
        .unwrap();

    // A grouped leaf is not reachable without naming its group.
    let error = tree
        .dispatch(&Invocation::direct("profile", "update"))
        .unwrap_err();
    assert_eq!(
        error,
        DispatchError::UnknownCommand("profile update".to_string())
    );

    assert_eq!(
        calls.lock().unwrap().clone(),
        vec!["profile view".to_string(), "profile settings update".to_string()]
    );
}

#[test]
fn test_registration_emits_one_line_per_attachment() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = RecordingLog::default();
    profile_root(&log, &calls).unwrap();

    assert_eq!(
        log.lines(),
        vec![
            "profile - added subcommand 'view'".to_string(),
            "profile - added group 'settings'".to_string(),
            "profile - settings - added subcommand 'update'".to_string(),
        ]
    );
}

#[test]
fn test_schema_covers_every_attached_child_once() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = RecordingLog::default();
    let tree = CommandTree::new(vec![profile_root(&log, &calls).unwrap()]).unwrap();

    let schemas = tree.schemas();
    assert_eq!(schemas.len(), 1);

    let schema = &schemas[0];
    assert_eq!(schema.name, "profile");
    let names: Vec<&str> = schema.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["view", "settings"]);
    assert_eq!(schema.options[1].options[0].name, "update");

    // The schema is a pure function of the frozen tree.
    assert_eq!(tree.schemas(), schemas);
}

#[test]
fn test_tree_is_shared_across_threads() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = RecordingLog::default();
    let tree = Arc::new(CommandTree::new(vec![profile_root(&log, &calls).unwrap()]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = Arc::clone(&tree);
            std::thread::spawn(move || {
                tree.dispatch(&Invocation::grouped("profile", "settings", "update"))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(calls.lock().unwrap().len(), 4);
}
