//! External declarative schema building.
//!
//! [`build_schema`] is a pure translation from a finished [`RootCommand`] to
//! the nested options document the transport layer registers at startup. It
//! walks direct children in attachment order and nests one further level for
//! groups; the data model already guarantees nothing sits deeper than that.
//! The function has no side effects and no logging, so repeated calls yield
//! structurally equal output.

use serde::{Deserialize, Serialize};

use crate::tree::{CommandGroup, CommandTree, OptionKind, RootCommand, RootNode, Subcommand};

/// Full external schema owned by a root command.
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
/// let schema = builder.build().schema();
/// assert_eq!(schema.name, "profile");
/// assert_eq!(schema.options[0].name, "view");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSchema {
    /// Root command name.
    pub name: String,
    /// Root command description.
    pub description: String,
    /// One option per direct child, in attachment order.
    pub options: Vec<OptionSchema>,
}

/// Schema fragment contributed by a single non-root node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Node name.
    pub name: String,
    /// Node description.
    pub description: String,
    /// Option type tag.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Nested options; populated only for group fragments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSchema>,
}

impl Subcommand {
    /// Schema fragment for this leaf.
    pub fn fragment(&self) -> OptionSchema {
        OptionSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            kind: self.kind(),
            options: Vec::new(),
        }
    }
}

impl CommandGroup {
    /// Schema fragment for this group, with one nested fragment per leaf.
    pub fn fragment(&self) -> OptionSchema {
        OptionSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            kind: OptionKind::SubcommandGroup,
            options: self.children().iter().map(Subcommand::fragment).collect(),
        }
    }
}

/// Builds the external schema for a finished root.
pub fn build_schema(root: &RootCommand) -> CommandSchema {
    let options = root
        .children()
        .iter()
        .map(|child| match child {
            RootNode::Leaf(leaf) => leaf.fragment(),
            RootNode::Group(group) => group.fragment(),
        })
        .collect();

    CommandSchema {
        name: root.name().to_string(),
        description: root.description().to_string(),
        options,
    }
}

impl RootCommand {
    /// The full external schema describing this root and its descendants.
    pub fn schema(&self) -> CommandSchema {
        build_schema(self)
    }
}

impl CommandTree {
    /// Schemas for every root, in discovery order.
    ///
    /// This is what gets registered with the transport layer, once, after
    /// discovery completes.
    pub fn schemas(&self) -> Vec<CommandSchema> {
        self.roots().iter().map(RootCommand::schema).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::handler_fn;
    use crate::log::NullLog;
    use crate::tree::NodeRef;
    use crate::RootBuilder;

    use super::*;

    fn leaf(name: &str) -> Subcommand {
        Subcommand::new(name, format!("{name} description"), NodeRef::root("profile"), handler_fn(|_| Ok(())))
    }

    fn sample_root() -> RootCommand {
        let log = NullLog;
        let mut builder = RootBuilder::new("profile", "Manage user profiles", &log);
        builder.attach_leaf(leaf("view")).unwrap();

        let mut settings = CommandGroup::new("settings", "Profile settings", NodeRef::root("profile"));
        settings
            .attach_leaf(leaf("update"), OptionKind::Subcommand)
            .unwrap();
        builder.attach_group(settings).unwrap();
        builder.attach_leaf(leaf("delete")).unwrap();

        builder.build()
    }

    #[test]
    fn test_schema_lists_children_in_attachment_order() {
        let schema = build_schema(&sample_root());

        let names: Vec<&str> = schema.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["view", "settings", "delete"]);

        assert_eq!(schema.options[0].kind, OptionKind::Subcommand);
        assert_eq!(schema.options[1].kind, OptionKind::SubcommandGroup);
        assert_eq!(schema.options[1].options.len(), 1);
        assert_eq!(schema.options[1].options[0].name, "update");
        assert_eq!(schema.options[1].options[0].kind, OptionKind::Subcommand);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let root = sample_root();
        assert_eq!(build_schema(&root), build_schema(&root));
    }

    #[test]
    fn test_schema_serializes_to_nested_options_document() {
        let schema = build_schema(&sample_root());
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "profile",
                "description": "Manage user profiles",
                "options": [
                    {
                        "name": "view",
                        "description": "view description",
                        "type": "subcommand",
                    },
                    {
                        "name": "settings",
                        "description": "Profile settings",
                        "type": "subcommand_group",
                        "options": [
                            {
                                "name": "update",
                                "description": "update description",
                                "type": "subcommand",
                            },
                        ],
                    },
                    {
                        "name": "delete",
                        "description": "delete description",
                        "type": "subcommand",
                    },
                ],
            })
        );
    }

    #[test]
    fn test_schema_round_trips_through_json() {
        let schema = build_schema(&sample_root());
        let raw = serde_json::to_string(&schema).unwrap();
        let parsed: CommandSchema = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, schema);
    }
}
