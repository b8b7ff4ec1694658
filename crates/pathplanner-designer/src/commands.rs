//! Mechanism commands that can be attached to waypoints.
//!
//! Commands come from the command library and season configuration (see
//! [`SeasonLoader`](crate::season::SeasonLoader)). Code generation only
//! needs a command's id and template; name, colour and category are for
//! the editor.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::template::{CodeTemplate, ParamValue, ParamValues};

/// A parameter of a command (e.g. velocity, duration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandParameter {
    pub name: String,
    /// "int", "float", "bool" or "string"
    #[serde(rename = "type", default = "default_param_type")]
    pub param_type: String,
    #[serde(default = "default_param_value")]
    pub default: ParamValue,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub description: String,
}

fn default_param_type() -> String {
    "int".to_string()
}

fn default_param_value() -> ParamValue {
    ParamValue::Int(0)
}

fn default_color() -> String {
    "#FFFFFF".to_string()
}

fn default_category() -> String {
    "Misc".to_string()
}

fn default_sequence_category() -> String {
    "Sequences".to_string()
}

/// A single command that can be assigned to a waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Unique identifier (e.g. "intake_in")
    pub id: String,
    /// Display name (e.g. "Intake In")
    pub name: String,
    /// Code emitted for this command (e.g. "mech.intakeIn();")
    pub code_template: CodeTemplate,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<CommandParameter>,
}

impl Command {
    /// Creates a parameterless command.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code_template: &str,
        color: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code_template: CodeTemplate::parse(code_template),
            color: color.into(),
            category: category.into(),
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: CommandParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Declared parameter defaults.
    pub fn default_values(&self) -> ParamValues {
        self.parameters
            .iter()
            .map(|p| (p.name.clone(), p.default.clone()))
            .collect()
    }

    /// Renders the template; `values` override the parameter defaults.
    pub fn generate_code(&self, values: &ParamValues) -> String {
        let mut merged = self.default_values();
        merged.extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.code_template.render(&merged)
    }
}

/// A named group of commands that run together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSequence {
    pub id: String,
    pub name: String,
    /// Command ids executed in order.
    #[serde(rename = "commands", default)]
    pub command_ids: Vec<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_sequence_category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Season-level replacement of a library command's metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandOverride {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code_template: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Resolves command ids during code generation.
pub trait CommandLookup {
    fn command(&self, id: &str) -> Option<&Command>;

    fn sequence(&self, _id: &str) -> Option<&CommandSequence> {
        None
    }
}

impl CommandLookup for HashMap<String, Command> {
    fn command(&self, id: &str) -> Option<&Command> {
        self.get(id)
    }
}

impl CommandLookup for BTreeMap<String, Command> {
    fn command(&self, id: &str) -> Option<&Command> {
        self.get(id)
    }
}

/// All commands and sequences available to a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
    sequences: BTreeMap<String, CommandSequence>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in fallback command set.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for cmd in default_commands() {
            registry.insert(cmd);
        }
        registry
    }

    /// Adds or replaces a command.
    pub fn insert(&mut self, command: Command) {
        self.commands.insert(command.id.clone(), command);
    }

    /// Adds or replaces a sequence.
    pub fn insert_sequence(&mut self, sequence: CommandSequence) {
        self.sequences.insert(sequence.id.clone(), sequence);
    }

    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.get(id)
    }

    pub fn get_sequence(&self, id: &str) -> Option<&CommandSequence> {
        self.sequences.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(id) || self.sequences.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Command> {
        self.commands.remove(id)
    }

    /// Applies a season override. Returns false if the command is unknown.
    pub fn apply_override(&mut self, id: &str, overrides: &CommandOverride) -> bool {
        let Some(cmd) = self.commands.get_mut(id) else {
            return false;
        };
        if let Some(name) = &overrides.name {
            cmd.name = name.clone();
        }
        if let Some(template) = &overrides.code_template {
            cmd.code_template = CodeTemplate::parse(template);
        }
        if let Some(description) = &overrides.description {
            cmd.description = description.clone();
        }
        true
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn sequences(&self) -> impl Iterator<Item = &CommandSequence> {
        self.sequences.values()
    }

    /// Commands grouped by category, both levels in sorted order.
    pub fn by_category(&self) -> BTreeMap<String, Vec<&Command>> {
        let mut grouped: BTreeMap<String, Vec<&Command>> = BTreeMap::new();
        for cmd in self.commands.values() {
            grouped.entry(cmd.category.clone()).or_default().push(cmd);
        }
        grouped
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.sequences.clear();
    }
}

impl CommandLookup for CommandRegistry {
    fn command(&self, id: &str) -> Option<&Command> {
        self.get(id)
    }

    fn sequence(&self, id: &str) -> Option<&CommandSequence> {
        self.get_sequence(id)
    }
}

/// Minimal command set used when no season configuration is available.
pub fn default_commands() -> Vec<Command> {
    vec![
        Command::new("intake_in", "Intake In", "mech.intakeIn();", "#00FF00", "Intake"),
        Command::new("intake_out", "Intake Out", "mech.intakeOut();", "#FF6600", "Intake"),
        Command::new("intake_stop", "Intake Stop", "mech.intakeStop();", "#006600", "Intake"),
        Command::new("conveyor_up", "Conveyor Up", "mech.conveyorUp();", "#0088FF", "Conveyor"),
        Command::new("conveyor_down", "Conveyor Down", "mech.conveyorDown();", "#0044AA", "Conveyor"),
        Command::new("conveyor_stop", "Conveyor Stop", "mech.conveyorStop();", "#002266", "Conveyor"),
        Command::new("scorer_forward", "Releaser →", "mech.releaserForward();", "#FF0000", "Scorer"),
        Command::new("scorer_backward", "Releaser ←", "mech.releaserBackward();", "#AA0000", "Scorer"),
        Command::new("scorer_stop", "Releaser Stop", "mech.releaserStop();", "#660000", "Scorer"),
        Command::new("arm_toggle", "Toggle Arm", "mech.toggleArm();", "#FF00FF", "Pneumatics"),
        Command::new("lever_toggle", "Toggle Lever", "mech.toggleLever();", "#AA00AA", "Pneumatics"),
        Command::new("wait_100", "Wait 100ms", "pros::delay(100);", "#888888", "Timing"),
        Command::new("wait_250", "Wait 250ms", "pros::delay(250);", "#888888", "Timing"),
        Command::new("wait_500", "Wait 500ms", "pros::delay(500);", "#888888", "Timing"),
        Command::new("wait_1000", "Wait 1s", "pros::delay(1000);", "#888888", "Timing"),
    ]
}
