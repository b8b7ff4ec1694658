//! Robot code generation from paths.
//!
//! Each waypoint becomes one block: an optional comment, the motion
//! statement for its motion type, then one line per command in
//! `commands_after`. Blocks are separated by a blank line and always appear
//! in waypoint order. Output depends only on the path, the command lookup
//! and the generator options.

use pathplanner_core::{calculate_distance, calculate_heading, normalize_angle};

use crate::commands::CommandLookup;
use crate::model::{Heading, MotionType, Path, Waypoint};
use crate::template::{CodeTemplate, ParamValue, ParamValues};

/// Motion statement templates, one per motion type.
///
/// Available placeholders: `{x}`, `{y}`, `{heading}`, `{distance}`,
/// `{forwards}`, `{reverse}`, `{intaking}`, `{conveyor}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTemplates {
    pub start: CodeTemplate,
    pub move_to_pose: CodeTemplate,
    pub move_vertical: CodeTemplate,
    pub rotate_to: CodeTemplate,
}

impl MotionTemplates {
    pub fn for_motion(&self, motion_type: MotionType) -> &CodeTemplate {
        match motion_type {
            MotionType::Start => &self.start,
            MotionType::MoveToPose => &self.move_to_pose,
            MotionType::MoveVertical => &self.move_vertical,
            MotionType::RotateTo => &self.rotate_to,
        }
    }
}

impl Default for MotionTemplates {
    fn default() -> Self {
        Self {
            start: CodeTemplate::parse("chassis.setPose({x}, {y}, {heading});"),
            move_to_pose: CodeTemplate::parse(
                "chassis.moveToPose({x}, {y}, {heading}, {.forwards = {forwards}, .intake = {intaking}, .conveyor = {conveyor}});",
            ),
            move_vertical: CodeTemplate::parse(
                "chassis.moveVertical({distance}, {.forwards = {forwards}, .intake = {intaking}, .conveyor = {conveyor}});",
            ),
            rotate_to: CodeTemplate::parse("chassis.turnToHeading({heading});"),
        }
    }
}

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenOptions {
    /// Spaces per indentation level inside the function wrapper.
    pub indent: usize,
    /// Decimal places for coordinates, headings and distances.
    pub precision: usize,
    /// Wrap statements in `void <name>() { ... }`.
    pub wrap_in_function: bool,
    /// Emit the header and per-waypoint comments.
    pub include_comments: bool,
}

impl Default for CodeGenOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            precision: 2,
            wrap_in_function: true,
            include_comments: true,
        }
    }
}

/// Resolved heading for every waypoint of `path`, in degrees.
///
/// Manual headings are used as stored. An automatic heading points at the
/// next waypoint. With no usable successor (last waypoint, or the next one
/// sits on the same spot) the previous resolved heading is reused, or 0°
/// for the first waypoint.
pub fn effective_headings(path: &Path) -> Vec<f64> {
    let waypoints = path.waypoints();
    let mut headings = Vec::with_capacity(waypoints.len());
    let mut previous = 0.0;

    for (i, wp) in waypoints.iter().enumerate() {
        let heading = match wp.heading {
            Heading::Manual(deg) => deg,
            Heading::Auto => match waypoints.get(i + 1) {
                Some(next) if next.position() != wp.position() => {
                    calculate_heading(wp.position(), next.position())
                }
                _ => previous,
            },
        };
        headings.push(heading);
        previous = heading;
    }
    headings
}

/// Turns a path name into a C++ identifier: anything outside
/// `[A-Za-z0-9_]` becomes `_`, and a leading digit gets a `_` prefix.
pub fn function_name(name: &str) -> String {
    let mut ident: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() {
        return "autonomous".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Code generator for paths.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    options: CodeGenOptions,
    templates: MotionTemplates,
}

impl CodeGenerator {
    pub fn new(options: CodeGenOptions) -> Self {
        Self {
            options,
            templates: MotionTemplates::default(),
        }
    }

    /// Replaces the motion statement templates.
    pub fn with_templates(mut self, templates: MotionTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn options(&self) -> &CodeGenOptions {
        &self.options
    }

    pub fn templates(&self) -> &MotionTemplates {
        &self.templates
    }

    /// Generates the full listing for a path.
    pub fn generate<L: CommandLookup + ?Sized>(&self, path: &Path, lookup: &L) -> String {
        let body = self.generate_body(path, lookup);
        let mut code = self.generate_header(path);

        if !self.options.wrap_in_function {
            code.push_str(&body);
            return code;
        }

        let indent = " ".repeat(self.options.indent);
        code.push_str(&format!("void {}() {{\n", function_name(&path.name)));
        for line in body.lines() {
            if !line.is_empty() {
                code.push_str(&indent);
                code.push_str(line);
            }
            code.push('\n');
        }
        code.push_str("}\n");
        code
    }

    /// Generates the header comment; empty when comments are disabled.
    pub fn generate_header(&self, path: &Path) -> String {
        if !self.options.include_comments {
            return String::new();
        }
        format!(
            "// Path: {} ({} alliance, {} side)\n// Waypoints: {}\n\n",
            path.name,
            path.alliance,
            path.side,
            path.len()
        )
    }

    /// Generates the waypoint blocks only, without header or wrapper.
    pub fn generate_body<L: CommandLookup + ?Sized>(&self, path: &Path, lookup: &L) -> String {
        let headings = effective_headings(path);
        let waypoints = path.waypoints();

        let blocks: Vec<String> = waypoints
            .iter()
            .enumerate()
            .map(|(i, wp)| {
                let distance = i
                    .checked_sub(1)
                    .and_then(|prev| waypoints.get(prev))
                    .map(|prev| calculate_distance(prev.position(), wp.position()))
                    .unwrap_or(0.0);
                self.generate_waypoint(i, wp, headings[i], distance, lookup)
            })
            .collect();

        blocks.join("\n")
    }

    fn generate_waypoint<L: CommandLookup + ?Sized>(
        &self,
        index: usize,
        wp: &Waypoint,
        heading: f64,
        distance: f64,
        lookup: &L,
    ) -> String {
        let mut block = String::new();

        if self.options.include_comments {
            block.push_str(&format!(
                "// {}: {} ({}, {})\n",
                index + 1,
                wp.motion_type,
                self.format_number(wp.x),
                self.format_number(wp.y)
            ));
        }

        let values = self.motion_values(wp, heading, distance);
        block.push_str(&self.templates.for_motion(wp.motion_type).render(&values));
        block.push('\n');

        for id in &wp.commands_after {
            self.generate_command(id, lookup, &mut block);
        }
        block
    }

    fn generate_command<L: CommandLookup + ?Sized>(&self, id: &str, lookup: &L, out: &mut String) {
        if let Some(cmd) = lookup.command(id) {
            out.push_str(&cmd.generate_code(&ParamValues::new()));
            out.push('\n');
            return;
        }

        if let Some(seq) = lookup.sequence(id) {
            if self.options.include_comments {
                out.push_str(&format!("// {}\n", seq.name));
            }
            for cmd_id in &seq.command_ids {
                match lookup.command(cmd_id) {
                    Some(cmd) => out.push_str(&cmd.generate_code(&ParamValues::new())),
                    None => {
                        tracing::warn!(sequence = %seq.id, command = %cmd_id, "Unknown command in sequence");
                        out.push_str(&format!("// Unknown command: {}", cmd_id));
                    }
                }
                out.push('\n');
            }
            return;
        }

        tracing::warn!(command = %id, "Unknown command");
        out.push_str(&format!("// Unknown command: {}\n", id));
    }

    fn motion_values(&self, wp: &Waypoint, heading: f64, distance: f64) -> ParamValues {
        let mut values = ParamValues::new();
        values.insert("x".into(), ParamValue::Text(self.format_number(wp.x)));
        values.insert("y".into(), ParamValue::Text(self.format_number(wp.y)));
        values.insert(
            "heading".into(),
            ParamValue::Text(self.format_number(normalize_angle(heading))),
        );
        values.insert(
            "distance".into(),
            ParamValue::Text(self.format_number(distance)),
        );
        values.insert("forwards".into(), ParamValue::Bool(!wp.reverse));
        values.insert("reverse".into(), ParamValue::Bool(wp.reverse));
        values.insert("intaking".into(), ParamValue::Bool(wp.intaking));
        values.insert("conveyor".into(), ParamValue::Bool(wp.conveyor));
        values
    }

    /// Fixed-precision number without a negative zero.
    fn format_number(&self, value: f64) -> String {
        let text = format!("{:.*}", self.options.precision, value);
        match text.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
            _ => text,
        }
    }
}
