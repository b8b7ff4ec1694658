//! Code generation for the current path.

use super::DesignerState;
use crate::codegen::{effective_headings, CodeGenerator};

impl DesignerState {
    fn generator(&self) -> CodeGenerator {
        CodeGenerator::new(self.codegen_options.clone())
    }

    /// Full listing for the current path; empty if there is none.
    pub fn generate_code(&self) -> String {
        self.current_path()
            .map(|path| self.generator().generate(path, &self.commands))
            .unwrap_or_default()
    }

    /// Statements only, without header or function wrapper.
    pub fn generate_body(&self) -> String {
        self.current_path()
            .map(|path| self.generator().generate_body(path, &self.commands))
            .unwrap_or_default()
    }

    /// Resolved heading of every waypoint in the current path.
    pub fn effective_headings(&self) -> Vec<f64> {
        self.current_path()
            .map(effective_headings)
            .unwrap_or_default()
    }
}
