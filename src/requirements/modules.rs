//! Python module import preflight.
//!
//! Runs the interpreter once with all configured imports. Only when that
//! fails is each module tried on its own, so the user learns exactly which
//! packages are missing.

use crate::shell::execute_check;
use std::path::Path;

/// Build the `-c` program importing `modules`.
fn import_program(modules: &[String]) -> String {
    format!("import {}", modules.join(", "))
}

/// Return the modules `interpreter` cannot import. Empty means all good.
pub fn missing_modules(interpreter: &Path, modules: &[String]) -> Vec<String> {
    if modules.is_empty() {
        return Vec::new();
    }

    let program = import_program(modules);
    if execute_check(interpreter, &["-c", program.as_str()]) {
        return Vec::new();
    }

    let missing: Vec<String> = modules
        .iter()
        .filter(|m| {
            let program = import_program(std::slice::from_ref(*m));
            !execute_check(interpreter, &["-c", program.as_str()])
        })
        .cloned()
        .collect();

    tracing::debug!("Missing modules: {:?}", missing);
    missing
}
