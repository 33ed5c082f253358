//! Integration Test: Single Writer Surface
//!
//! The terminal has one owner. Frames are drawn only by the surface task;
//! raw terminal escapes (`execute!`, stdout) are only used by the entry
//! point to enter and leave the alternate screen.

use architectural_enforcement::{production_sources, report};

#[test]
fn test_only_the_surface_draws() {
    let mut violations = Vec::new();

    for file in production_sources() {
        if file.file_name() == "surface.rs" {
            continue;
        }
        for idx in 0..file.lines.len() {
            let code = file.code(idx);
            if code.contains(".draw(") {
                violations.push(file.violation(idx, "terminal drawn outside the surface"));
            }
        }
    }

    report("only the surface task draws frames", &violations);
}

#[test]
fn test_raw_terminal_access_stays_in_main() {
    let mut violations = Vec::new();

    for file in production_sources() {
        if file.file_name() == "main.rs" {
            continue;
        }
        for idx in 0..file.lines.len() {
            let code = file.code(idx);
            if code.contains("execute!(")
                || code.contains("stdout()")
                || code.contains("enable_raw_mode")
                || code.contains("println!")
            {
                violations.push(file.violation(idx, "raw terminal access"));
            }
        }
    }

    report("raw terminal access only in the entry point", &violations);
}
