//! Integration Test: Production Hygiene
//!
//! Production code reports failures through `Result`; it never aborts the
//! process on its own, which would skip terminal restoration.

use architectural_enforcement::{production_sources, report};

#[test]
fn test_no_process_exit() {
    let mut violations = Vec::new();

    for file in production_sources() {
        for idx in 0..file.lines.len() {
            if file.code(idx).contains("process::exit") {
                violations.push(file.violation(idx, "process exit"));
            }
        }
    }

    report("no process::exit in production code", &violations);
}

#[test]
fn test_no_unwrap_or_panic() {
    let mut violations = Vec::new();

    for file in production_sources() {
        for idx in 0..file.lines.len() {
            let code = file.code(idx);
            if code.contains(".unwrap()")
                || code.contains(".expect(")
                || code.contains("panic!(")
                || code.contains("unreachable!(")
                || code.contains("todo!(")
            {
                violations.push(file.violation(idx, "panicking call"));
            }
        }
    }

    report("no unwrap/expect/panic in production code", &violations);
}
