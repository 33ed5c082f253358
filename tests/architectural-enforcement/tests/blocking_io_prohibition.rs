//! Integration Test: Blocking I/O Prohibition
//!
//! Async code must not block the runtime: file and network I/O inside an
//! `async fn` goes through `tokio::fs` / `reqwest`. Blocking calls are fine
//! in plain functions that run before the runtime gets busy (log setup).

use architectural_enforcement::{production_sources, report};

const BLOCKING: &[(&str, &str)] = &[
    ("std::fs::", "blocking file I/O"),
    ("File::open(", "blocking file I/O"),
    ("File::create(", "blocking file I/O"),
    ("std::net::", "blocking network I/O"),
    ("reqwest::blocking", "blocking HTTP client"),
    ("std::thread::sleep", "blocking sleep"),
];

#[test]
fn test_no_blocking_io_in_async_code() {
    let mut violations = Vec::new();

    for file in production_sources() {
        for idx in 0..file.lines.len() {
            if !file.in_async_fn(idx) {
                continue;
            }
            let code = file.code(idx);
            for (pattern, what) in BLOCKING {
                if code.contains(pattern) {
                    violations.push(file.violation(idx, what));
                }
            }
        }
    }

    report("no blocking I/O in async code", &violations);
}

#[test]
fn test_no_blocking_sleep_anywhere() {
    let mut violations = Vec::new();

    for file in production_sources() {
        for idx in 0..file.lines.len() {
            if file.code(idx).contains("thread::sleep") {
                violations.push(file.violation(idx, "thread sleep"));
            }
        }
    }

    report("no thread::sleep in production code", &violations);
}
