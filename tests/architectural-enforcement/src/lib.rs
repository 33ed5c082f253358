//! Architectural Enforcement Integration Tests
//!
//! Source scans that keep the workspace honest:
//! - only the surface task draws to the terminal
//! - production code never exits or panics on its own
//! - async code never does blocking file or network I/O
//!
//! This library holds the shared scanning helpers; the rules live under
//! `tests/`.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (this crate lives at `tests/architectural-enforcement`)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// The production part of one source file
pub struct SourceFile {
    /// Path relative to the workspace root
    pub path: PathBuf,
    /// Lines up to the first `#[cfg(test)]`
    pub lines: Vec<String>,
}

impl SourceFile {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Line `idx` with any trailing `//` comment removed
    pub fn code(&self, idx: usize) -> &str {
        let line = self.lines[idx].as_str();
        line.split("//").next().unwrap_or(line)
    }

    /// Signature line of the function enclosing line `idx`, if any
    pub fn enclosing_fn(&self, idx: usize) -> Option<&str> {
        self.lines[..=idx]
            .iter()
            .rev()
            .map(|l| l.trim())
            .find(|l| l.starts_with("fn ") || l.contains(" fn ") || l.starts_with("async fn "))
    }

    /// Whether line `idx` sits inside an `async fn`
    pub fn in_async_fn(&self, idx: usize) -> bool {
        self.enclosing_fn(idx)
            .is_some_and(|signature| signature.contains("async fn"))
    }

    pub fn violation(&self, idx: usize, what: &str) -> String {
        format!(
            "{}:{} - {}: {}",
            self.path.display(),
            idx + 1,
            what,
            self.lines[idx].trim()
        )
    }
}

/// Production sources of every workspace crate
pub fn production_sources() -> Vec<SourceFile> {
    let root = workspace_root();
    let mut files = Vec::new();

    for dir in ["core/src", "tui/src"] {
        let path = root.join(dir);
        if !path.exists() {
            continue;
        }

        for entry in walkdir::WalkDir::new(&path)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().and_then(|s| s.to_str()) != Some("rs") {
                continue;
            }
            let content = match fs::read_to_string(entry.path()) {
                Ok(c) => c,
                Err(_) => continue,
            };

            let lines = content
                .lines()
                .take_while(|l| !l.trim_start().starts_with("#[cfg(test)]"))
                .map(str::to_string)
                .collect();
            let relative = entry
                .path()
                .strip_prefix(&root)
                .unwrap_or(entry.path())
                .to_path_buf();

            files.push(SourceFile {
                path: relative,
                lines,
            });
        }
    }

    files
}

/// Fail with every violation listed
pub fn report(rule: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n{rule}:");
    for violation in violations {
        eprintln!("  {violation}");
    }
    panic!("\nFound {} violation(s) of: {rule}", violations.len());
}
