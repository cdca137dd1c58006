//! Hygiene: coding standards enforced at test time
//!
//! Scans the production sources of the sentiment crate for patterns the
//! project does not allow in library code. Every budget is zero; the budget
//! never grows.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", why: "panics on the error path" },
    Rule { pattern: ".expect(", why: "panics on the error path" },
    Rule { pattern: "panic!(", why: "crashes the process" },
    Rule { pattern: "unreachable!(", why: "crashes the process" },
    Rule { pattern: "todo!(", why: "unfinished stub" },
    Rule { pattern: "unimplemented!(", why: "unfinished stub" },
    Rule { pattern: "let _ =", why: "silently discards a value" },
    Rule { pattern: ".ok()", why: "silently discards an error" },
    Rule { pattern: "#[allow(dead_code)]", why: "hides unused code" },
    Rule { pattern: "println!(", why: "library output goes through tracing" },
    Rule { pattern: "eprintln!(", why: "library output goes through tracing" },
];

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")));
    assert!(files.iter().all(|(path, _)| !path.to_string_lossy().ends_with("_test.rs")));
}

#[test]
fn no_rule_violations() {
    let files = source_files();
    let mut violations = Vec::new();
    for rule in RULES {
        for (path, content) in &files {
            for (idx, line) in content.lines().enumerate() {
                if line.contains(rule.pattern) {
                    violations.push(format!(
                        "  {}:{}: `{}` ({})",
                        path.display(),
                        idx + 1,
                        rule.pattern,
                        rule.why
                    ));
                }
            }
        }
    }
    assert!(violations.is_empty(), "hygiene budget exceeded:\n{}", violations.join("\n"));
}
