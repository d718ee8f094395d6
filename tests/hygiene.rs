//! Hygiene: enforces coding standards at test time.
//!
//! Controllers run inside every page event handler, so a panic takes down
//! the whole page script. These tests scan `src/` (excluding `*_test.rs`)
//! for patterns that panic or swallow errors. Each pattern has a budget;
//! the budget never grows.

use std::fs;
use std::path::Path;

struct Rule {
    name: &'static str,
    pattern: &'static str,
    budget: usize,
}

const RULES: &[Rule] = &[
    // Panics.
    Rule { name: "unwrap", pattern: ".unwrap()", budget: 0 },
    Rule { name: "expect", pattern: ".expect(", budget: 0 },
    Rule { name: "panic", pattern: "panic!(", budget: 0 },
    Rule { name: "unreachable", pattern: "unreachable!(", budget: 0 },
    Rule { name: "todo", pattern: "todo!(", budget: 0 },
    Rule { name: "unimplemented", pattern: "unimplemented!(", budget: 0 },
    // Silent loss. Use `events::settle` to log and drop a failure.
    Rule { name: "silent discard", pattern: "let _ =", budget: 0 },
    Rule { name: "dot ok", pattern: ".ok()", budget: 0 },
    // Structure.
    Rule { name: "allow dead_code", pattern: "#[allow(dead_code)]", budget: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  {} budget exceeded: found {count}, max {}\n{detail}", rule.name, rule.budget));
        }
    }
    assert!(failures.is_empty(), "hygiene violations:\n{}", failures.join("\n"));
}

#[test]
fn every_module_has_a_doc_comment() {
    for file in source_files() {
        assert!(
            file.content.trim_start().starts_with("//!"),
            "{} is missing a module doc comment",
            file.path
        );
    }
}
