//! Hygiene: coding standards enforced at test time
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that either crash the
//! page script or swallow browser errors without logging them. Browser
//! failures must surface through `DomError` and `util::dom::report`.
//! Budgets only ever go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics: a panic inside a listener kills the whole wasm instance.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with `?` or handle the None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with `?` or handle the None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "return an error instead" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the state so it cannot happen" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
];

// Silent loss: JS errors discarded without a log line.
const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "log the error with `report` or `log::warn!`" },
    Budget { pattern: ".ok()", max: 0, why: "match on the Result and log the error" },
];

const STYLE: &[Budget] = &[
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the dead code" },
    Budget { pattern: ".forget()", max: 0, why: "hold the handle in `Page` so shutdown can drop it" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");

    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({}).\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_discard_budget() {
    check(DISCARDS);
}

#[test]
fn style_budget() {
    check(STYLE);
}
