//! Source hygiene checks for the parkspot crate.
//!
//! Every pattern below has a budget. Browser-only glue compiles to inert
//! fallbacks off the `csr` feature, which is where the remaining `let _ =`
//! and `.ok()` hits live. Lower a budget when a hit goes away; never raise one.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 8 },
    Budget { pattern: ".ok()", max: 8 },
];

const STRUCTURE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0 }];

/// Production sources under `src/`; `_test.rs` siblings are skipped.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rust && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn hits(sources: &[(PathBuf, String)], pattern: &str) -> Vec<(String, usize)> {
    sources
        .iter()
        .map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (path.display().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn enforce(budgets: &[Budget]) {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found; run from the crate root");
    for budget in budgets {
        let found = hits(&sources, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        let listing = found
            .iter()
            .map(|(path, n)| format!("  {path}: {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(
            count <= budget.max,
            "`{}` budget exceeded: found {count}, max {}.\n{listing}",
            budget.pattern,
            budget.max
        );
    }
}

#[test]
fn panic_paths_stay_out_of_production_code() {
    enforce(PANICS);
}

#[test]
fn discarded_results_stay_within_budget() {
    enforce(SILENT_LOSS);
}

#[test]
fn no_dead_code_allowances() {
    enforce(STRUCTURE);
}
