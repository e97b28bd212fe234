//! Property-based invariants over generated cells.
//!
//! The generator composes small, always-valid statement templates; the
//! properties assert the report invariants that must hold for every input:
//! set disjointness, idempotence, and no panics even on arbitrary text.

use proptest::prelude::*;

use cellscope::analysis::modules::NoVersions;
use cellscope::Analyzer;

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,3}"
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (ident(), ident()).prop_map(|(a, b)| format!("{a} = {b} + 1")),
        ident().prop_map(|a| format!("{a} = 1")),
        (ident(), ident(), ident()).prop_map(|(a, b, c)| format!("{a}, {b} = {c}, 2")),
        ident().prop_map(|m| format!("import {m}")),
        (ident(), ident(), ident())
            .prop_map(|(f, p, z)| format!("def {f}({p}):\n    return {p} + {z}")),
        (ident(), ident(), ident())
            .prop_map(|(i, it, acc)| format!("for {i} in {it}:\n    {acc} = {acc} + {i}")),
        (ident(), ident()).prop_map(|(c, x)| format!("if {c}:\n    {x} = 1\nelse:\n    {x} = 2")),
        (ident(), ident()).prop_map(|(m, x)| format!("{m}.fit({x})")),
    ]
}

fn cell() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 1..8).prop_map(|stmts| stmts.join("\n") + "\n")
}

proptest! {
    #[test]
    fn local_and_remote_are_disjoint(source in cell()) {
        let report = Analyzer::with_version_lookup(NoVersions).analyze(&source);
        for name in report.local.iter() {
            prop_assert!(!report.remote.contains(name), "{} in both local and remote", name);
        }
    }

    #[test]
    fn remote_never_contains_imports(source in cell()) {
        let report = Analyzer::with_version_lookup(NoVersions).analyze(&source);
        for name in report.remote.iter() {
            prop_assert!(!report.imports.contains(name), "{} in both remote and imports", name);
        }
    }

    #[test]
    fn analysis_is_idempotent(source in cell()) {
        let analyzer = Analyzer::with_version_lookup(NoVersions);
        let first = serde_json::to_string(&analyzer.analyze(&source)).unwrap();
        let second = serde_json::to_string(&analyzer.analyze(&source)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_text_never_panics(source in "[ -~\n]{0,200}") {
        let _ = Analyzer::with_version_lookup(NoVersions).analyze(&source);
    }
}
