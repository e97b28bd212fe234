//! End-to-end report assertions over the public `Analyzer` API.
//!
//! Version lookups are stubbed out so the tests never shell out to an
//! interpreter.

use std::io::Write;

use pretty_assertions::assert_eq;
use test_case::test_case;

use cellscope::analysis::modules::NoVersions;
use cellscope::types::DefinitionKind;
use cellscope::{AnalysisReport, Analyzer};

fn analyze(source: &str) -> AnalysisReport {
    Analyzer::with_version_lookup(NoVersions).analyze(source)
}

fn names(report: &AnalysisReport) -> Vec<&str> {
    report
        .definitions
        .iter()
        .filter_map(|d| d.name.as_deref())
        .collect()
}

// -- Set disjointness ------------------------------------------------------

#[test_case("x = 1\ny = x + z\n" ; "assign_with_remote")]
#[test_case("import numpy as np\na = np.zeros(n)\n" ; "import_then_use")]
#[test_case("def f(p):\n    return p + q\nf(r)\n" ; "function_and_call")]
#[test_case("for i in items:\n    acc = acc + i\n" ; "loop_accumulator")]
#[test_case("x = x + 1\n" ; "self_referential_assign")]
#[test_case("if c:\n    v = 1\nelse:\n    v = 2\n" ; "branching")]
fn local_remote_and_imports_are_disjoint(source: &str) {
    let report = analyze(source);
    for name in report.local.iter() {
        assert!(
            !report.remote.contains(name),
            "{name} is both local and remote"
        );
    }
    for name in report.remote.iter() {
        assert!(
            !report.imports.contains(name),
            "{name} is both remote and imported"
        );
    }
}

// -- Assignments -----------------------------------------------------------

#[test]
fn simple_assignment() {
    let report = analyze("x = 1\n");
    assert_eq!(report.definitions.len(), 1);
    let def = &report.definitions[0];
    assert_eq!(def.name.as_deref(), Some("x"));
    assert_eq!(def.kind, DefinitionKind::Assign);
    assert!(def.dependencies.is_empty());
    assert_eq!(report.local.as_slice(), ["x"]);
    assert!(report.remote.is_empty());
}

#[test]
fn assignment_with_unresolved_dependency() {
    let report = analyze("y = x + 1\n");
    assert!(report.remote.contains("x"));
    assert_eq!(report.definitions[0].dependencies, vec!["x"]);
    assert_eq!(report.local.as_slice(), ["y"]);
}

#[test]
fn tuple_unpacking_emits_one_definition_per_target() {
    let report = analyze("a, b = 1, 2\n");
    assert_eq!(names(&report), ["a", "b"]);
    for def in &report.definitions {
        assert_eq!(def.kind, DefinitionKind::Assign);
        assert!(def.dependencies.is_empty());
    }
    assert_eq!(report.local.as_slice(), ["a", "b"]);
}

#[test]
fn unpacking_pairs_dependencies_positionally() {
    let report = analyze("mean, std = compute(x), spread(y)\n");
    assert_eq!(report.definitions[0].dependencies, vec!["compute", "x"]);
    assert_eq!(report.definitions[1].dependencies, vec!["spread", "y"]);
}

// -- Functions and classes -------------------------------------------------

#[test]
fn function_promotes_remotes_but_hides_parameters() {
    let report = analyze("def f(p):\n    return p + z\n");
    assert_eq!(report.definitions.len(), 1);
    let def = &report.definitions[0];
    assert_eq!(def.kind, DefinitionKind::Function);
    assert_eq!(def.name.as_deref(), Some("f"));
    assert!(report.remote.contains("z"));
    assert!(!report.local.contains("p"));
    assert!(!report.remote.contains("p"));
    assert_eq!(report.local.as_slice(), ["f"]);
}

#[test]
fn class_definition_depends_on_bases() {
    let report = analyze("class Model(Base):\n    lr = 0.1\n");
    let def = &report.definitions[0];
    assert_eq!(def.kind, DefinitionKind::Class);
    assert_eq!(def.dependencies, vec!["Base"]);
    assert!(report.remote.contains("Base"));
    assert!(report.local.contains("Model"));
    assert!(!report.local.contains("lr"));
}

// -- Imports ---------------------------------------------------------------

#[test]
fn import_alias_lands_in_imports_and_registry() {
    let report = analyze("import numpy as np\n");
    assert!(report.imports.contains("np"));
    let entry = &report.modules["numpy"];
    assert_eq!(entry.imports[0].name, "numpy");
    assert_eq!(entry.imports[0].alias.as_deref(), Some("np"));
    assert_eq!(entry.version, "");
    assert!(report.definitions.is_empty());
}

#[test]
fn from_import_registers_symbols_per_module() {
    let report = analyze("from sklearn.linear_model import LinearRegression as LR\n");
    assert!(report.imports.contains("LR"));
    let entry = &report.modules["sklearn.linear_model"];
    assert_eq!(entry.imports[0].name, "LinearRegression");
    assert_eq!(entry.imports[0].alias.as_deref(), Some("LR"));
}

#[test]
fn imported_module_feeds_dependencies_but_not_remote() {
    let report = analyze("import numpy as np\ndef f():\n    return np.zeros(3)\nnp\n");
    assert_eq!(report.definitions[0].dependencies, vec!["np"]);
    assert!(report.remote.is_empty());
    assert!(report.imports.contains("np"));
}

// -- Bare call statements --------------------------------------------------

#[test]
fn bare_call_definition_named_after_first_free_variable() {
    let report = analyze("model.fit(X_train, y_train)\n");
    let def = &report.definitions[0];
    assert_eq!(def.kind, DefinitionKind::Call);
    assert_eq!(def.name.as_deref(), Some("model"));
    assert_eq!(def.dependencies, vec!["X_train", "y_train"]);
    for var in ["model", "X_train", "y_train"] {
        assert!(report.remote.contains(var));
    }
}

// -- Loops and conditionals ------------------------------------------------

#[test]
fn conditional_binding_is_local_after_the_statement() {
    let report = analyze("if c:\n    x = 1\nelse:\n    x = 2\ny = x\n");
    assert!(report.local.contains("x"));
    assert!(report.local.contains("y"));
    assert_eq!(report.remote.as_slice(), ["c"]);
}

#[test]
fn condition_wraps_both_branches() {
    let report = analyze("if cond:\n    x = 1\nelse:\n    x = 2\n");
    assert_eq!(report.definitions.len(), 1);
    let cond = &report.definitions[0];
    assert_eq!(cond.kind, DefinitionKind::Condition);
    assert_eq!(cond.name, None);
    assert!(cond.dependencies.contains(&"cond".to_string()));
    assert_eq!(cond.body.len(), 1);
    assert_eq!(cond.orelse.len(), 1);
    assert_eq!(cond.body[0].name.as_deref(), Some("x"));
    assert_eq!(cond.orelse[0].name.as_deref(), Some("x"));
}

#[test]
fn loop_aggregates_iterable_then_branch_remotes() {
    let report = analyze("for row in rows:\n    total = total + row\nelse:\n    done = flag\n");
    let loop_def = &report.definitions[0];
    assert_eq!(loop_def.kind, DefinitionKind::Loop);
    assert_eq!(loop_def.dependencies, vec!["rows", "total", "flag"]);
    assert_eq!(loop_def.body.len(), 1);
    assert_eq!(loop_def.orelse.len(), 1);
    assert!(report.local.contains("row"));
}

// -- Data references -------------------------------------------------------

#[test]
fn path_literal_tags_owner_and_propagates() {
    let file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file.as_file(), "payload").unwrap();
    let path = file.path().to_str().unwrap();

    let report = analyze(&format!("path = \"{path}\"\nsize = path\n"));
    assert_eq!(report.data_values, vec![path.to_string()]);
    assert!(report.data_vars.contains("path"));
    assert!(report.data_vars.contains("size"), "transitive tag via size → path");
}

#[test]
fn url_literal_propagates_through_chain() {
    let report = analyze(
        "url = \"https://example.com/train.csv\"\nraw = fetch(url)\ndf = parse(raw)\n",
    );
    assert_eq!(report.data_values, vec!["https://example.com/train.csv"]);
    for name in ["url", "raw", "df"] {
        assert!(report.data_vars.contains(name), "{name} should be tagged");
    }
}

#[test]
fn plain_literals_are_not_data_references() {
    let report = analyze("greeting = \"hello there\"\n");
    assert!(report.data_values.is_empty());
    assert!(report.data_vars.is_empty());
}

// -- Robustness ------------------------------------------------------------

#[test]
fn analysis_is_idempotent() {
    let source = "import json\nx = 1\ny = x + z\nfor i in y:\n    x += i\n";
    let first = analyze(source);
    let second = analyze(source);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "reports must be byte-identical across runs"
    );
}

#[test]
fn invalid_trailing_line_still_yields_valid_prefix() {
    let report = analyze("x = 1\ny = x + 1\n$$$ not python $$$\n");
    assert!(!report.definitions.is_empty());
    assert_eq!(report.local.as_slice(), ["x", "y"]);
}

#[test]
fn hopeless_input_yields_empty_report_without_panicking() {
    let report = analyze("$$$\n@@@\n)))\n");
    assert!(report.definitions.is_empty());
    assert!(report.local.is_empty());
}

#[test]
fn empty_cell_yields_empty_report() {
    assert_eq!(analyze(""), AnalysisReport::default());
}

#[test]
fn report_serializes_with_expected_fields() {
    let report = analyze("x = 1\n");
    let json = serde_json::to_value(&report).unwrap();
    for field in [
        "definitions",
        "local",
        "remote",
        "imports",
        "modules",
        "data_vars",
        "data_values",
    ] {
        assert!(json.get(field).is_some(), "missing report field {field}");
    }
}
