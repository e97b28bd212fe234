//! Import recording and best-effort module version resolution.
//!
//! Import statements are structural rather than value dependencies, so they
//! never emit a [`crate::types::Definition`]; they feed the `imports` name
//! set (exempt from remote classification everywhere) and the module
//! registry, which carries each module's installed version when it can be
//! resolved.

use std::process::Command;

use tracing::debug;
use tree_sitter::Node;

use crate::analysis::collect::{named_children, node_text};
use crate::ordered_set::OrderedSet;
use crate::types::{ImportedSymbol, ModuleEntry, ModuleRegistry};

// ---------------------------------------------------------------------------
// Version lookup
// ---------------------------------------------------------------------------

/// Best-effort lookup of an installed module's version.
///
/// Implementations convert every failure mode into `None`; the registry
/// stores the empty string for unresolved modules and analysis continues.
pub trait VersionLookup: Send + Sync {
    fn version(&self, module: &str) -> Option<String>;
}

/// Resolves versions by asking the Python interpreter's `importlib.metadata`.
///
/// Covers the common case where the analyzer runs next to the kernel that
/// executes the cells. A missing interpreter or unknown distribution both
/// yield `None`.
pub struct InterpreterMetadata;

impl VersionLookup for InterpreterMetadata {
    fn version(&self, module: &str) -> Option<String> {
        let output = Command::new("python3")
            .arg("-c")
            .arg("import importlib.metadata, sys\nprint(importlib.metadata.version(sys.argv[1]))")
            .arg(module)
            .output()
            .ok()?;
        if !output.status.success() {
            debug!(module, "version lookup failed");
            return None;
        }
        let version = String::from_utf8(output.stdout).ok()?.trim().to_string();
        if version.is_empty() {
            None
        } else {
            Some(version)
        }
    }
}

/// Lookup that never resolves anything. Used by tests and by callers that
/// want fast, hermetic analysis.
pub struct NoVersions;

impl VersionLookup for NoVersions {
    fn version(&self, _module: &str) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// Import recording
// ---------------------------------------------------------------------------

fn registry_entry<'r>(
    modules: &'r mut ModuleRegistry,
    module: &str,
    versions: &dyn VersionLookup,
) -> &'r mut ModuleEntry {
    // Idempotent: the version is looked up once per module per analysis.
    modules.entry(module.to_string()).or_insert_with(|| ModuleEntry {
        imports: Vec::new(),
        version: versions.version(module).unwrap_or_default(),
    })
}

/// Split an import item node into `(name, alias)`.
fn import_item(node: Node<'_>, src: &[u8]) -> Option<(String, Option<String>)> {
    match node.kind() {
        "dotted_name" | "identifier" | "relative_import" => {
            Some((node_text(node, src).to_string(), None))
        }
        "aliased_import" => {
            let name = node.child_by_field_name("name")?;
            let alias = node
                .child_by_field_name("alias")
                .map(|a| node_text(a, src).to_string());
            Some((node_text(name, src).to_string(), alias))
        }
        "wildcard_import" => Some(("*".to_string(), None)),
        _ => None,
    }
}

/// Record a plain `import X` / `import X as Y` statement.
pub(crate) fn record_import(
    node: Node<'_>,
    src: &[u8],
    imports: &mut OrderedSet,
    modules: &mut ModuleRegistry,
    versions: &dyn VersionLookup,
) {
    for child in named_children(node) {
        let Some((name, alias)) = import_item(child, src) else {
            continue;
        };
        imports.insert(alias.clone().unwrap_or_else(|| name.clone()));
        let entry = registry_entry(modules, &name, versions);
        entry.imports.push(ImportedSymbol { name, alias });
    }
}

/// Record a `from X import Y` / `from X import Y as Z` statement.
pub(crate) fn record_import_from(
    node: Node<'_>,
    src: &[u8],
    imports: &mut OrderedSet,
    modules: &mut ModuleRegistry,
    versions: &dyn VersionLookup,
) {
    // `future_import_statement` has no module_name field; the module is
    // implied.
    let module = node
        .child_by_field_name("module_name")
        .map(|m| node_text(m, src).to_string())
        .unwrap_or_else(|| "__future__".to_string());

    let module_node = node.child_by_field_name("module_name");
    for child in named_children(node) {
        if module_node.is_some_and(|m| m.id() == child.id()) {
            continue;
        }
        let Some((name, alias)) = import_item(child, src) else {
            continue;
        };
        imports.insert(alias.clone().unwrap_or_else(|| name.clone()));
        let entry = registry_entry(modules, &module, versions);
        entry.imports.push(ImportedSymbol { name, alias });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
