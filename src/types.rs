//! Core domain types for cellscope.
//!
//! The report shapes here are the JSON contract a hosting server returns to
//! its frontend, so field names and ordering semantics are part of the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ordered_set::OrderedSet;

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// What kind of statement a [`Definition`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Function,
    Class,
    Loop,
    Condition,
    Import,
    Assign,
    Call,
}

/// Source span of a statement. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

/// One tracked statement: what it binds, what it depends on, where it sits.
///
/// `name` is absent for loop/condition wrappers, which group a body rather
/// than bind a single name. `body`/`orelse` hold the nested definitions of
/// the two syntactic branches of a compound statement and are empty for
/// every other kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: DefinitionKind,
    /// Names this definition's value depends on, deduplicated, source order.
    pub dependencies: Vec<String>,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orelse: Vec<Definition>,
}

// ---------------------------------------------------------------------------
// Module registry
// ---------------------------------------------------------------------------

/// One imported symbol within a module's registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedSymbol {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Registry entry for one imported module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub imports: Vec<ImportedSymbol>,
    /// Installed version of the module; empty string when resolution failed.
    pub version: String,
}

/// Module registry keyed by module name. A `BTreeMap` keeps serialization
/// deterministic.
pub type ModuleRegistry = BTreeMap<String, ModuleEntry>;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Full analysis report for one cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Top-level definitions in statement order.
    pub definitions: Vec<Definition>,
    /// Names the cell defines at top level.
    pub local: OrderedSet,
    /// Names the cell reads but never defines — presumed session state.
    pub remote: OrderedSet,
    /// Every imported name or alias, any scope.
    pub imports: OrderedSet,
    pub modules: ModuleRegistry,
    /// Defined names transitively traceable to a data reference.
    pub data_vars: OrderedSet,
    /// Literal URL/path values found, in source order.
    pub data_values: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
