//! Cell analysis: parse, walk scopes, detect data references, correlate.
//!
//! [`Analyzer::analyze`] is a pure function of its input text. It never
//! fails: syntax errors are salvaged by the parser's strip-and-reparse loop,
//! and a walk aborted by the depth guard still yields the partial report
//! collected up to that point.

pub mod collect;
pub mod correlate;
pub mod datarefs;
pub mod modules;
pub mod scope;

use tracing::warn;

use crate::analysis::correlate::correlate;
use crate::analysis::datarefs::detect_data_refs;
use crate::analysis::modules::{InterpreterMetadata, VersionLookup};
use crate::analysis::scope::ScopeWalker;
use crate::ordered_set::OrderedSet;
use crate::parser::parse_salvaged;
use crate::types::AnalysisReport;

/// Analyzer for notebook cells.
///
/// Holds only the version-lookup strategy; every analysis call builds its
/// context structures fresh, so one analyzer can serve concurrent callers.
pub struct Analyzer {
    versions: Box<dyn VersionLookup>,
}

impl Analyzer {
    /// Analyzer with interpreter-backed module version resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::with_version_lookup(InterpreterMetadata)
    }

    /// Analyzer with a custom version-lookup strategy.
    pub fn with_version_lookup(versions: impl VersionLookup + 'static) -> Self {
        Self {
            versions: Box::new(versions),
        }
    }

    /// Analyze one cell and return the full report.
    ///
    /// Unsalvageable input yields an empty report rather than an error; a
    /// depth-guard abort yields whatever was collected before the abort.
    pub fn analyze(&self, source: &str) -> AnalysisReport {
        let Some((tree, src)) = parse_salvaged(source) else {
            return AnalysisReport::default();
        };
        let bytes = src.as_bytes();

        let mut walker = ScopeWalker::new(bytes, self.versions.as_ref());
        let mut definitions = Vec::new();
        let mut local = OrderedSet::new();
        let mut remote = OrderedSet::new();
        if let Err(e) = walker.walk(tree.root_node(), &mut definitions, &mut local, &mut remote) {
            warn!("analysis aborted early, returning partial report: {e}");
        }

        // Imported names count as reads during the walk so they can appear in
        // dependency lists, but the report's remote set excludes them.
        let remote: OrderedSet = remote
            .into_vec()
            .into_iter()
            .filter(|name| !walker.imports.contains(name))
            .collect();

        let refs = detect_data_refs(tree.root_node(), bytes);
        let mut data_vars = OrderedSet::new();
        correlate(&definitions, &refs, &mut data_vars);

        AnalysisReport {
            definitions,
            local,
            remote,
            imports: walker.imports,
            modules: walker.modules,
            data_vars,
            data_values: refs.into_iter().map(|r| r.value).collect(),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze one cell with the default analyzer configuration.
#[must_use]
pub fn analyze(source: &str) -> AnalysisReport {
    Analyzer::new().analyze(source)
}
