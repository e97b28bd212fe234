//! Tree-sitter parser wrapper and the bounded salvage reparse loop.
//!
//! Cells under analysis are frequently mid-edit, so a stray invalid line must
//! not cost the whole report. Tree-sitter surfaces syntax errors as
//! ERROR/MISSING nodes inside the tree; [`parse_salvaged`] strips the source
//! lines covered by the first such node and reparses, up to
//! [`SALVAGE_RETRY_LIMIT`] attempts, yielding a clean tree for the valid
//! remainder.
//!
//! # Design decisions
//!
//! - **No stored state.** Tree-sitter's `Parser` is `!Send + !Sync`, so a
//!   fresh parser is created per call rather than wrestling with
//!   thread-safety wrappers. `Parser::new()` is a single allocation and
//!   `set_language` is a pointer swap.
//! - **Whole-line stripping.** The offending fragment is identified as the
//!   full source line(s) spanned by the error node, mirroring how an
//!   interpreter reports the offending line of a syntax error.

use tracing::debug;

use crate::error::{CellscopeError, Result};

/// Ceiling on strip-and-reparse attempts before giving up on a cell.
pub const SALVAGE_RETRY_LIMIT: usize = 1000;

/// Thin wrapper around tree-sitter parsing with the Python grammar.
///
/// Zero-sized; create with [`CellParser::new`] and reuse freely.
pub struct CellParser;

impl CellParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse `source` and return the concrete syntax tree.
    ///
    /// The tree may contain ERROR/MISSING nodes; callers that need a clean
    /// tree go through [`parse_salvaged`].
    pub fn parse(&self, source: &str) -> Result<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| CellscopeError::Parse(format!("language version mismatch: {e}")))?;

        parser.parse(source, None).ok_or_else(|| {
            CellscopeError::Parse("tree-sitter returned None (timeout or cancellation)".into())
        })
    }
}

impl Default for CellParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `source`, stripping unparsable fragments until the tree is clean.
///
/// Returns the tree together with the (possibly reduced) source it was built
/// from, so spans in the tree match the returned text. Returns `None` when
/// the retry ceiling is hit or stripping stops making progress — the caller
/// then reports whatever it has collected (possibly nothing).
pub fn parse_salvaged(source: &str) -> Option<(tree_sitter::Tree, String)> {
    let parser = CellParser::new();
    let mut src = source.to_string();

    for attempt in 0..=SALVAGE_RETRY_LIMIT {
        let tree = parser.parse(&src).ok()?;
        let root = tree.root_node();

        let Some(err) = first_error_node(root) else {
            return Some((tree, src));
        };

        let start = err.start_position().row;
        let end = err.end_position().row;
        let stripped = strip_lines(&src, start, end);
        if stripped == src {
            debug!(attempt, "salvage made no progress, giving up");
            return None;
        }
        debug!(
            attempt,
            lines = format_args!("{}..={}", start + 1, end + 1),
            "stripping unparsable fragment"
        );
        src = stripped;
    }

    debug!("salvage retry ceiling reached");
    None
}

/// Find the first ERROR or MISSING node in document order.
fn first_error_node(root: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Reverse push so the earliest offending subtree is visited first.
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                if child.has_error() || child.is_error() || child.is_missing() {
                    stack.push(child);
                }
            }
        }
    }
    None
}

/// Remove lines `start..=end` (0-based) from `source`.
fn strip_lines(source: &str, start: usize, end: usize) -> String {
    source
        .lines()
        .enumerate()
        .filter(|(i, _)| *i < start || *i > end)
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
