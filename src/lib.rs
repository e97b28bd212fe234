//! cellscope — static dependency analyzer for notebook cells.
//!
//! Given one cell of Python source, builds a syntax tree and reports which
//! names the cell defines, which it expects from prior session state, what
//! it imports, and which defined names are transitively derived from literal
//! URL/path strings. See [`analyze`] for the one-call entry point.

pub mod analysis;
pub mod error;
pub mod logging;
pub mod ordered_set;
pub mod parser;
pub mod types;

pub use analysis::{analyze, Analyzer};
pub use error::{CellscopeError, Result};
pub use types::AnalysisReport;
