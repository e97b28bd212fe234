//! Data-reference detection: string literals that name URLs or existing
//! filesystem paths.
//!
//! Runs as an independent pass over the same tree the scope walker sees.
//! Matches are recorded with their enclosing line span so the correlator can
//! attribute them to the definitions that contain them.

use std::fs;
use std::sync::OnceLock;

use regex::Regex;
use tree_sitter::Node;

use crate::analysis::collect::{named_children, node_text};

/// One literal URL/path found in the cell, with its enclosing line span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRef {
    pub value: String,
    pub start_line: u32,
    pub end_line: u32,
}

/// Loose URL shape: a scheme or a `www.`/credential prefix followed by a
/// host, optionally a path/query/fragment.
fn url_pattern() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| {
        Regex::new(
            r"(([A-Za-z]{3,9}:(?://)?(?:[-;:&=+$,\w]+@)?[A-Za-z0-9.-]+|(?:www\.|[-;:&=+$,\w]+@)[A-Za-z0-9.-]+)((?:/[+~%/.\w_-]*)?\??(?:[-+=&;%@.\w_]*)#?(?:\w*))?)",
        )
        .expect("url pattern compiles")
    })
}

fn is_url_like(value: &str) -> bool {
    url_pattern().is_match(value)
}

/// Existing-path check; I/O errors (permissions, invalid names) count as
/// "not a path".
fn is_existing_path(value: &str) -> bool {
    fs::metadata(value)
        .map(|m| m.is_dir() || m.is_file())
        .unwrap_or(false)
}

/// The literal value of a plain string node, or `None` when the string has
/// interpolations and must be recursed into instead.
fn plain_string_value(node: Node<'_>, src: &[u8]) -> Option<String> {
    let children = named_children(node);
    if children.iter().any(|c| c.kind() == "interpolation") {
        return None;
    }
    let mut value = String::new();
    for child in children {
        if matches!(child.kind(), "string_content" | "escape_sequence") {
            value.push_str(node_text(child, src));
        }
    }
    Some(value)
}

/// Walk the tree collecting every string literal that looks like a URL or
/// names an existing file/directory, in source order.
pub(crate) fn detect_data_refs(root: Node<'_>, src: &[u8]) -> Vec<DataRef> {
    let mut refs = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.kind() == "string" {
            match plain_string_value(node, src) {
                Some(value) => {
                    if is_url_like(&value) || is_existing_path(&value) {
                        refs.push(DataRef {
                            value,
                            start_line: node.start_position().row as u32 + 1,
                            end_line: node.end_position().row as u32 + 1,
                        });
                    }
                }
                // Interpolated string: test the embedded expressions instead.
                None => push_children(&mut stack, node),
            }
            continue;
        }
        push_children(&mut stack, node);
    }
    refs
}

fn push_children<'t>(stack: &mut Vec<Node<'t>>, node: Node<'t>) {
    let mut children = named_children(node);
    children.reverse();
    stack.extend(children);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
