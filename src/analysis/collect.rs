//! Identifier collectors over syntax subtrees.
//!
//! Three flavors of the same walk, differing in which identifiers count:
//!
//! - [`free_vars`] — every identifier read from a subtree, regardless of
//!   role, skipping field labels (attribute names, keyword-argument names)
//!   and lambda parameter names.
//! - [`assignment_targets`] — only identifiers that bind a new name on the
//!   left of an assignment; subscript and attribute targets bind nothing.
//! - [`parameter_names`] / [`parameter_free_vars`] — formal parameter names
//!   of a signature, and separately the free variables of its default values
//!   and annotations.
//!
//! All walks are iterative with an explicit stack so collector depth never
//! tracks source nesting depth.

use tree_sitter::Node;

use crate::ordered_set::OrderedSet;

/// UTF-8 text of a node. The source always comes from a `&str`, so the
/// conversion cannot fail in practice.
pub(crate) fn node_text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

/// Materialize the named children of a node in source order.
pub(crate) fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .collect()
}

fn push_reversed<'t>(stack: &mut Vec<Node<'t>>, children: impl IntoIterator<Item = Node<'t>>) {
    let mut nodes: Vec<Node<'t>> = children.into_iter().collect();
    nodes.reverse();
    stack.extend(nodes);
}

// ---------------------------------------------------------------------------
// Free variables
// ---------------------------------------------------------------------------

/// Collect every identifier read in `node`'s subtree, in source order.
pub(crate) fn free_vars(node: Node<'_>, src: &[u8], out: &mut OrderedSet) {
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        match n.kind() {
            "identifier" => {
                out.insert(node_text(n, src));
            }
            // `a.b.c` reads only `a`; the attribute names are field labels.
            "attribute" => {
                if let Some(object) = n.child_by_field_name("object") {
                    stack.push(object);
                }
            }
            // `f(x=y)` reads `y`; the keyword `x` is a label.
            "keyword_argument" => {
                if let Some(value) = n.child_by_field_name("value") {
                    stack.push(value);
                }
            }
            // Lambda parameter names are bindings, not reads; their default
            // values still count.
            "lambda_parameters" => {
                let mut defaults = Vec::new();
                for child in named_children(n) {
                    if matches!(child.kind(), "default_parameter" | "typed_default_parameter") {
                        if let Some(value) = child.child_by_field_name("value") {
                            defaults.push(value);
                        }
                    }
                }
                push_reversed(&mut stack, defaults);
            }
            _ => push_reversed(&mut stack, named_children(n)),
        }
    }
}

// ---------------------------------------------------------------------------
// Assignment targets
// ---------------------------------------------------------------------------

/// Collect identifiers bound by an assignment target.
///
/// Descends through tuple/list destructuring patterns and splats only.
/// `a[i] = v` and `a.b = v` rebind an existing object, so they contribute
/// no target names.
pub(crate) fn assignment_targets(node: Node<'_>, src: &[u8], out: &mut OrderedSet) {
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        match n.kind() {
            "identifier" => {
                out.insert(node_text(n, src));
            }
            "pattern_list" | "tuple_pattern" | "list_pattern" | "list_splat_pattern" => {
                push_reversed(&mut stack, named_children(n));
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Collect the formal parameter names of a `parameters` node.
pub(crate) fn parameter_names(params: Node<'_>, src: &[u8], out: &mut OrderedSet) {
    for child in named_children(params) {
        match child.kind() {
            "identifier" | "list_splat_pattern" | "dictionary_splat_pattern" | "tuple_pattern" => {
                collect_param_identifiers(child, src, out);
            }
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = child.child_by_field_name("name") {
                    collect_param_identifiers(name, src, out);
                }
            }
            "typed_parameter" => {
                let ty = child.child_by_field_name("type");
                for grandchild in named_children(child) {
                    if ty.map_or(true, |t| t.id() != grandchild.id()) {
                        collect_param_identifiers(grandchild, src, out);
                    }
                }
            }
            _ => {} // separators, comments
        }
    }
}

fn collect_param_identifiers(node: Node<'_>, src: &[u8], out: &mut OrderedSet) {
    match node.kind() {
        "identifier" => {
            out.insert(node_text(node, src));
        }
        "list_splat_pattern" | "dictionary_splat_pattern" | "tuple_pattern" => {
            for child in named_children(node) {
                collect_param_identifiers(child, src, out);
            }
        }
        _ => {}
    }
}

/// Collect free variables of parameter default values and annotations.
///
/// These are evaluated in the enclosing scope at definition time, so they
/// seed the function's dependency set; the parameter names themselves do not.
pub(crate) fn parameter_free_vars(params: Node<'_>, src: &[u8], out: &mut OrderedSet) {
    for child in named_children(params) {
        match child.kind() {
            "default_parameter" => {
                if let Some(value) = child.child_by_field_name("value") {
                    free_vars(value, src, out);
                }
            }
            "typed_default_parameter" => {
                if let Some(ty) = child.child_by_field_name("type") {
                    free_vars(ty, src, out);
                }
                if let Some(value) = child.child_by_field_name("value") {
                    free_vars(value, src, out);
                }
            }
            "typed_parameter" => {
                if let Some(ty) = child.child_by_field_name("type") {
                    free_vars(ty, src, out);
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CellParser;

    fn first_statement(source: &str) -> (tree_sitter::Tree, String) {
        let tree = CellParser::new().parse(source).expect("parse");
        (tree, source.to_string())
    }

    fn free_of(source: &str) -> Vec<String> {
        let (tree, src) = first_statement(source);
        let mut out = OrderedSet::new();
        free_vars(tree.root_node(), src.as_bytes(), &mut out);
        out.into_vec()
    }

    #[test]
    fn free_vars_in_source_order_deduplicated() {
        assert_eq!(free_of("b + a + b"), ["b", "a"]);
    }

    #[test]
    fn attribute_reads_only_the_object() {
        assert_eq!(free_of("df.head(n)"), ["df", "n"]);
        assert_eq!(free_of("a.b.c"), ["a"]);
    }

    #[test]
    fn keyword_argument_name_is_not_a_read() {
        assert_eq!(free_of("fit(epochs=n)"), ["fit", "n"]);
    }

    #[test]
    fn subscript_reads_value_and_index() {
        assert_eq!(free_of("a[i]"), ["a", "i"]);
    }

    #[test]
    fn lambda_parameters_are_not_reads() {
        assert_eq!(free_of("lambda x: x + y"), ["x", "y"]);
        assert_eq!(free_of("lambda x: 1"), Vec::<String>::new());
        assert_eq!(free_of("lambda x=d: x"), ["d", "x"]);
    }

    fn targets_of(source: &str) -> Vec<String> {
        let (tree, src) = first_statement(source);
        let stmt = tree.root_node().named_child(0).unwrap();
        let assign = stmt.named_child(0).unwrap();
        let left = assign.child_by_field_name("left").unwrap();
        let mut out = OrderedSet::new();
        assignment_targets(left, src.as_bytes(), &mut out);
        out.into_vec()
    }

    #[test]
    fn targets_descend_patterns_only() {
        assert_eq!(targets_of("x = 1"), ["x"]);
        assert_eq!(targets_of("a, b = 1, 2"), ["a", "b"]);
        assert_eq!(targets_of("a, (b, c) = v"), ["a", "b", "c"]);
        assert_eq!(targets_of("a, *rest = v"), ["a", "rest"]);
    }

    #[test]
    fn subscript_and_attribute_targets_bind_nothing() {
        assert_eq!(targets_of("a[i] = 1"), Vec::<String>::new());
        assert_eq!(targets_of("a.b = 1"), Vec::<String>::new());
    }

    fn params_of(source: &str) -> (Vec<String>, Vec<String>) {
        let (tree, src) = first_statement(source);
        let def = tree.root_node().named_child(0).unwrap();
        let params = def.child_by_field_name("parameters").unwrap();
        let mut names = OrderedSet::new();
        let mut seed = OrderedSet::new();
        parameter_names(params, src.as_bytes(), &mut names);
        parameter_free_vars(params, src.as_bytes(), &mut seed);
        (names.into_vec(), seed.into_vec())
    }

    #[test]
    fn parameter_names_ignore_defaults_and_annotations() {
        let (names, seed) = params_of("def f(a, b=c, *args, d: T = e, **kw):\n    pass\n");
        assert_eq!(names, ["a", "b", "args", "d", "kw"]);
        assert_eq!(seed, ["c", "T", "e"]);
    }
}
