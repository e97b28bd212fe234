//! The scope walker: classifies statements into [`Definition`] records while
//! threading local, remote, and import name sets.
//!
//! Scoping rules differ per construct. Function and class bodies isolate
//! their names — whatever a body binds cannot be referenced by later cell
//! statements, so only the *remote* names discovered inside are promoted
//! outward. Loop and conditional bodies share the enclosing scope, but each
//! branch is walked with its own cloned local set and fresh remote
//! accumulator so one branch's bindings never leak into the sibling branch.
//!
//! Dispatch goes through [`StmtKind`], a sealed enumeration over the node
//! kinds the walker distinguishes, with a generic recursion arm for
//! everything else.

use tree_sitter::Node;

use crate::analysis::collect::{
    assignment_targets, free_vars, named_children, node_text, parameter_free_vars, parameter_names,
};
use crate::analysis::modules::{record_import, record_import_from, VersionLookup};
use crate::error::{CellscopeError, Result};
use crate::ordered_set::OrderedSet;
use crate::types::{Definition, DefinitionKind, ModuleRegistry, Span};

/// Recursion ceiling for the statement walk. Exceeding it aborts the walk;
/// the analyzer then reports whatever was collected so far.
const MAX_WALK_DEPTH: usize = 1024;

/// Statement/expression kinds the walker dispatches on.
///
/// Everything else falls through to [`StmtKind::Other`] and is recursed
/// generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StmtKind {
    FunctionDef,
    ClassDef,
    Decorated,
    For,
    While,
    If,
    ConditionalExpr,
    Import,
    ImportFrom,
    ExpressionStatement,
    /// Compound statements where only the `body` field is walked: `with`,
    /// `try`, `match`. Exception handlers and `with` items are invisible to
    /// the analysis, matching the statement-level tracking granularity.
    BodyOnly,
    /// Module root and blocks: all children walked in the same context.
    Sequence,
    Identifier,
    Attribute,
    KeywordArgument,
    Lambda,
    /// `global`/`nonlocal` declare but neither read nor bind values.
    Skip,
    Other,
}

impl StmtKind {
    fn classify(kind: &str) -> Self {
        match kind {
            "function_definition" => Self::FunctionDef,
            "class_definition" => Self::ClassDef,
            "decorated_definition" => Self::Decorated,
            "for_statement" => Self::For,
            "while_statement" => Self::While,
            "if_statement" => Self::If,
            "conditional_expression" => Self::ConditionalExpr,
            "import_statement" => Self::Import,
            "import_from_statement" | "future_import_statement" => Self::ImportFrom,
            "expression_statement" => Self::ExpressionStatement,
            "with_statement" | "try_statement" | "match_statement" => Self::BodyOnly,
            "module" | "block" => Self::Sequence,
            "identifier" => Self::Identifier,
            "attribute" => Self::Attribute,
            "keyword_argument" => Self::KeywordArgument,
            "lambda" => Self::Lambda,
            "global_statement" | "nonlocal_statement" => Self::Skip,
            _ => Self::Other,
        }
    }
}

fn span_of(node: Node<'_>) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span {
        start_line: start.row as u32 + 1,
        start_col: start.column as u32,
        end_line: end.row as u32 + 1,
        end_col: end.column as u32,
    }
}

/// Bind `name` into `locals` unless it is already classified remote.
///
/// A name read before the cell binds it genuinely came from outside; first
/// classification wins, keeping `locals` and `remotes` disjoint.
fn bind_local(name: &str, locals: &mut OrderedSet, remotes: &OrderedSet) {
    if !remotes.contains(name) {
        locals.insert(name);
    }
}

/// Promote names bound inside a branch into the enclosing locals.
///
/// Runs after every branch of a compound statement has been walked, so a
/// later statement sees the bindings; remote-classified names keep their
/// classification.
fn promote_bound(branch_locals: &OrderedSet, locals: &mut OrderedSet, remotes: &OrderedSet) {
    for name in branch_locals.iter() {
        if !locals.contains(name) && !remotes.contains(name) {
            locals.insert(name.clone());
        }
    }
}

/// Walks a syntax tree, producing definitions and the four context sets.
///
/// `imports` and `modules` are walker-global. Imported names count as reads
/// inside a scope, so they appear in dependency lists; they are filtered out
/// whenever remotes are promoted into an enclosing scope, and again from the
/// final report. Locals, remotes, and definition lists are threaded per
/// scope and per branch by the caller.
pub(crate) struct ScopeWalker<'a> {
    src: &'a [u8],
    pub imports: OrderedSet,
    pub modules: ModuleRegistry,
    versions: &'a dyn VersionLookup,
    depth: usize,
}

impl<'a> ScopeWalker<'a> {
    pub(crate) fn new(src: &'a [u8], versions: &'a dyn VersionLookup) -> Self {
        Self {
            src,
            imports: OrderedSet::new(),
            modules: ModuleRegistry::new(),
            versions,
            depth: 0,
        }
    }

    /// Promote every name in `vars` that resolves nowhere into `remotes`.
    fn promote_unresolved(&self, vars: &OrderedSet, locals: &OrderedSet, remotes: &mut OrderedSet) {
        for var in vars.iter() {
            if !locals.contains(var) && !self.imports.contains(var) {
                remotes.insert(var.clone());
            }
        }
    }

    /// Walk one node, dispatching on its classified kind.
    pub(crate) fn walk(
        &mut self,
        node: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_WALK_DEPTH {
            self.depth -= 1;
            return Err(CellscopeError::DepthLimit(MAX_WALK_DEPTH));
        }
        let result = self.walk_inner(node, defs, locals, remotes);
        self.depth -= 1;
        result
    }

    fn walk_inner(
        &mut self,
        node: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        match StmtKind::classify(node.kind()) {
            StmtKind::FunctionDef => self.handle_function(node, defs, locals, remotes),
            StmtKind::ClassDef => self.handle_class(node, &[], defs, locals, remotes),
            StmtKind::Decorated => self.handle_decorated(node, defs, locals, remotes),
            StmtKind::For => self.handle_for(node, defs, locals, remotes),
            StmtKind::While => {
                let alts = clauses_of(node);
                self.handle_branching(
                    DefinitionKind::Loop,
                    span_of(node),
                    node.child_by_field_name("condition"),
                    node.child_by_field_name("body"),
                    alts,
                    defs,
                    locals,
                    remotes,
                )
            }
            StmtKind::If => {
                let alts = clauses_of(node);
                self.handle_branching(
                    DefinitionKind::Condition,
                    span_of(node),
                    node.child_by_field_name("condition"),
                    node.child_by_field_name("consequence"),
                    alts,
                    defs,
                    locals,
                    remotes,
                )
            }
            StmtKind::ConditionalExpr => {
                // `a if c else b`: named children are [consequence, test, alternative].
                let children = named_children(node);
                self.handle_branching(
                    DefinitionKind::Condition,
                    span_of(node),
                    children.get(1).copied(),
                    children.first().copied(),
                    children.get(2).copied().into_iter().collect(),
                    defs,
                    locals,
                    remotes,
                )
            }
            StmtKind::Import => {
                record_import(node, self.src, &mut self.imports, &mut self.modules, self.versions);
                Ok(())
            }
            StmtKind::ImportFrom => {
                record_import_from(node, self.src, &mut self.imports, &mut self.modules, self.versions);
                Ok(())
            }
            StmtKind::ExpressionStatement => {
                self.handle_expression_statement(node, defs, locals, remotes)
            }
            StmtKind::BodyOnly => {
                if let Some(body) = node.child_by_field_name("body") {
                    self.walk(body, defs, locals, remotes)?;
                }
                Ok(())
            }
            StmtKind::Sequence => {
                for child in named_children(node) {
                    self.walk(child, defs, locals, remotes)?;
                }
                Ok(())
            }
            StmtKind::Identifier => {
                let name = node_text(node, self.src);
                if !locals.contains(name) && !remotes.contains(name) {
                    remotes.insert(name);
                }
                Ok(())
            }
            StmtKind::Attribute => {
                if let Some(object) = node.child_by_field_name("object") {
                    self.walk(object, defs, locals, remotes)?;
                }
                Ok(())
            }
            StmtKind::KeywordArgument => {
                if let Some(value) = node.child_by_field_name("value") {
                    self.walk(value, defs, locals, remotes)?;
                }
                Ok(())
            }
            StmtKind::Lambda => {
                if let Some(params) = node.child_by_field_name("parameters") {
                    let mut seed = OrderedSet::new();
                    parameter_free_vars(params, self.src, &mut seed);
                    self.promote_unresolved(&seed, locals, remotes);
                }
                if let Some(body) = node.child_by_field_name("body") {
                    self.walk(body, defs, locals, remotes)?;
                }
                Ok(())
            }
            StmtKind::Skip => Ok(()),
            StmtKind::Other => {
                for child in named_children(node) {
                    self.walk(child, defs, locals, remotes)?;
                }
                Ok(())
            }
        }
    }

    // -- Function / class ---------------------------------------------------

    fn handle_function(
        &mut self,
        node: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let Some(name_node) = node.child_by_field_name("name") else {
            return Ok(());
        };
        let name = node_text(name_node, self.src).to_string();
        bind_local(&name, locals, remotes);

        // Dependency seed: free variables of defaults and annotations,
        // evaluated in the enclosing scope at definition time.
        let mut def_vars = OrderedSet::new();
        // Body scope starts from the enclosing locals plus the parameters.
        let mut def_args = locals.clone();
        if let Some(params) = node.child_by_field_name("parameters") {
            parameter_free_vars(params, self.src, &mut def_vars);
            parameter_names(params, self.src, &mut def_args);
        }

        // Names the body binds are invisible outside this one definition, so
        // the inner definition list is discarded and inner locals stay put.
        let mut inner_defs = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            self.walk(body, &mut inner_defs, &mut def_args, &mut def_vars)?;
        }

        self.promote_unresolved(&def_vars, locals, remotes);
        defs.push(Definition {
            name: Some(name),
            kind: DefinitionKind::Function,
            dependencies: def_vars.into_vec(),
            span: span_of(node),
            body: Vec::new(),
            orelse: Vec::new(),
        });
        Ok(())
    }

    fn handle_class(
        &mut self,
        node: Node<'_>,
        decorators: &[Node<'_>],
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let Some(name_node) = node.child_by_field_name("name") else {
            return Ok(());
        };
        let name = node_text(name_node, self.src).to_string();
        bind_local(&name, locals, remotes);

        // Seed: base classes and keyword arguments, then decorators.
        let mut def_vars = OrderedSet::new();
        if let Some(superclasses) = node.child_by_field_name("superclasses") {
            free_vars(superclasses, self.src, &mut def_vars);
        }
        for decorator in decorators {
            free_vars(*decorator, self.src, &mut def_vars);
        }

        let mut def_args = locals.clone();
        let mut inner_defs = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            self.walk(body, &mut inner_defs, &mut def_args, &mut def_vars)?;
        }

        self.promote_unresolved(&def_vars, locals, remotes);
        defs.push(Definition {
            name: Some(name),
            kind: DefinitionKind::Class,
            dependencies: def_vars.into_vec(),
            span: span_of(node),
            body: Vec::new(),
            orelse: Vec::new(),
        });
        Ok(())
    }

    fn handle_decorated(
        &mut self,
        node: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let decorators: Vec<Node<'_>> = named_children(node)
            .into_iter()
            .filter(|n| n.kind() == "decorator")
            .filter_map(|n| n.named_child(0))
            .collect();
        let Some(definition) = node.child_by_field_name("definition") else {
            return Ok(());
        };
        match definition.kind() {
            // Function decorators are not scanned: only the signature seeds
            // the dependency set.
            "function_definition" => self.handle_function(definition, defs, locals, remotes),
            "class_definition" => self.handle_class(definition, &decorators, defs, locals, remotes),
            _ => self.walk(definition, defs, locals, remotes),
        }
    }

    // -- Loops / conditionals -----------------------------------------------

    fn handle_for(
        &mut self,
        node: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        // Targets are collected on top of a copy of the current locals so
        // existing names can be re-bound, but they must not be visible while
        // the iterable is analyzed.
        let mut vars_target = locals.clone();
        if let Some(left) = node.child_by_field_name("left") {
            assignment_targets(left, self.src, &mut vars_target);
        }

        let mut vars_iter = OrderedSet::new();
        if let Some(right) = node.child_by_field_name("right") {
            free_vars(right, self.src, &mut vars_iter);
        }
        self.promote_unresolved(&vars_iter, locals, remotes);

        // Each branch gets its own copy of the post-target local set and its
        // own remote accumulator: execution of neither branch is guaranteed.
        let (body_defs, body_locals, body_remotes) =
            self.walk_branch(node.child_by_field_name("body"), &vars_target)?;
        let mut orelse_defs = Vec::new();
        let mut orelse_remotes = OrderedSet::new();
        let mut orelse_locals = vars_target.clone();
        self.walk_clauses(
            &clauses_of(node),
            &mut orelse_defs,
            &mut orelse_locals,
            &mut orelse_remotes,
        )?;

        self.promote_unresolved(&body_remotes, locals, remotes);
        self.promote_unresolved(&orelse_remotes, locals, remotes);

        // Targets and branch-bound names become enclosing locals only after
        // both branches; both branch local sets were seeded with the targets.
        promote_bound(&body_locals, locals, remotes);
        promote_bound(&orelse_locals, locals, remotes);

        let mut dependencies = vars_iter;
        dependencies.extend_from(&body_remotes);
        dependencies.extend_from(&orelse_remotes);

        defs.push(Definition {
            name: None,
            kind: DefinitionKind::Loop,
            dependencies: dependencies.into_vec(),
            span: span_of(node),
            body: body_defs,
            orelse: orelse_defs,
        });
        Ok(())
    }

    /// Shared shape of `while`, `if`/`elif`, and conditional expressions:
    /// a test, a body branch, and zero or more alternative clauses.
    #[allow(clippy::too_many_arguments)]
    fn handle_branching(
        &mut self,
        kind: DefinitionKind,
        span: Span,
        test: Option<Node<'_>>,
        body: Option<Node<'_>>,
        alternatives: Vec<Node<'_>>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let mut test_vars = OrderedSet::new();
        if let Some(test) = test {
            free_vars(test, self.src, &mut test_vars);
        }
        self.promote_unresolved(&test_vars, locals, remotes);

        let (body_defs, body_locals, body_remotes) = self.walk_branch(body, locals)?;
        let mut orelse_defs = Vec::new();
        let mut orelse_remotes = OrderedSet::new();
        let mut orelse_locals = locals.clone();
        self.walk_clauses(
            &alternatives,
            &mut orelse_defs,
            &mut orelse_locals,
            &mut orelse_remotes,
        )?;

        self.promote_unresolved(&body_remotes, locals, remotes);
        self.promote_unresolved(&orelse_remotes, locals, remotes);

        // Names bound in either branch become enclosing locals once both
        // branches have been walked; sibling branches still cannot see each
        // other's bindings while they are walked.
        promote_bound(&body_locals, locals, remotes);
        promote_bound(&orelse_locals, locals, remotes);

        let mut dependencies = test_vars;
        dependencies.extend_from(&body_remotes);
        dependencies.extend_from(&orelse_remotes);

        defs.push(Definition {
            name: None,
            kind,
            dependencies: dependencies.into_vec(),
            span,
            body: body_defs,
            orelse: orelse_defs,
        });
        Ok(())
    }

    /// Walk a branch body in an isolated context seeded from `locals_seed`.
    fn walk_branch(
        &mut self,
        body: Option<Node<'_>>,
        locals_seed: &OrderedSet,
    ) -> Result<(Vec<Definition>, OrderedSet, OrderedSet)> {
        let mut defs = Vec::new();
        let mut branch_remotes = OrderedSet::new();
        let mut branch_locals = locals_seed.clone();
        if let Some(body) = body {
            self.walk(body, &mut defs, &mut branch_locals, &mut branch_remotes)?;
        }
        Ok((defs, branch_locals, branch_remotes))
    }

    /// Walk a flat list of `elif`/`else` clauses into the orelse context.
    ///
    /// An `elif` consumes the remaining clauses as its own alternatives,
    /// becoming a nested condition definition — the flat clause list folds
    /// back into the nested else-if chain it denotes.
    fn walk_clauses(
        &mut self,
        clauses: &[Node<'_>],
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let Some((first, rest)) = clauses.split_first() else {
            return Ok(());
        };
        match first.kind() {
            "elif_clause" => {
                // The nested condition owns every clause it consumes, so its
                // span runs through the last of them and keeps containing the
                // definitions that land in its orelse.
                let mut span = span_of(*first);
                if let Some(last) = rest.last() {
                    let last_span = span_of(*last);
                    span.end_line = last_span.end_line;
                    span.end_col = last_span.end_col;
                }
                self.handle_branching(
                    DefinitionKind::Condition,
                    span,
                    first.child_by_field_name("condition"),
                    first.child_by_field_name("consequence"),
                    rest.to_vec(),
                    defs,
                    locals,
                    remotes,
                )
            }
            "else_clause" => {
                if let Some(body) = first.child_by_field_name("body") {
                    self.walk(body, defs, locals, remotes)?;
                }
                Ok(())
            }
            // Conditional expressions pass their bare alternative expression.
            _ => self.walk(*first, defs, locals, remotes),
        }
    }

    // -- Assignments / calls ------------------------------------------------

    fn handle_expression_statement(
        &mut self,
        node: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let Some(child) = node.named_child(0) else {
            return Ok(());
        };
        match child.kind() {
            "assignment" => self.handle_assignment(node, child, defs, locals, remotes),
            "augmented_assignment" => self.handle_augmented(node, child, defs, locals, remotes),
            "call" => self.handle_call_statement(node, child, defs, locals, remotes),
            _ => self.walk(child, defs, locals, remotes),
        }
    }

    fn handle_assignment(
        &mut self,
        stmt: Node<'_>,
        assignment: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        // Unwrap `a = b = expr` chains into targets plus the final value.
        let mut target_nodes = Vec::new();
        let value;
        let mut current = assignment;
        loop {
            if let Some(left) = current.child_by_field_name("left") {
                target_nodes.push(left);
            }
            match current.child_by_field_name("right") {
                Some(right) if right.kind() == "assignment" => current = right,
                other => {
                    value = other;
                    break;
                }
            }
        }

        let destructuring = target_nodes.first().is_some_and(|t| {
            matches!(t.kind(), "pattern_list" | "tuple_pattern" | "list_pattern")
        });

        let mut found = OrderedSet::new();
        for target in &target_nodes {
            assignment_targets(*target, self.src, &mut found);
        }

        if destructuring {
            // Targets bind before dependencies resolve, so `a, b = b, a`
            // reads its own bindings rather than session state.
            for name in found.iter() {
                bind_local(name, locals, remotes);
            }

            let dep_sets = self.destructured_dependencies(value, found.len());
            for (i, name) in found.iter().enumerate() {
                let deps = dep_sets.get(i).cloned().unwrap_or_default();
                for dep in deps.iter() {
                    if !locals.contains(dep) && !self.imports.contains(dep) {
                        remotes.insert(dep.clone());
                    }
                }
                defs.push(Definition {
                    name: Some(name.clone()),
                    kind: DefinitionKind::Assign,
                    dependencies: deps,
                    span: span_of(stmt),
                    body: Vec::new(),
                    orelse: Vec::new(),
                });
            }
        } else {
            // Every target of a plain (possibly chained) assignment depends
            // on the free variables of the whole value, resolved against the
            // scope as it stood before the assignment.
            let mut deps = OrderedSet::new();
            if let Some(value) = value {
                free_vars(value, self.src, &mut deps);
            }
            self.promote_unresolved(&deps, locals, remotes);

            let deps = deps.into_vec();
            for name in found.iter() {
                bind_local(name, locals, remotes);
                defs.push(Definition {
                    name: Some(name.clone()),
                    kind: DefinitionKind::Assign,
                    dependencies: deps.clone(),
                    span: span_of(stmt),
                    body: Vec::new(),
                    orelse: Vec::new(),
                });
            }
        }
        Ok(())
    }

    /// Per-target dependency sets for a destructuring assignment.
    ///
    /// A literal sequence value pairs element-wise with the targets; any
    /// other value fans the same dependency set out to every target. Targets
    /// beyond the last value element get an empty set — the statement would
    /// fail at runtime, but it is still statically analyzable.
    fn destructured_dependencies(
        &self,
        value: Option<Node<'_>>,
        target_count: usize,
    ) -> Vec<Vec<String>> {
        let Some(value) = value else {
            return Vec::new();
        };
        if matches!(value.kind(), "expression_list" | "tuple" | "list") {
            named_children(value)
                .into_iter()
                .map(|element| {
                    let mut deps = OrderedSet::new();
                    free_vars(element, self.src, &mut deps);
                    deps.into_vec()
                })
                .collect()
        } else {
            let mut deps = OrderedSet::new();
            free_vars(value, self.src, &mut deps);
            vec![deps.into_vec(); target_count]
        }
    }

    fn handle_augmented(
        &mut self,
        stmt: Node<'_>,
        assignment: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let mut found = OrderedSet::new();
        if let Some(left) = assignment.child_by_field_name("left") {
            assignment_targets(left, self.src, &mut found);
        }
        let mut deps = OrderedSet::new();
        if let Some(right) = assignment.child_by_field_name("right") {
            free_vars(right, self.src, &mut deps);
        }
        self.promote_unresolved(&deps, locals, remotes);

        let deps = deps.into_vec();
        for name in found.iter() {
            bind_local(name, locals, remotes);
            defs.push(Definition {
                name: Some(name.clone()),
                kind: DefinitionKind::Assign,
                dependencies: deps.clone(),
                span: span_of(stmt),
                body: Vec::new(),
                orelse: Vec::new(),
            });
        }
        Ok(())
    }

    /// A bare call statement (e.g. an in-place model fit). The call's free
    /// variables are recovered in an isolated empty context; the first one
    /// names the definition and the rest become its dependencies. The
    /// first-variable naming rule is a convention carried over from the
    /// report consumers, not a semantic claim.
    fn handle_call_statement(
        &mut self,
        stmt: Node<'_>,
        call: Node<'_>,
        defs: &mut Vec<Definition>,
        locals: &mut OrderedSet,
        remotes: &mut OrderedSet,
    ) -> Result<()> {
        let mut scratch_defs = Vec::new();
        let mut scratch_locals = OrderedSet::new();
        let mut expr_vars = OrderedSet::new();
        self.walk(call, &mut scratch_defs, &mut scratch_locals, &mut expr_vars)?;

        let names = expr_vars.into_vec();
        let Some((first, rest)) = names.split_first() else {
            return Ok(());
        };
        for var in &names {
            if !locals.contains(var) && !self.imports.contains(var) {
                remotes.insert(var.clone());
            }
        }
        defs.push(Definition {
            name: Some(first.clone()),
            kind: DefinitionKind::Call,
            dependencies: rest.to_vec(),
            span: span_of(stmt),
            body: Vec::new(),
            orelse: Vec::new(),
        });
        Ok(())
    }
}

/// Collect the `elif`/`else` clause children of a compound statement.
fn clauses_of<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    named_children(node)
        .into_iter()
        .filter(|n| matches!(n.kind(), "elif_clause" | "else_clause"))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
