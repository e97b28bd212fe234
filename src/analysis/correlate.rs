//! Definition/data correlation: decides which defined names are data
//! variables.
//!
//! Two tagging rules, applied to a fixpoint:
//!
//! 1. **Containment** — a definition whose span lies inside a data
//!    reference's line span was built directly from that literal.
//! 2. **Propagation** — a definition depending on an already-tagged name is
//!    itself data-derived, however many assignment hops separate it from the
//!    literal.
//!
//! Nested `body`/`orelse` definition lists are visited depth-first.

use crate::analysis::datarefs::DataRef;
use crate::ordered_set::OrderedSet;
use crate::types::Definition;

/// Tag every data variable reachable from `refs` through `definitions`.
pub(crate) fn correlate(definitions: &[Definition], refs: &[DataRef], data_vars: &mut OrderedSet) {
    // Each pass can unlock further propagation; the tag set only grows, so
    // this terminates within one pass per definition in the worst case.
    while tag_pass(definitions, refs, data_vars) {}
}

fn tag_pass(definitions: &[Definition], refs: &[DataRef], data_vars: &mut OrderedSet) -> bool {
    let mut changed = false;
    for definition in definitions {
        if let Some(name) = &definition.name {
            if !data_vars.contains(name) {
                let contained = refs.iter().any(|r| {
                    r.start_line <= definition.span.start_line
                        && r.end_line >= definition.span.end_line
                });
                let derived = definition
                    .dependencies
                    .iter()
                    .any(|dep| data_vars.contains(dep));
                if contained || derived {
                    data_vars.insert(name.clone());
                    changed = true;
                }
            }
        }
        changed |= tag_pass(&definition.body, refs, data_vars);
        changed |= tag_pass(&definition.orelse, refs, data_vars);
    }
    changed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DefinitionKind, Span};

    fn assign(name: &str, deps: &[&str], line: u32) -> Definition {
        Definition {
            name: Some(name.to_string()),
            kind: DefinitionKind::Assign,
            dependencies: deps.iter().map(|s| s.to_string()).collect(),
            span: Span {
                start_line: line,
                start_col: 0,
                end_line: line,
                end_col: 10,
            },
            body: Vec::new(),
            orelse: Vec::new(),
        }
    }

    fn data_ref(line: u32) -> DataRef {
        DataRef {
            value: "/data/train.csv".to_string(),
            start_line: line,
            end_line: line,
        }
    }

    #[test]
    fn containment_tags_the_owning_definition() {
        let defs = vec![assign("path", &[], 1), assign("other", &[], 2)];
        let mut tagged = OrderedSet::new();
        correlate(&defs, &[data_ref(1)], &mut tagged);
        assert_eq!(tagged.as_slice(), ["path"]);
    }

    #[test]
    fn propagation_follows_dependency_chains() {
        let defs = vec![
            assign("path", &[], 1),
            assign("raw", &["path"], 2),
            assign("clean", &["raw"], 3),
            assign("model", &["clean"], 4),
        ];
        let mut tagged = OrderedSet::new();
        correlate(&defs, &[data_ref(1)], &mut tagged);
        for name in ["path", "raw", "clean", "model"] {
            assert!(tagged.contains(name), "{name} should be tagged");
        }
    }

    #[test]
    fn propagation_works_against_definition_order() {
        // The chain appears before the literal's owner, so one pass cannot
        // finish the job.
        let defs = vec![
            assign("clean", &["raw"], 1),
            assign("raw", &["path"], 2),
            assign("path", &[], 3),
        ];
        let mut tagged = OrderedSet::new();
        correlate(&defs, &[data_ref(3)], &mut tagged);
        for name in ["path", "raw", "clean"] {
            assert!(tagged.contains(name), "{name} should be tagged");
        }
    }

    #[test]
    fn unrelated_definitions_stay_untagged() {
        let defs = vec![assign("path", &[], 1), assign("n", &["m"], 2)];
        let mut tagged = OrderedSet::new();
        correlate(&defs, &[data_ref(1)], &mut tagged);
        assert!(!tagged.contains("n"));
    }

    #[test]
    fn nested_branches_are_visited() {
        let mut cond = Definition {
            name: None,
            kind: DefinitionKind::Condition,
            dependencies: Vec::new(),
            span: Span {
                start_line: 1,
                start_col: 0,
                end_line: 4,
                end_col: 0,
            },
            body: vec![assign("path", &[], 2)],
            orelse: vec![assign("alt", &["path"], 4)],
        };
        cond.body[0].span.end_line = 2;
        let mut tagged = OrderedSet::new();
        correlate(
            &[cond],
            &[DataRef {
                value: "/data/a.csv".to_string(),
                start_line: 2,
                end_line: 2,
            }],
            &mut tagged,
        );
        assert!(tagged.contains("path"));
        assert!(tagged.contains("alt"));
    }

    #[test]
    fn no_refs_tags_nothing() {
        let defs = vec![assign("x", &[], 1)];
        let mut tagged = OrderedSet::new();
        correlate(&defs, &[], &mut tagged);
        assert!(tagged.is_empty());
    }
}
