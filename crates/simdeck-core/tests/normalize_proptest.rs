//! Property tests for description normalization.

use proptest::prelude::*;
use simdeck_core::Description;

fn leaf() -> impl Strategy<Value = Description> {
    prop_oneof![
        ("[a-z]{1,6}", "[a-z ]{0,12}").prop_map(|(name, doc)| Description::primitive(name, doc)),
        ("[a-z]{1,6}", "[a-z ]{0,12}").prop_map(|(name, doc)| Description::flag(name, doc)),
        "[a-z-]{1,8}".prop_map(Description::command),
    ]
}

fn tree() -> impl Strategy<Value = Description> {
    leaf().prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Description::sequence),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Description::choice),
            (0usize..3, inner.clone()).prop_map(|(n, child)| Description::at_least(n, child)),
            (0usize..3, inner.clone(), inner.clone())
                .prop_map(|(n, child, sep)| Description::at_least_sep(n, child, sep)),
            inner.clone().prop_map(Description::optional),
            ("[a-z]{1,6}", "[A-Z][a-z]{0,6}", inner)
                .prop_map(|(tag, name, child)| Description::section(tag, name, "", child)),
        ]
    })
}

fn assert_flattened(node: &Description) {
    match node {
        Description::Sequence { children } => {
            assert!(
                !children
                    .iter()
                    .any(|c| matches!(c, Description::Sequence { .. })),
                "sequence still contains a sequence child"
            );
        }
        Description::Choice { children, .. } => {
            assert!(
                !children
                    .iter()
                    .any(|c| matches!(c, Description::Choice { .. })),
                "choice still contains a choice child"
            );
        }
        Description::Optional { child } => {
            assert!(
                !matches!(
                    child.as_ref(),
                    Description::AtLeast { lower_bound: 1, .. }
                ),
                "optional still wraps a one-or-more repetition"
            );
        }
        _ => {}
    }
    for child in node.children() {
        assert_flattened(child);
    }
}

proptest! {
    #[test]
    fn normalization_is_idempotent(tree in tree()) {
        let once = tree.normalize();
        prop_assert_eq!(once.normalize(), once);
    }

    #[test]
    fn normalized_trees_have_no_same_kind_nesting(tree in tree()) {
        assert_flattened(&tree.normalize());
    }

    #[test]
    fn usage_is_deterministic(tree in tree()) {
        prop_assert_eq!(tree.usage(), tree.usage());
    }

    #[test]
    fn normalization_preserves_leaf_definitions(tree in tree()) {
        // Anchored so the root cannot collapse into the flag being counted.
        let wrapped = Description::sequence(vec![tree, Description::command("end")]);
        let before: Vec<String> = wrapped.find_flags().iter().map(|f| f.definition_line()).collect();
        let after: Vec<String> = wrapped.normalize().find_flags().iter().map(|f| f.definition_line()).collect();
        prop_assert_eq!(before, after);
    }
}
