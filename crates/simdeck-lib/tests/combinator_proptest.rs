//! Property tests for the parser combinators.

use proptest::prelude::*;
use simdeck_lib::{Parser, primitives};

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,4}", 0..6)
}

proptest! {
    #[test]
    fn parsing_is_deterministic(tokens in words()) {
        let parser = Parser::many(Parser::alternative(vec![
            Parser::of_string("boot", 1),
            primitives::of_int(),
        ]));
        prop_assert_eq!(parser.parse(&tokens), parser.parse(&tokens));
    }

    #[test]
    fn recoverable_failure_consumes_nothing(tokens in words()) {
        let inner = primitives::of_int();
        let optional = primitives::of_int().optional();
        let outcome = optional.parse(&tokens).unwrap();
        match inner.parse(&tokens) {
            Ok((rest, value)) => prop_assert_eq!(outcome, (rest, Some(value))),
            Err(_) => prop_assert_eq!(outcome, (tokens.as_slice(), None)),
        }
    }

    #[test]
    fn repetition_lower_bound_is_enforced(count in 0usize..4, reps in 0usize..6) {
        let mut tokens = vec!["a".to_string(); reps];
        tokens.push("b".to_string());
        let parser = Parser::many_count(count, Parser::of_string("a", ()));
        let outcome = parser.parse(&tokens);
        if reps >= count {
            let (rest, values) = outcome.unwrap();
            prop_assert_eq!(values.len(), reps);
            prop_assert_eq!(rest, ["b".to_string()].as_slice());
        } else {
            prop_assert!(outcome.is_err());
        }
    }

    #[test]
    fn many_till_consumes_exactly_one_terminator(before in words(), after in words()) {
        let mut tokens = before.clone();
        tokens.push("--".to_string());
        tokens.extend(after.clone());
        let parser = Parser::many_till(primitives::of_dash_separator(), primitives::of_any());
        let (rest, values) = parser.parse(&tokens).unwrap();
        prop_assert_eq!(values, before);
        prop_assert_eq!(rest, after.as_slice());
    }

    #[test]
    fn exhaustive_rejects_any_trailing_token(extra in "[a-z]{1,4}") {
        let parser = Parser::of_string("boot", ()).exhaustive();
        let tokens = vec!["boot".to_string(), extra];
        prop_assert!(parser.parse(&tokens).is_err());
    }

    #[test]
    fn the_first_matching_branch_wins(word in "[a-z]{1,5}") {
        let parser = Parser::alternative(vec![
            Parser::of_string(&word, 1),
            Parser::of_string(&word, 2),
        ]);
        let tokens = vec![word.clone()];
        prop_assert_eq!(parser.parse(&tokens).unwrap().1, 1);
    }

    #[test]
    fn flag_argument_forms_agree(name in "[a-z]{1,5}", value in -999i64..999) {
        let parser = Parser::of_flag_with_arg(&name, primitives::of_int(), "Value.");
        let spaced = vec![format!("--{name}"), value.to_string()];
        let equal = vec![format!("--{name}={value}")];
        prop_assert_eq!(
            parser.parse(&spaced).unwrap().1,
            parser.parse(&equal).unwrap().1
        );
    }
}
