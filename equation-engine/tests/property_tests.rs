use proptest::prelude::*;

use equation_engine::{pieces, BinaryOp, EquationEngine, Key};

fn any_key() -> impl Strategy<Value = Key> {
    let alphabet: Vec<Key> = "0123456789.+−x/="
        .chars()
        .filter_map(Key::from_char)
        .collect();
    prop::sample::select(alphabet)
}

/// Non-operator pieces of the equation, for invariant checks
fn terms(equation: &str) -> Vec<&str> {
    pieces(equation)
        .into_iter()
        .filter(|p| p.chars().next().and_then(BinaryOp::from_char).is_none())
        .collect()
}

fn all_terms_numeric(equation: &str) -> bool {
    terms(equation)
        .iter()
        .all(|t| t.is_empty() || t.parse::<f64>().is_ok_and(|v| !v.is_nan()))
}

proptest! {
    /// Any key sequence leaves the engine well formed: the equals symbol
    /// never lands in the equation, no term carries two decimal points,
    /// and while every term stays numeric at most one operator is
    /// buffered.
    #[test]
    fn key_sequences_uphold_equation_invariants(keys in prop::collection::vec(any_key(), 0..40)) {
        let mut engine = EquationEngine::new();

        for key in keys {
            engine.press(key);
            let equation = engine.equation();

            prop_assert!(!equation.contains('='));
            for term in terms(equation) {
                prop_assert!(term.matches('.').count() <= 1);
            }
            if all_terms_numeric(equation) {
                prop_assert!(pieces(equation).len() <= 3);
            }
        }
    }
}

proptest! {
    /// Two equals in a row always leave an empty display, no matter what
    /// came before.
    #[test]
    fn double_equals_always_clears(keys in prop::collection::vec(any_key(), 0..40)) {
        let mut engine = EquationEngine::new();

        for key in keys {
            engine.press(key);
        }
        engine.press(Key::Equals);
        engine.press(Key::Equals);

        prop_assert_eq!(engine.equation(), "");
    }
}

proptest! {
    /// A rejected operator or point stays rejected: repeating it any
    /// number of times changes nothing.
    #[test]
    fn rejection_is_stable_under_repetition(
        keys in prop::collection::vec(any_key(), 0..40),
        repeats in 1usize..10,
    ) {
        let mut engine = EquationEngine::new();

        for key in keys {
            engine.press(key);
        }

        for probe in [Key::Op(BinaryOp::Sub), Key::Point] {
            let before = engine.equation().to_string();
            engine.press(probe);
            if engine.equation() == before {
                for _ in 0..repeats {
                    engine.press(probe);
                    prop_assert_eq!(engine.equation(), before.as_str());
                }
            }
        }
    }
}
