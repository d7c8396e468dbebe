use calcexpr::{Session, SessionConfig, evaluate};
use proptest::prelude::*;

fn seeded() -> Session {
    Session::with_config(SessionConfig { seed: Some(17),
                                         ..SessionConfig::default() })
}

proptest! {
    #[test]
    fn literals_evaluate_to_themselves(value in -1.0e12_f64..1.0e12) {
        let text = format!("{value:e}");
        prop_assert_eq!(evaluate(&text).unwrap(), value);
    }

    #[test]
    fn negative_literals_fold_their_sign(value in 0.0_f64..1.0e9) {
        let text = format!("-{value}");
        prop_assert_eq!(evaluate(&text).unwrap(), -value);
    }

    #[test]
    fn addition_matches_f64(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
        prop_assert_eq!(evaluate(&format!("{a} + {b}")).unwrap(), a + b);
        prop_assert_eq!(evaluate(&format!("{a}-{b}")).unwrap(), a - b);
    }

    #[test]
    fn comparisons_yield_flags(a in -100_i32..100, b in -100_i32..100) {
        let less = evaluate(&format!("{a} < {b}")).unwrap();
        prop_assert_eq!(less, if a < b { 1.0 } else { 0.0 });
        let equal = evaluate(&format!("{a} == {b}")).unwrap();
        prop_assert_eq!(equal, if a == b { 1.0 } else { 0.0 });
    }

    #[test]
    fn repeated_evaluation_is_stable(x in -1000.0_f64..1000.0) {
        let mut session = seeded();
        session.save_symbol("x", x);
        let first = session.evaluate("x * 3 - max(x, 2) / 4");
        let second = session.evaluate("x * 3 - max(x, 2) / 4");
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(session.lookup_symbol("x"), Some(x));
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,40}") {
        let mut session = seeded();
        let value = session.evaluate(&text);
        if !session.last_error().is_empty() {
            prop_assert!(value.is_nan());
        }
    }

    #[test]
    fn rand_stays_below_its_bound(bound in 1_u32..10_000) {
        let mut session = seeded();
        let r = session.evaluate(&format!("rand({bound})"));
        prop_assert!(r >= 0.0 && r < f64::from(bound));
        prop_assert_eq!(r.fract(), 0.0);
    }
}
