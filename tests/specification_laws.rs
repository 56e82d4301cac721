//! Property-based tests for the boolean laws of specification combinators

use criteria::specification::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_and_matches_conjunction(
        a in any::<i32>(),
        b in any::<i32>(),
        v in any::<i32>()
    ) {
        let p = at_least(a);
        let q = below(b);
        prop_assert_eq!(
            p.and(q).is_satisfied_by(&v),
            p.is_satisfied_by(&v) && q.is_satisfied_by(&v)
        );
    }

    #[test]
    fn prop_or_matches_disjunction(
        a in any::<i32>(),
        b in any::<i32>(),
        v in any::<i32>()
    ) {
        let p = at_least(a);
        let q = below(b);
        prop_assert_eq!(
            p.or(q).is_satisfied_by(&v),
            p.is_satisfied_by(&v) || q.is_satisfied_by(&v)
        );
    }

    #[test]
    fn prop_not_matches_negation(a in any::<i32>(), v in any::<i32>()) {
        let p = at_least(a);
        prop_assert_eq!(p.not().is_satisfied_by(&v), !p.is_satisfied_by(&v));
    }

    #[test]
    fn prop_double_negation(a in any::<i32>(), v in any::<i32>()) {
        let p = at_least(a);
        prop_assert_eq!(
            p.not().not().is_satisfied_by(&v),
            p.is_satisfied_by(&v)
        );
    }

    #[test]
    fn prop_de_morgan_over_and(
        a in any::<i32>(),
        b in any::<i32>(),
        v in any::<i32>()
    ) {
        let p = at_least(a);
        let q = below(b);
        prop_assert_eq!(
            p.and(q).not().is_satisfied_by(&v),
            p.not().or(q.not()).is_satisfied_by(&v)
        );
    }

    #[test]
    fn prop_de_morgan_over_or(
        a in any::<i32>(),
        b in any::<i32>(),
        v in any::<i32>()
    ) {
        let p = at_least(a);
        let q = below(b);
        prop_assert_eq!(
            p.or(q).not().is_satisfied_by(&v),
            p.not().and(q.not()).is_satisfied_by(&v)
        );
    }

    // Composition depth is unbounded: check a three-leaf expression for
    // every truth assignment proptest throws at it.
    #[test]
    fn prop_arbitrary_truth_assignment(
        a in any::<bool>(),
        b in any::<bool>(),
        c in any::<bool>()
    ) {
        let pa = move |_: &()| a;
        let pb = move |_: &()| b;
        let pc = move |_: &()| c;
        prop_assert_eq!(
            pa.and(pb).or(pc.not()).is_satisfied_by(&()),
            (a && b) || !c
        );
    }

    #[test]
    fn prop_all_of_matches_iterator_all(
        thresholds in [any::<i32>(), any::<i32>(), any::<i32>()],
        v in any::<i32>()
    ) {
        let spec = all_of(thresholds.map(at_least));
        prop_assert_eq!(
            spec.is_satisfied_by(&v),
            thresholds.iter().all(|t| v >= *t)
        );
    }

    #[test]
    fn prop_any_of_matches_iterator_any(
        thresholds in [any::<i32>(), any::<i32>(), any::<i32>()],
        v in any::<i32>()
    ) {
        let spec = any_of(thresholds.map(at_least));
        prop_assert_eq!(
            spec.is_satisfied_by(&v),
            thresholds.iter().any(|t| v >= *t)
        );
    }

    #[test]
    fn prop_none_of_is_negated_any_of(
        thresholds in [any::<i32>(), any::<i32>(), any::<i32>()],
        v in any::<i32>()
    ) {
        let spec = none_of(thresholds.map(at_least));
        let negated = any_of(thresholds.map(at_least)).not();
        prop_assert_eq!(spec.is_satisfied_by(&v), negated.is_satisfied_by(&v));
    }

    #[test]
    fn prop_boxing_is_transparent(
        a in any::<i32>(),
        b in any::<i32>(),
        v in any::<i32>()
    ) {
        let plain = at_least(a).and(below(b));
        let boxed = at_least(a).and(below(b)).boxed();
        prop_assert_eq!(boxed.is_satisfied_by(&v), plain.is_satisfied_by(&v));
    }
}
