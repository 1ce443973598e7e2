use proptest::prelude::*;
use wrange::{LinearRange, WrappedRange};

proptest! {
    #[test]
    fn test_widened_bounds_stay_ordered(start in any::<u32>(), end in any::<u32>()) {
        let r = WrappedRange::new(start, end);
        prop_assert!(r.unsigned_min() <= r.unsigned_max());
        prop_assert!(r.signed_min() <= r.signed_max());
    }

    #[test]
    fn test_ordered_pairs_report_exact_unsigned_bounds(a in any::<u32>(), b in any::<u32>()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let r = WrappedRange::new(start, end);
        prop_assert!(!r.is_unsigned_wrapping());
        prop_assert_eq!(r.unsigned_min(), start);
        prop_assert_eq!(r.unsigned_max(), end);
    }

    #[test]
    fn test_wrapping_pairs_widen_to_the_unsigned_domain(a in any::<u32>(), b in any::<u32>()) {
        prop_assume!(a != b);
        let (end, start) = if a < b { (a, b) } else { (b, a) };
        let r = WrappedRange::new(start, end);
        prop_assert!(r.is_unsigned_wrapping());
        prop_assert_eq!(r.unsigned_min(), 0);
        prop_assert_eq!(r.unsigned_max(), u32::MAX);
    }

    #[test]
    fn test_signed_view_matches_reinterpreted_ordering(start in any::<u32>(), end in any::<u32>()) {
        let r = WrappedRange::new(start, end);
        if (end as i32) >= (start as i32) {
            prop_assert_eq!(r.signed_min(), start as i32);
            prop_assert_eq!(r.signed_max(), end as i32);
        } else {
            prop_assert_eq!(r.signed_min(), i32::MIN);
            prop_assert_eq!(r.signed_max(), i32::MAX);
        }
    }

    #[test]
    fn test_degenerate_ranges_never_wrap(v in any::<u32>()) {
        let r = WrappedRange::constant(v);
        prop_assert!(!r.is_unsigned_wrapping());
        prop_assert!(!r.is_signed_wrapping());
        prop_assert_eq!(r.unsigned_min(), v);
        prop_assert_eq!(r.unsigned_max(), v);
    }

    #[test]
    fn test_linear_constructors_uphold_ordering(a in any::<u32>(), b in any::<u32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for r in [LinearRange::new(lo, hi), LinearRange::constant(a), LinearRange::full()] {
            prop_assert!(r.start <= r.end);
            prop_assert_eq!(r.unsigned_min(), r.start);
            prop_assert_eq!(r.unsigned_max(), r.end);
        }
    }
}
