//! Property-based tests for stay intervals.

use super::StayDates;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

// Stays of 1 to 30 nights starting within a two-year span
fn stay_strategy() -> impl Strategy<Value = StayDates> {
    (0i64..730, 1i64..30).prop_map(|(offset, nights)| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let check_in = base + Duration::days(offset);
        StayDates::new(check_in, check_in + Duration::days(nights)).unwrap()
    })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlap_matches_shared_nights(a in stay_strategy(), b in stay_strategy()) {
        let shared = a.each_night().any(|night| b.each_night().any(|other| other == night));
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    #[test]
    fn stay_overlaps_itself(a in stay_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn back_to_back_stays_do_not_overlap(a in stay_strategy(), nights in 1i64..30) {
        let next = StayDates::new(a.check_out(), a.check_out() + Duration::days(nights)).unwrap();
        prop_assert!(!a.overlaps(&next));
    }

    #[test]
    fn each_night_count_matches_nights(a in stay_strategy()) {
        let counted = i64::try_from(a.each_night().count()).unwrap();
        prop_assert_eq!(counted, a.nights());
    }
}
