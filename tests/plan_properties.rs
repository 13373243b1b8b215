//! Property tests for the plan state machine and recurrence evaluator.
//!
//! The algebraic laws here are what the surrounding product relies on when
//! it retries failed writes: add/remove idempotence and the inverse law
//! mean a replayed mutation batch cannot corrupt a plan.

use proptest::prelude::*;
use uuid::Uuid;

use stride::domain::foundation::{PlanDate, StepId, Weekday};
use stride::domain::planning::DailyPlan;
use stride::domain::recurrence::{self, RecurrenceRule};

fn date(y: i32, m: u32, d: u32) -> PlanDate {
    PlanDate::from_ymd(y, m, d).unwrap()
}

fn step_id(raw: u128) -> StepId {
    StepId::from_uuid(Uuid::from_u128(raw))
}

fn plan_with(ids: &[u128], today: PlanDate) -> DailyPlan {
    let mut plan = DailyPlan::new(today);
    for raw in ids {
        plan.add_to_plan(step_id(*raw), today).unwrap();
    }
    plan
}

proptest! {
    #[test]
    fn add_is_idempotent(ids in proptest::collection::vec(any::<u128>(), 0..12), extra in any::<u128>()) {
        let today = date(2024, 6, 13);
        let mut once = plan_with(&ids, today);
        once.add_to_plan(step_id(extra), today).unwrap();

        let mut twice = plan_with(&ids, today);
        twice.add_to_plan(step_id(extra), today).unwrap();
        twice.add_to_plan(step_id(extra), today).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn remove_is_idempotent(ids in proptest::collection::vec(any::<u128>(), 0..12), target in any::<u128>()) {
        let today = date(2024, 6, 13);
        let mut once = plan_with(&ids, today);
        once.remove_from_plan(step_id(target), today).unwrap();

        let mut twice = once.clone();
        twice.remove_from_plan(step_id(target), today).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn remove_inverts_add_for_absent_ids(ids in proptest::collection::vec(any::<u128>(), 0..12), fresh in any::<u128>()) {
        let today = date(2024, 6, 13);
        let original = plan_with(&ids, today);
        prop_assume!(!original.contains(step_id(fresh)));

        let mut mutated = original.clone();
        mutated.add_to_plan(step_id(fresh), today).unwrap();
        mutated.remove_from_plan(step_id(fresh), today).unwrap();

        prop_assert_eq!(mutated, original);
    }

    #[test]
    fn planned_ids_stay_unique(ids in proptest::collection::vec(any::<u128>(), 0..24)) {
        let today = date(2024, 6, 13);
        let plan = plan_with(&ids, today);

        let mut seen = std::collections::HashSet::new();
        for id in plan.planned_ids() {
            prop_assert!(seen.insert(*id));
        }
    }

    #[test]
    fn monthly_rule_fires_exactly_once_per_month(
        anchor_day in 1u8..=31,
        month in 1u32..=12,
        year in 2020i32..2030,
    ) {
        let anchor = date(2020, 1, 1).plus_days(i64::from(anchor_day) - 1);
        let rule = RecurrenceRule::monthly(anchor_day, anchor).unwrap();

        let first = PlanDate::from_ymd(year, month, 1).unwrap();
        let due: Vec<PlanDate> = recurrence::due_dates_in(
            &rule,
            false,
            first,
            first.last_day_of_month(),
        );

        // Exactly one firing per month, on the scheduled day clamped to
        // the month's length.
        let expected_day = anchor_day.min(first.days_in_month());
        prop_assert_eq!(due.len(), 1);
        prop_assert_eq!(due[0].day_of_month(), expected_day);
    }

    #[test]
    fn weekly_rule_fires_only_on_selected_days(
        day_choices in proptest::collection::btree_set(0usize..7, 0..7),
        offset in 0i64..366,
    ) {
        let selected: std::collections::BTreeSet<Weekday> =
            day_choices.iter().map(|i| Weekday::ALL[*i]).collect();
        let rule = RecurrenceRule::weekly(selected.clone(), date(2024, 1, 1));

        let reference = date(2024, 1, 1).plus_days(offset);
        prop_assert_eq!(
            recurrence::is_due(&rule, false, reference),
            selected.contains(&reference.weekday())
        );
    }
}

#[test]
fn weekly_empty_set_is_never_due_across_a_year() {
    let rule = RecurrenceRule::weekly(Default::default(), date(2024, 1, 1));
    let start = date(2024, 1, 1);
    for offset in 0..366 {
        assert!(!recurrence::is_due(&rule, false, start.plus_days(offset)));
    }
}

#[test]
fn monthly_31_anchor_covers_every_month_end() {
    let rule = RecurrenceRule::monthly(31, date(2024, 1, 31)).unwrap();

    // Non-leap February.
    assert!(recurrence::is_due(&rule, false, date(2023, 2, 28)));
    // Leap February.
    assert!(recurrence::is_due(&rule, false, date(2024, 2, 29)));
    // Every 30-day month fires on the 30th.
    for month in [4u32, 6, 9, 11] {
        assert!(recurrence::is_due(
            &rule,
            false,
            PlanDate::from_ymd(2024, month, 30).unwrap()
        ));
    }
}
