//! Due-ness evaluation for recurrence rules.
//!
//! One exhaustive match decides whether an item is due on a reference date.
//! Pure functions throughout: the reference date is always injected, never
//! read from the wall clock.

use crate::domain::foundation::PlanDate;

use super::{RecurrenceKind, RecurrenceRule};

/// Decides whether a rule is due on `reference`.
///
/// Priority order, first match wins:
/// 1. `always_show` override - due.
/// 2. `Daily` - due every day.
/// 3. `Weekly`/`Custom` - due iff the reference weekday is selected;
///    an empty selection is never due.
/// 4. `Monthly` - due iff the reference day matches the scheduled day,
///    where a scheduled day past the end of the reference month clamps to
///    that month's last day (a rule anchored on the 31st is due on
///    Feb 28/29 and on the 30th of 30-day months).
/// 5. `AlwaysShow` kind - due.
pub fn is_due(rule: &RecurrenceRule, always_show: bool, reference: PlanDate) -> bool {
    if always_show {
        return true;
    }
    match rule.kind() {
        RecurrenceKind::Daily => true,
        RecurrenceKind::Weekly | RecurrenceKind::Custom => {
            rule.selected_days().contains(&reference.weekday())
        }
        RecurrenceKind::Monthly => {
            let effective = rule.scheduled_day_of_month().min(reference.days_in_month());
            reference.day_of_month() == effective
        }
        RecurrenceKind::AlwaysShow => true,
    }
}

/// Returns the first date on or after `from` on which the rule is due.
///
/// The scan is bounded by one full cycle (366 days); only rules that can
/// never be due - an empty weekday selection without an always-show
/// override - return `None`.
pub fn next_due_on_or_after(
    rule: &RecurrenceRule,
    always_show: bool,
    from: PlanDate,
) -> Option<PlanDate> {
    (0..=366)
        .map(|offset| from.plus_days(offset))
        .find(|date| is_due(rule, always_show, *date))
}

/// Returns every date in the inclusive window on which the rule is due.
///
/// An inverted window (`to` before `from`) yields an empty list.
pub fn due_dates_in(
    rule: &RecurrenceRule,
    always_show: bool,
    from: PlanDate,
    to: PlanDate,
) -> Vec<PlanDate> {
    let span = from.days_between(&to);
    if span < 0 {
        return Vec::new();
    }
    (0..=span)
        .map(|offset| from.plus_days(offset))
        .filter(|date| is_due(rule, always_show, *date))
        .collect()
}
