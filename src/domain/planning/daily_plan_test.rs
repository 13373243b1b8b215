use super::*;

fn date(y: i32, m: u32, d: u32) -> PlanDate {
    PlanDate::from_ymd(y, m, d).unwrap()
}

fn today() -> PlanDate {
    date(2024, 6, 13)
}

fn open_plan() -> DailyPlan {
    DailyPlan::new(today())
}

// ───────────────────────────────────────────────────────────────
// add / remove state machine
// ───────────────────────────────────────────────────────────────

#[test]
fn new_plan_starts_empty() {
    let plan = open_plan();
    assert!(plan.is_empty());
    assert!(plan.planned_ids().is_empty());
}

#[test]
fn add_transitions_empty_to_populated() {
    let mut plan = open_plan();
    let id = StepId::new();

    plan.add_to_plan(id, today()).unwrap();
    assert!(!plan.is_empty());
    assert!(plan.contains(id));
}

#[test]
fn add_is_idempotent() {
    let mut plan = open_plan();
    let id = StepId::new();

    plan.add_to_plan(id, today()).unwrap();
    let once = plan.planned_ids().to_vec();
    plan.add_to_plan(id, today()).unwrap();

    assert_eq!(plan.planned_ids(), once.as_slice());
}

#[test]
fn add_preserves_insertion_order() {
    let mut plan = open_plan();
    let (a, b, c) = (StepId::new(), StepId::new(), StepId::new());

    plan.add_to_plan(a, today()).unwrap();
    plan.add_to_plan(b, today()).unwrap();
    plan.add_to_plan(c, today()).unwrap();

    assert_eq!(plan.planned_ids(), &[a, b, c]);
}

#[test]
fn remove_of_absent_id_is_a_no_op() {
    let mut plan = open_plan();
    let id = StepId::new();
    plan.add_to_plan(id, today()).unwrap();

    plan.remove_from_plan(StepId::new(), today()).unwrap();
    assert_eq!(plan.planned_ids(), &[id]);
}

#[test]
fn remove_of_last_id_returns_to_empty() {
    let mut plan = open_plan();
    let id = StepId::new();

    plan.add_to_plan(id, today()).unwrap();
    plan.remove_from_plan(id, today()).unwrap();

    // Empty sequence, not a deleted record.
    assert!(plan.is_empty());
    assert_eq!(plan.date(), today());
}

#[test]
fn add_then_remove_is_a_no_op() {
    let mut plan = open_plan();
    let existing = StepId::new();
    plan.add_to_plan(existing, today()).unwrap();
    let before = plan.clone();

    let id = StepId::new();
    plan.add_to_plan(id, today()).unwrap();
    plan.remove_from_plan(id, today()).unwrap();

    assert_eq!(plan, before);
}

// ───────────────────────────────────────────────────────────────
// read-only past plans
// ───────────────────────────────────────────────────────────────

#[test]
fn past_plan_rejects_add() {
    let mut plan = DailyPlan::new(date(2024, 6, 10));
    let result = plan.add_to_plan(StepId::new(), today());
    assert_eq!(
        result,
        Err(PlanError::PlanDateInPast {
            date: date(2024, 6, 10)
        })
    );
}

#[test]
fn past_plan_rejects_remove_and_reorder() {
    let mut plan = DailyPlan::new(date(2024, 6, 10));
    assert!(plan.remove_from_plan(StepId::new(), today()).is_err());
    assert!(plan.reorder(Vec::new(), today()).is_err());
}

#[test]
fn future_plan_accepts_mutations() {
    let mut plan = DailyPlan::new(date(2024, 6, 20));
    assert!(plan.add_to_plan(StepId::new(), today()).is_ok());
}

// ───────────────────────────────────────────────────────────────
// reorder
// ───────────────────────────────────────────────────────────────

#[test]
fn reorder_replaces_display_order() {
    let mut plan = open_plan();
    let (a, b, c) = (StepId::new(), StepId::new(), StepId::new());
    for id in [a, b, c] {
        plan.add_to_plan(id, today()).unwrap();
    }

    plan.reorder(vec![c, a, b], today()).unwrap();
    assert_eq!(plan.planned_ids(), &[c, a, b]);
}

#[test]
fn reorder_rejects_non_permutations() {
    let mut plan = open_plan();
    let (a, b) = (StepId::new(), StepId::new());
    plan.add_to_plan(a, today()).unwrap();
    plan.add_to_plan(b, today()).unwrap();

    assert_eq!(
        plan.reorder(vec![a], today()),
        Err(PlanError::ReorderMismatch)
    );
    assert_eq!(
        plan.reorder(vec![a, StepId::new()], today()),
        Err(PlanError::ReorderMismatch)
    );
}

// ───────────────────────────────────────────────────────────────
// complete-and-retire and progress views
// ───────────────────────────────────────────────────────────────

#[test]
fn complete_and_retire_keeps_id_but_clears_remaining() {
    let mut step = DailyStep::new("Write the report", today());
    let mut plan = open_plan();
    plan.add_to_plan(step.id, today()).unwrap();

    let mut steps = vec![step.clone()];
    plan.complete_and_retire(&mut steps, step.id).unwrap();
    step = steps[0].clone();

    assert!(step.completed);
    assert!(plan.contains(step.id));
    assert!(plan.remaining_ids(&steps).is_empty());
    assert_eq!(plan.completed_count(&steps), 1);
}

#[test]
fn complete_and_retire_is_allowed_on_past_plans() {
    let yesterday = date(2024, 6, 12);
    let step = DailyStep::new("Overdue thing", yesterday);
    let mut plan = DailyPlan::new(yesterday);
    plan.add_to_plan(step.id, yesterday).unwrap();

    let mut steps = vec![step];
    let id = steps[0].id;
    assert!(plan.complete_and_retire(&mut steps, id).is_ok());
}

#[test]
fn complete_and_retire_rejects_unplanned_id() {
    let plan = open_plan();
    let mut steps = vec![DailyStep::new("Loose step", today())];
    let id = steps[0].id;

    assert_eq!(
        plan.complete_and_retire(&mut steps, id),
        Err(PlanError::StepNotPlanned(id))
    );
}

#[test]
fn complete_and_retire_rejects_unknown_step() {
    let mut plan = open_plan();
    let id = StepId::new();
    plan.add_to_plan(id, today()).unwrap();

    let mut steps: Vec<DailyStep> = Vec::new();
    assert_eq!(
        plan.complete_and_retire(&mut steps, id),
        Err(PlanError::UnknownStep(id))
    );
}

#[test]
fn progress_ratio_counts_completed_over_planned() {
    let done = {
        let mut step = DailyStep::new("done", today());
        step.complete();
        step
    };
    let pending = DailyStep::new("pending", today());

    let mut plan = open_plan();
    plan.add_to_plan(done.id, today()).unwrap();
    plan.add_to_plan(pending.id, today()).unwrap();

    let steps = vec![done, pending];
    assert!((plan.progress_ratio(&steps) - 0.5).abs() < f64::EPSILON);
    assert_eq!(plan.remaining_ids(&steps).len(), 1);
}

#[test]
fn progress_ratio_is_zero_for_empty_plan() {
    let plan = open_plan();
    assert_eq!(plan.progress_ratio(&[]), 0.0);
}

#[test]
fn progress_does_not_regress_when_step_completes() {
    let mut step = DailyStep::new("Write the report", today());
    let mut plan = open_plan();
    plan.add_to_plan(step.id, today()).unwrap();

    let planned_before = plan.planned_ids().len();
    step.complete();
    let steps = vec![step];

    assert_eq!(plan.planned_ids().len(), planned_before);
    assert!((plan.progress_ratio(&steps) - 1.0).abs() < f64::EPSILON);
}
