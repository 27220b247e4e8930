//! Tests for the scheduling engine.

use jiff::civil::{date, Date};

use super::{dates, schedule};
use crate::{
    error::PlannerError,
    models::{Priority, Task},
};

fn task(id: u64, duration_days: u32, dependencies: Vec<u64>) -> Task {
    Task::new(
        id,
        format!("Task {id}"),
        "General",
        Priority::Medium,
        duration_days,
        dependencies,
    )
}

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|t| t.id).collect()
}

fn find(tasks: &[Task], id: u64) -> &Task {
    tasks.iter().find(|t| t.id == id).expect("task present")
}

const JAN_1: Date = date(2024, 1, 1);
const JAN_31: Date = date(2024, 1, 31);

#[test]
fn test_chain_example() {
    let scheduled = schedule(vec![task(1, 3, vec![]), task(2, 2, vec![1])], JAN_1, JAN_31)
        .expect("Failed to schedule");

    assert_eq!(scheduled[0].start_date, Some(date(2024, 1, 1)));
    assert_eq!(scheduled[0].end_date, Some(date(2024, 1, 4)));
    assert_eq!(scheduled[1].start_date, Some(date(2024, 1, 4)));
    assert_eq!(scheduled[1].end_date, Some(date(2024, 1, 6)));
    assert_eq!(scheduled[1].deadline, scheduled[1].end_date);
}

#[test]
fn test_compression_clamps_to_window() {
    let scheduled = schedule(vec![task(1, 10, vec![])], JAN_1, date(2024, 1, 3))
        .expect("Failed to schedule");

    assert_eq!(scheduled[0].start_date, Some(date(2024, 1, 1)));
    assert_eq!(scheduled[0].duration_days, 2);
    assert_eq!(scheduled[0].end_date, Some(date(2024, 1, 3)));
}

#[test]
fn test_oversized_duration_compresses_instead_of_overflowing() {
    let scheduled = schedule(vec![task(1, 10_000_000, vec![])], JAN_1, JAN_31)
        .expect("Oversized durations must compress");

    let only = &scheduled[0];
    assert_eq!(only.duration_days, 30);
    assert_eq!(only.start_date, Some(JAN_1));
    assert_eq!(only.end_date, Some(JAN_31));
}

#[test]
fn test_max_duration_after_window_end_floors_at_one_day() {
    let scheduled = schedule(
        vec![task(1, 30, vec![]), task(2, u32::MAX, vec![1])],
        JAN_1,
        JAN_31,
    )
    .expect("Oversized durations must compress");

    let last = find(&scheduled, 2);
    assert_eq!(last.start_date, Some(JAN_31));
    assert_eq!(last.duration_days, 1);
    assert_eq!(last.end_date, Some(date(2024, 2, 1)));
}

#[test]
fn test_compression_floors_at_one_day_past_window() {
    // The second task starts when the window is already exhausted.
    let scheduled = schedule(
        vec![task(1, 5, vec![]), task(2, 4, vec![1])],
        JAN_1,
        date(2024, 1, 3),
    )
    .expect("Failed to schedule");

    let second = find(&scheduled, 2);
    assert_eq!(second.start_date, Some(date(2024, 1, 3)));
    assert_eq!(second.duration_days, 1);
    assert_eq!(second.end_date, Some(date(2024, 1, 4)));
}

#[test]
fn test_zero_length_window_degrades_without_error() {
    let scheduled = schedule(vec![task(1, 3, vec![]), task(2, 3, vec![1])], JAN_1, JAN_1)
        .expect("Failed to schedule");

    assert!(scheduled.iter().all(|t| t.duration_days == 1));
    assert_eq!(find(&scheduled, 2).start_date, Some(date(2024, 1, 2)));
}

#[test]
fn test_inverted_window_is_not_rejected() {
    let scheduled =
        schedule(vec![task(1, 3, vec![])], JAN_31, JAN_1).expect("Failed to schedule");

    assert_eq!(scheduled[0].start_date, Some(JAN_31));
    assert_eq!(scheduled[0].duration_days, 1);
}

#[test]
fn test_zero_duration_is_coerced_to_one() {
    let scheduled = schedule(vec![task(1, 0, vec![])], JAN_1, JAN_31).expect("Failed to schedule");

    assert_eq!(scheduled[0].duration_days, 1);
    assert_eq!(scheduled[0].end_date, Some(date(2024, 1, 2)));
}

#[test]
fn test_unknown_dependency_is_vacuous() {
    let scheduled = schedule(
        vec![task(1, 3, vec![]), task(2, 2, vec![999])],
        JAN_1,
        JAN_31,
    )
    .expect("Failed to schedule");

    let orphan = find(&scheduled, 2);
    assert_eq!(orphan.start_date, Some(JAN_1));
    assert_eq!(orphan.end_date, Some(date(2024, 1, 3)));
}

#[test]
fn test_independent_tasks_start_at_window_start() {
    let scheduled = schedule(
        vec![task(1, 3, vec![]), task(2, 8, vec![]), task(3, 1, vec![])],
        JAN_1,
        JAN_31,
    )
    .expect("Failed to schedule");

    assert!(scheduled.iter().all(|t| t.start_date == Some(JAN_1)));
}

#[test]
fn test_start_waits_for_latest_dependency() {
    let scheduled = schedule(
        vec![
            task(1, 2, vec![]),
            task(2, 7, vec![]),
            task(3, 1, vec![1, 2]),
        ],
        JAN_1,
        JAN_31,
    )
    .expect("Failed to schedule");

    assert_eq!(find(&scheduled, 3).start_date, Some(date(2024, 1, 8)));
}

#[test]
fn test_dependency_ordering_holds_for_every_task() {
    let input = vec![
        task(5, 2, vec![4]),
        task(1, 3, vec![]),
        task(4, 1, vec![2, 3]),
        task(2, 4, vec![1]),
        task(3, 2, vec![1]),
        task(6, 5, vec![]),
    ];
    let scheduled = schedule(input, JAN_1, JAN_31).expect("Failed to schedule");

    for t in &scheduled {
        for dep in &t.dependencies {
            let dep_end = find(&scheduled, *dep).end_date;
            assert!(t.start_date >= dep_end, "task {} starts before {dep}", t.id);
        }
        let start = t.start_date.unwrap();
        assert_eq!(
            dates::add_days(start, i64::from(t.duration_days)).unwrap(),
            t.end_date.unwrap()
        );
    }
}

#[test]
fn test_output_follows_pass_order() {
    // Pass 1 finalizes 2 then 3 (ready once 2 is done); 1 waits for pass 2.
    let scheduled = schedule(
        vec![task(1, 1, vec![2]), task(2, 1, vec![]), task(3, 1, vec![2])],
        JAN_1,
        JAN_31,
    )
    .expect("Failed to schedule");

    assert_eq!(ids(&scheduled), vec![2, 3, 1]);
}

#[test]
fn test_reverse_chain_takes_one_pass_per_task() {
    let scheduled = schedule(
        vec![task(3, 1, vec![2]), task(2, 1, vec![1]), task(1, 1, vec![])],
        JAN_1,
        JAN_31,
    )
    .expect("Failed to schedule");

    assert_eq!(ids(&scheduled), vec![1, 2, 3]);
    assert_eq!(find(&scheduled, 3).start_date, Some(date(2024, 1, 3)));
}

#[test]
fn test_scheduling_is_idempotent() {
    let input = vec![
        task(1, 3, vec![]),
        task(2, 5, vec![1]),
        task(3, 2, vec![1]),
        task(4, 1, vec![2, 3]),
    ];
    let once = schedule(input, JAN_1, JAN_31).expect("Failed to schedule");
    let twice = schedule(once.clone(), JAN_1, JAN_31).expect("Failed to reschedule");

    assert_eq!(once, twice);
}

#[test]
fn test_stale_dates_are_discarded() {
    let mut stale = task(1, 2, vec![]);
    stale.start_date = Some(date(2023, 6, 1));
    stale.end_date = Some(date(2024, 1, 20));
    let scheduled =
        schedule(vec![stale, task(2, 1, vec![1])], JAN_1, JAN_31).expect("Failed to schedule");

    assert_eq!(find(&scheduled, 1).start_date, Some(JAN_1));
    assert_eq!(find(&scheduled, 2).start_date, Some(date(2024, 1, 3)));
}

#[test]
fn test_completed_flag_is_untouched() {
    let mut done = task(1, 2, vec![]);
    done.completed = true;
    let scheduled = schedule(vec![done], JAN_1, JAN_31).expect("Failed to schedule");

    assert!(scheduled[0].completed);
}

#[test]
fn test_two_task_cycle_is_unschedulable() {
    let err = schedule(vec![task(1, 1, vec![2]), task(2, 1, vec![1])], JAN_1, JAN_31)
        .expect_err("cycle must not schedule");

    match err {
        PlannerError::UnschedulableGraph { unresolved } => assert_eq!(unresolved, vec![1, 2]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_self_dependency_is_unschedulable() {
    let err = schedule(vec![task(1, 1, vec![]), task(2, 1, vec![2])], JAN_1, JAN_31)
        .expect_err("self edge must not schedule");

    assert!(matches!(
        err,
        PlannerError::UnschedulableGraph { ref unresolved } if unresolved == &vec![2]
    ));
}

#[test]
fn test_cycle_blocks_downstream_tasks_too() {
    let err = schedule(
        vec![
            task(1, 1, vec![]),
            task(2, 1, vec![3]),
            task(3, 1, vec![2]),
            task(4, 1, vec![3]),
        ],
        JAN_1,
        JAN_31,
    )
    .expect_err("cycle must not schedule");

    assert!(matches!(
        err,
        PlannerError::UnschedulableGraph { ref unresolved } if unresolved == &vec![2, 3, 4]
    ));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let err = schedule(vec![task(1, 1, vec![]), task(1, 2, vec![])], JAN_1, JAN_31)
        .expect_err("duplicate ids must not schedule");

    assert!(matches!(err, PlannerError::InvalidInput { .. }));
}

#[test]
fn test_repeated_dependency_ids_count_once() {
    let scheduled = schedule(
        vec![task(1, 2, vec![]), task(2, 1, vec![1, 1, 1])],
        JAN_1,
        JAN_31,
    )
    .expect("Failed to schedule");

    assert_eq!(find(&scheduled, 2).start_date, Some(date(2024, 1, 3)));
}

#[test]
fn test_empty_input_schedules_to_empty_output() {
    let scheduled = schedule(Vec::new(), JAN_1, JAN_31).expect("Failed to schedule");
    assert!(scheduled.is_empty());
}

#[test]
fn test_days_between_handles_month_boundaries() {
    assert_eq!(dates::days_between(date(2024, 1, 30), date(2024, 3, 1)).unwrap(), 31);
    assert_eq!(dates::days_between(date(2024, 3, 1), date(2024, 1, 30)).unwrap(), -31);
}
