#![allow(dead_code)]

use jiff::civil::date;
use planit_core::{
    assemble::{assemble, TaskSource},
    schedule, GeneratedTasks, Plan, Planner, PlannerBuilder, Priority, StaticGenerator, Task,
};
use tempfile::TempDir;

/// Three chained tasks as a generator would return them.
pub fn chained_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Sketch the layout", "Design", Priority::High, 2, vec![]),
        Task::new(2, "Build the frame", "Build", Priority::Medium, 5, vec![1]),
        Task::new(3, "Paint", "Finish", Priority::Low, 3, vec![2]),
    ]
}

pub fn chained_generator() -> StaticGenerator {
    StaticGenerator::new(GeneratedTasks {
        domain: Some("Woodworking".to_string()),
        tasks: chained_tasks(),
    })
}

/// A scheduled plan over January 2024.
pub fn scheduled_plan() -> Plan {
    let start = date(2024, 1, 1);
    let end = date(2024, 1, 31);
    let tasks = schedule(chained_tasks(), start, end).expect("Failed to schedule");
    assemble(tasks, "Build a bookshelf", start, end, "Woodworking", TaskSource::Generated)
        .expect("Failed to assemble")
}

/// Helper function to create a test planner
pub async fn create_test_planner(generator: StaticGenerator) -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_generator(generator)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
