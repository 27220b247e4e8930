//! SQLite-backed plan storage.
//!
//! Plans are stored as JSON documents alongside a few indexed columns
//! (goal, creation time, completion). Schema setup lives in [`migrations`],
//! the queries in [`plan_queries`].

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Plan, PlanRecord},
    store::PlanStore,
};

pub mod migrations;
pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl PlanStore for Database {
    fn put_with_progress(&mut self, plan: &Plan, completed_tasks: &[u64]) -> Result<u64> {
        self.insert_plan(plan, completed_tasks)
    }

    fn get(&self, id: u64) -> Result<Option<PlanRecord>> {
        self.get_plan(id)
    }

    fn update(&mut self, id: u64, plan: &Plan, completed_tasks: &[u64]) -> Result<()> {
        self.update_plan(id, plan, completed_tasks)
    }

    fn list(&self) -> Result<Vec<PlanRecord>> {
        self.list_plans()
    }
}
