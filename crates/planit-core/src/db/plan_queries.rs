//! Plan CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Plan, PlanRecord},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (goal, plan_data, created_at, completed, completed_tasks) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PLAN_SQL: &str = "SELECT id, goal, plan_data, created_at, completed, completed_tasks FROM plans WHERE id = ?1";
const SELECT_ALL_PLANS_SQL: &str = "SELECT id, goal, plan_data, created_at, completed, completed_tasks FROM plans ORDER BY id DESC";
const UPDATE_PLAN_SQL: &str =
    "UPDATE plans SET plan_data = ?1, completed = ?2, completed_tasks = ?3 WHERE id = ?4";

/// Wraps a decoding failure of column `index` as a rusqlite conversion error.
fn conversion_error<E>(index: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(err))
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<PlanRecord> {
    let plan: Plan = serde_json::from_str(&row.get::<_, String>(2)?)
        .map_err(|e| conversion_error(2, e))?;
    let completed_tasks: Vec<u64> = serde_json::from_str(&row.get::<_, String>(5)?)
        .map_err(|e| conversion_error(5, e))?;

    Ok(PlanRecord {
        id: row.get::<_, i64>(0)? as u64,
        goal: row.get(1)?,
        plan,
        created_at: row
            .get::<_, String>(3)?
            .parse::<Timestamp>()
            .map_err(|e| conversion_error(3, e))?,
        completed: row.get(4)?,
        completed_tasks,
    })
}

impl super::Database {
    /// Stores a new plan with its completed-task list and returns its id.
    pub fn insert_plan(&mut self, plan: &Plan, completed_tasks: &[u64]) -> Result<u64> {
        let plan_data = serde_json::to_string(plan)?;
        let completed_data = serde_json::to_string(completed_tasks)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![plan.goal, plan_data, now, plan.is_complete(), completed_data],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Stored plan {id} with {} task(s)", plan.tasks.len());
        Ok(id)
    }

    /// Retrieves a plan record by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<PlanRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], row_to_record)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Replaces the plan body and completed-task list of an existing record.
    pub fn update_plan(&mut self, id: u64, plan: &Plan, completed_tasks: &[u64]) -> Result<()> {
        let plan_data = serde_json::to_string(plan)?;
        let completed_data = serde_json::to_string(completed_tasks)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_PLAN_SQL,
                params![plan_data, plan.is_complete(), completed_data, id as i64],
            )
            .map_err(|e| PlannerError::database("Failed to update plan").with_source(e))?;

        if rows_affected == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Lists all stored plans, newest first.
    pub fn list_plans(&self) -> Result<Vec<PlanRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map([], row_to_record)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        Ok(records)
    }
}
