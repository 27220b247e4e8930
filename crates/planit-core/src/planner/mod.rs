//! High-level async planner API.
//!
//! [`Planner`] is the entry point interfaces use. It owns the database path
//! and the configured [`TaskGenerator`], and runs each workflow from
//! [`crate::operations`] on a blocking thread against a fresh SQLite
//! connection.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers) │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │                 │    │  operations)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Display wrappers        Workflows             Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Async plan operations returning domain types
//! - [`plan_handlers`]: Operations returning display wrappers
//!
//! # Usage
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use planit_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/planit.db"))
//!     .build()
//!     .await?;
//!
//! let saved = planner
//!     .generate_plan(&GeneratePlan {
//!         goal: "Learn Spanish".to_string(),
//!         start_date: date(2024, 1, 1),
//!         end_date: date(2024, 3, 31),
//!     })
//!     .await?;
//! println!("{}", saved.plan);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
    generate::TaskGenerator,
};

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for generating and maintaining plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: Arc<dyn TaskGenerator>,
}

impl Planner {
    /// Creates a new planner with the specified database path and generator.
    pub(crate) fn new(db_path: PathBuf, generator: Arc<dyn TaskGenerator>) -> Self {
        Self { db_path, generator }
    }

    /// Opens the database on a blocking thread and runs `op` against it.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database, &dyn TaskGenerator) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let generator = Arc::clone(&self.generator);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db, generator.as_ref())
        })
        .await
        .map_err(PlannerError::join)?
    }
}
