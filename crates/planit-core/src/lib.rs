//! Core library for the PlanIt goal planner.
//!
//! PlanIt turns a natural-language goal and a date window into a dated,
//! dependency-ordered task plan. Task breakdowns come from a pluggable
//! [`TaskGenerator`](generate::TaskGenerator); when it fails, a fixed
//! six-phase template takes over so a plan is always produced.
//!
//! # Layers
//!
//! - **Pure core**: [`schedule`] (dependency resolution and date
//!   assignment), [`assemble`], [`replan`], [`generate`]
//! - **Workflows** ([`operations`]): the pure core combined with a
//!   [`PlanStore`](store::PlanStore)
//! - **Persistence** ([`db`], [`store`]): SQLite and in-memory stores
//! - **Facade** ([`planner`]): async [`Planner`] built by [`PlannerBuilder`]
//! - **Display** ([`display`]): markdown `Display` impls and wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use planit_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("planit-test.db"))
//!     .build()
//!     .await?;
//!
//! let saved = planner
//!     .generate_plan(&GeneratePlan {
//!         goal: "Run a half marathon".to_string(),
//!         start_date: date(2024, 1, 1),
//!         end_date: date(2024, 3, 1),
//!     })
//!     .await?;
//! println!("Created plan {}:\n{}", saved.id, saved.plan);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod db;
pub mod display;
pub mod error;
pub mod generate;
pub mod models;
pub mod operations;
pub mod params;
pub mod planner;
pub mod replan;
pub mod schedule;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, LocalDateTime, OperationStatus, PlanRecords, UpdateResult};
pub use error::{PlannerError, Result};
pub use generate::{
    GeneratedTasks, GenerationError, GenerationRequest, ResponseFileGenerator, StaticGenerator,
    TaskGenerator, UnavailableGenerator,
};
pub use models::{Plan, PlanRecord, Priority, Task};
pub use operations::SavedPlan;
pub use params::{AddCustomTask, GeneratePlan, Id, RegeneratePlan, UpdateProgress};
pub use planner::{Planner, PlannerBuilder};
pub use schedule::schedule;
pub use store::{MemoryStore, PlanStore};
