//! Data models for plans and tasks.
//!
//! This module contains the domain models that flow through the scheduler:
//! [`Task`] (the unit of work), [`Plan`] (the assembled, dated result) and
//! [`PlanRecord`] (a plan as kept by a store). Display implementations live
//! in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use planit_core::models::{Priority, Task};
//!
//! let task = Task::new(1, "Write outline", "Planning", Priority::High, 3, vec![]);
//! assert!(!task.is_scheduled());
//! assert!(!task.completed);
//! ```

pub mod plan;
pub mod priority;
pub mod record;
pub mod task;


pub use plan::Plan;
pub use priority::Priority;
pub use record::PlanRecord;
pub use task::Task;
