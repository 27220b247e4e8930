//! Markdown formatting for plans and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes get small wrapper types so every interface prints
//! the same markdown. The CLI renders it with termimad.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Markdown      │
//! │ (Plan, Task,    │───▶│ (PlanRecords,   │───▶│    Output       │
//! │  PlanRecord)    │    │  CreateResult)  │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`PlanRecords`] list wrapper
//! - [`results`]: [`CreateResult`] and [`UpdateResult`]
//! - [`status`]: [`OperationStatus`] confirmation lines
//! - [`datetime`]: [`LocalDateTime`] timestamp formatting
//! - [`models`]: `Display` for [`Plan`](crate::models::Plan),
//!   [`Task`](crate::models::Task) and [`PlanRecord`](crate::models::PlanRecord)
//!
//! ```rust
//! use planit_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Progress saved".to_string());
//! assert_eq!(status.to_string(), "Success: Progress saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanRecords;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
