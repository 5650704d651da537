//! Display wrapper types for formatting dashboard output.
//!
//! Presentation is kept out of the domain models: wrapper types borrow the
//! data and implement [`std::fmt::Display`], so the same models can be
//! rendered differently per context (collapsed vs. detailed plan trees,
//! tagged vs. bare log lines) while the formatting rules live in one place.
//!
//! ## Wrapper Types
//!
//! - [`PlanTree`]: the hierarchical task tree of the active plan
//! - [`LogLine`] / [`FixLogLine`]: one log entry as `[HH:MM:SS] message`
//! - [`LocalTime`]: time-of-day rendering of an entry timestamp

mod datetime;
mod logs;
mod models;

pub use datetime::LocalTime;
pub use logs::{strip_backend_preamble, FixLogLine, LogLine};
pub use models::PlanTree;
