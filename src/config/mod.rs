//! Search configuration and run statistics.
//!
//! A [`ResourceBudget`] is mandatory input to every proof run and is the only
//! way a search is cut short.

mod budget;
pub mod stats;

pub use budget::{Deadline, LimitKind, ResourceBudget};
pub use stats::Statistics;
