//! Box-office statistics invariants:
//!
//! 1. Statistics are ALWAYS derived from the entity store, NEVER primary
//! 2. Statistics can be recalculated at any time
//! 3. Computing statistics NEVER alters store state
//! 4. Group sales count as tickets sold but carry no revenue

pub mod entity;
pub use entity::{BoxOfficeSummary, RecordCounts, ShowSales};
