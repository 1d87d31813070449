//! Analysis engine: pure functions over an immutable record snapshot.

pub mod aggregate;
pub mod chart;
pub mod clock;
pub mod daily;
pub mod filter;
pub mod label_totals;
pub mod logic;
pub mod options;
pub mod time_range;
