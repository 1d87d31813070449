pub mod category;
pub mod grouping;
pub mod occupation;
pub mod time_log;
pub mod time_range;

pub use category::Category;
pub use grouping::Grouping;
pub use occupation::Occupation;
pub use time_log::{HoursMinutes, TimeLogRecord};
pub use time_range::TimeRange;
