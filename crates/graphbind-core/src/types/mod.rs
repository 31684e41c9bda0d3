mod blob;
mod date;
mod duration;
mod time_of_day;
mod timestamp;

pub use blob::Blob;
pub use date::Date;
pub use duration::{DurationParseError, IsoDuration};
pub use time_of_day::TimeOfDay;
pub use timestamp::Timestamp;
pub use uuid::Uuid;
