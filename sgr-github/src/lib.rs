pub mod bucket;
pub mod calendar;
#[cfg(feature = "api")]
pub mod client;
pub mod day_record;
pub mod error;
pub mod window;
