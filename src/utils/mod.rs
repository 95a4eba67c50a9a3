pub mod text;
pub mod time;

pub use text::{capitalize, clean_location};
pub use time::{format_timestamp, parse_timestamp, split_date_time};
