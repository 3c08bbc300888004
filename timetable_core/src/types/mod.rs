pub mod interval;
pub mod subject;
pub mod weekday;
