pub mod age;

pub use age::{age_between, age_on, parse_date, AgeBreakdown};
