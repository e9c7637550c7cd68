pub mod hours;
pub mod workdays;
