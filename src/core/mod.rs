pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod jira;
pub mod log;
pub mod plan;
pub mod post;
pub mod validate;
pub mod view;
