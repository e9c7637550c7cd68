pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod jira;
pub mod log;
pub mod next_date;
pub mod post;
pub mod prune;
pub mod show;
pub mod ui;
