pub mod bulk;
pub mod date_range;
pub mod groups;
pub mod health;
pub mod summaries;
pub mod tasks;
