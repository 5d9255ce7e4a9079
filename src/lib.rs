pub mod person;
pub mod scheduler;
pub mod time;
