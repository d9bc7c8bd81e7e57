pub mod hiscore;
pub mod milestone;
pub mod submission;
