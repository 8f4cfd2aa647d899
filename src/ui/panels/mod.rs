// HeadlineScope - ui/panels/mod.rs

pub mod about;
pub mod charts;
pub mod headlines;
pub mod summary;
pub mod words;
