//! Console flows for each command

pub mod converter;
pub mod interest;
pub mod prompt;
pub mod ui;
