//! Business logic services.

pub mod matcher;
pub mod regex_check;
