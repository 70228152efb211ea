//! Database models and DTOs.

pub mod regex_check;
