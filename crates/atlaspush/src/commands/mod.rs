//! CLI command implementations

pub mod doctor;
pub mod push;
pub mod which;
