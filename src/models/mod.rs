//! Domain model modules.

pub mod person;
