//! Domain types for the Lullaby backend

pub mod job;
