//! Lullaby Core
//!
//! Core types and abstractions for the Lullaby story backend.
//!
//! This crate contains:
//! - Domain types: Core business entities (jobs, handles, states, errors)
//! - DTOs: Request/response bodies for the HTTP surface

pub mod domain;
pub mod dto;
