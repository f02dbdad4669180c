//! Employee roster records with validated attributes.
//!
//! This crate models four employee roles (employee, production worker,
//! shift supervisor and team leader), clamps out-of-range attribute values
//! to safe defaults while reporting each correction, and renders records
//! as text reports.

#![warn(missing_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod roster;
