//! Core types, node capabilities, and errors for the Axial layout engine.
//!
//! This crate provides the foundational types shared by layout hosts and
//! the solver in `axial-layout`:
//! - Node identifiers and axis/alignment enums
//! - The [`NodeBehavior`] capability trait for quirky child kinds
//! - Error types

pub mod behavior;
pub mod errors;
pub mod types;

pub use behavior::*;
pub use errors::*;
pub use types::*;
