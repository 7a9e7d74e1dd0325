//! Dimension vectors and the named-quantity table.
//!
//! This module re-exports the canonical unit vocabulary from `buckingham_units`,
//! so callers only need this crate.

pub use buckingham_units::quantity::*;
pub use buckingham_units::units::*;
