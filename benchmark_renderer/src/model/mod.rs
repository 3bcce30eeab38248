//!
//! The benchmark data model.
//!

pub mod record;
pub mod set;
