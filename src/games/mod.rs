//! Game implementations.

pub mod extreme;
