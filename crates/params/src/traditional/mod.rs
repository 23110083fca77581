//! Constants for traditional hash algorithms

pub mod sha2;
