//! Trait seams.

pub mod enricher;
