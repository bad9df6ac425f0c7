//! Input-side text handling
//!
//! This module provides part-of-speech candidate filtering and the term
//! normalization shared between graph construction and phrase merging.

pub mod normalize;
pub mod tags;
