//! Phrase assembly from ranked terms
//!
//! This module rebuilds multi-word phrases by joining top-ranked words that
//! are adjacent in the source text.

pub mod merger;
