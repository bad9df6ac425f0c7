//! Term graph construction and representation
//!
//! `directed` holds the mutable value-keyed graph, `builder` constructs it
//! from candidate terms, and `csr` freezes it for ranking.

pub mod builder;
pub mod csr;
pub mod directed;
