//! Fuzzy search.
//!
//! This module provides:
//! - A subsequence scorer for a single query/candidate pair
//! - A generic engine that ranks items by their best-matching field

pub mod engine;
pub mod scorer;

pub use engine::{search, search_limited, FuzzyMatch};
pub use scorer::{score, Score};
