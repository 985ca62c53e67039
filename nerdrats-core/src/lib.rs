//! NERDRATS Core
//!
//! Platform-agnostic leaderboard and badge logic for the NERDRATS dashboard.
//! This crate provides the badge catalog model, the evaluator and achievement
//! selection rules, and leaderboard ordering, without UI or platform-specific
//! dependencies. Every operation is a pure function over explicit inputs.

pub mod badge;
pub mod evaluate;
pub mod notable;
pub mod progress;
pub mod standings;

// Re-export commonly used types
pub use badge::{BadgeCatalog, BadgeDefinition, CatalogError, Track};
pub use evaluate::{Evaluation, SortOrder, evaluate, top_n};
pub use notable::select_notable;
pub use progress::UserProgress;
pub use standings::{Standing, position_of, rank_by};
