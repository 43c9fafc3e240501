//! Классификация и сравнение комбинаций.
//!
//! Основные функции:
//!   `classify(tiles) -> Option<Combination>`
//!   `beats(challenger, leader) -> bool`

pub mod classifier;
pub mod combination;
pub mod comparator;
pub mod lookup_tables;
pub mod search;

pub use classifier::classify;
pub use combination::{ComboKind, Combination, Representative};
pub use comparator::beats;
pub use search::{legal_plays, weakest_legal_play, CandidatePlay};
