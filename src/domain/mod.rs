//! Доменная модель игры: тайлы, колода, руки, деньги, правила.

pub mod deck;
pub mod hand;
pub mod money;
pub mod rules;
pub mod tile;

/// Индекс игрока за столом (0..num_players-1).
pub type PlayerIndex = usize;

pub use deck::*;
pub use hand::*;
pub use money::*;
pub use rules::*;
pub use tile::*;
