use std::collections::BTreeSet;

use crate::domain::{Hand, PlayerIndex, Tile};

/// Следующий игрок после `from`, который ещё не пасовал в этом круге.
///
/// Обход ограничен `num_players` шагами. `None` означает, что спасовали все,
/// а круг не был сброшен: это нарушение инварианта.
pub fn next_active_player(
    from: PlayerIndex,
    num_players: usize,
    passed: &BTreeSet<PlayerIndex>,
) -> Option<PlayerIndex> {
    if num_players == 0 {
        return None;
    }

    let mut idx = from % num_players;
    for _ in 0..num_players {
        idx = (idx + 1) % num_players;
        if !passed.contains(&idx) {
            return Some(idx);
        }
    }

    None
}

/// Кто держит открывающий тайл.
pub fn holder_of(hands: &[Hand], tile: &Tile) -> Option<PlayerIndex> {
    hands.iter().position(|h| h.contains(tile))
}
