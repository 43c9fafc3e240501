use serde::{Deserialize, Serialize};

use crate::domain::{PlayerIndex, Tile};

/// Тип действия игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PlayerActionKind {
    /// Выложить набор тайлов из руки.
    Play(Vec<Tile>),
    /// Пас до конца текущего круга.
    Pass,
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player: PlayerIndex,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn play(player: PlayerIndex, tiles: Vec<Tile>) -> Self {
        Self {
            player,
            kind: PlayerActionKind::Play(tiles),
        }
    }

    pub fn pass(player: PlayerIndex) -> Self {
        Self {
            player,
            kind: PlayerActionKind::Pass,
        }
    }
}
