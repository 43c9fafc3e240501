use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::tile::Tile;

/// Вид комбинации. Порядок объявления = старшинство вида.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComboKind {
    Single = 1,
    Pair = 2,
    Triple = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl ComboKind {
    /// Старшинство вида: Single(1) .. StraightFlush(8).
    pub const fn kind_rank(self) -> u8 {
        self as u8
    }

    /// Сколько тайлов в комбинации этого вида.
    pub const fn size(self) -> usize {
        match self {
            ComboKind::Single => 1,
            ComboKind::Pair => 2,
            ComboKind::Triple => 3,
            _ => 5,
        }
    }
}

impl fmt::Display for ComboKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComboKind::Single => "Single",
            ComboKind::Pair => "Pair",
            ComboKind::Triple => "Triple",
            ComboKind::Straight => "Straight",
            ComboKind::Flush => "Flush",
            ComboKind::FullHouse => "Full house",
            ComboKind::FourOfAKind => "Four of a kind",
            ComboKind::StraightFlush => "Straight flush",
        };
        write!(f, "{name}")
    }
}

/// Представитель комбинации.
///
/// Для флеша нужен весь набор (сравнение идёт потайлово),
/// для остальных видов хватает одного тайла.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Representative {
    Single(Tile),
    /// Все 5 тайлов флеша по убыванию.
    Flush([Tile; 5]),
}

impl Representative {
    /// Старший тайл представителя.
    pub fn top(&self) -> Tile {
        match self {
            Representative::Single(tile) => *tile,
            Representative::Flush(tiles) => tiles[0],
        }
    }
}

/// Результат классификации набора тайлов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Combination {
    pub kind: ComboKind,
    pub representative: Representative,
}

impl Combination {
    pub fn single(kind: ComboKind, tile: Tile) -> Self {
        Self {
            kind,
            representative: Representative::Single(tile),
        }
    }

    pub fn flush(tiles: [Tile; 5]) -> Self {
        Self {
            kind: ComboKind::Flush,
            representative: Representative::Flush(tiles),
        }
    }

    /// Человеческое описание: "7 Pair", "12 Flush".
    pub fn describe(&self) -> String {
        format!("{} {}", self.representative.top().rank, self.kind)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
