use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть тайла. Порядок объявления = сила масти (Cloud слабейшая).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Cloud,
    Star,
    Moon,
    Sun,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Cloud, Suit::Star, Suit::Moon, Suit::Sun];

    /// Сила масти для тай-брейка: Cloud=1 .. Sun=4.
    pub const fn power(self) -> u8 {
        match self {
            Suit::Cloud => 1,
            Suit::Star => 2,
            Suit::Moon => 3,
            Suit::Sun => 4,
        }
    }
}

/// Номинал тайла (1..=15). Сам по себе номинал ничего не говорит о силе,
/// для сравнения всегда используется `strength()`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 15;

    pub const ONE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);

    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Rank(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Сила номинала: 3..15 -> 1..13, затем 1 -> 14, 2 -> 15.
    pub const fn strength(self) -> u8 {
        match self.0 {
            1 => 14,
            2 => 15,
            r => r - 2,
        }
    }

    /// Обратное отображение силы в номинал.
    pub const fn from_strength(strength: u8) -> Option<Self> {
        match strength {
            1..=13 => Some(Rank(strength + 2)),
            14 => Some(Rank(1)),
            15 => Some(Rank(2)),
            _ => None,
        }
    }

    /// Все номиналы в порядке возрастания силы.
    pub fn all_by_strength() -> impl Iterator<Item = Rank> {
        (1..=15u8).filter_map(Rank::from_strength)
    }
}

impl TryFrom<u8> for Rank {
    type Error = TileParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or(TileParseError::InvalidRank(value.to_string()))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

/// Тайл колоды (60 штук: 4 масти × 15 номиналов).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tile {
    pub suit: Suit,
    pub rank: Rank,
}

impl Tile {
    /// Самый слабый тайл колоды: его владелец открывает раздачу.
    pub const OPENING: Tile = Tile::new(Suit::Cloud, Rank::THREE);

    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Удобный конструктор для тестов и CLI. `None`, если номинал вне 1..=15.
    pub fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        Rank::new(rank).map(|r| Tile::new(suit, r))
    }

    pub const fn strength(&self) -> u8 {
        self.rank.strength()
    }
}

impl Ord for Tile {
    /// Сначала сила номинала, при равенстве сила масти.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank
            .strength()
            .cmp(&other.rank.strength())
            .then_with(|| self.suit.power().cmp(&other.suit.power()))
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ошибка разбора тайла из строки / числа.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TileParseError {
    #[error("Неверный формат тайла: {0} (ожидается suit-rank, например sun-12)")]
    BadFormat(String),

    #[error("Неизвестная масть: {0}")]
    InvalidSuit(String),

    #[error("Номинал вне диапазона 1..=15: {0}")]
    InvalidRank(String),
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Cloud => "cloud",
            Suit::Star => "star",
            Suit::Moon => "moon",
            Suit::Sun => "sun",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Tile {
    /// Формат вида `cloud-3`, `sun-12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

impl FromStr for Suit {
    type Err = TileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cloud" => Ok(Suit::Cloud),
            "star" => Ok(Suit::Star),
            "moon" => Ok(Suit::Moon),
            "sun" => Ok(Suit::Sun),
            _ => Err(TileParseError::InvalidSuit(s.to_string())),
        }
    }
}

/// Парсинг строки вида "cloud-3", "Sun-12".
impl FromStr for Tile {
    type Err = TileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit_part, rank_part) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| TileParseError::BadFormat(s.to_string()))?;

        let suit: Suit = suit_part.parse()?;
        let rank_value: u8 = rank_part
            .parse()
            .map_err(|_| TileParseError::InvalidRank(rank_part.to_string()))?;
        let rank = Rank::try_from(rank_value)?;

        Ok(Tile { suit, rank })
    }
}
