use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::domain::tile::{Rank, Suit, Tile};

/// Размер полной колоды.
pub const DECK_SIZE: usize = 60;

/// Колода тайлов. В домене это просто упорядоченный список.
/// Перемешивание делает engine (через RandomSource), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub tiles: Vec<Tile>,
}

impl Deck {
    /// Полная колода из 60 тайлов в порядке:
    /// Cloud 1..15, Star 1..15, Moon 1..15, Sun 1..15.
    pub fn full_60() -> Self {
        let mut tiles = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for value in Rank::MIN..=Rank::MAX {
                if let Some(rank) = Rank::new(value) {
                    tiles.push(Tile::new(suit, rank));
                }
            }
        }
        Deck { tiles }
    }

    pub fn empty() -> Self {
        Deck { tiles: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Взять один тайл сверху колоды.
    pub fn draw_one(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Раздать по кругу: по одному тайлу каждому игроку, пока у всех не будет
    /// `quota` тайлов или колода не закончится. Остаток остаётся в колоде.
    pub fn deal_round_robin(&mut self, players: usize, quota: usize) -> Vec<Hand> {
        let mut hands = vec![Hand::new(); players];

        'deal: for _round in 0..quota {
            for hand in hands.iter_mut() {
                match self.draw_one() {
                    Some(tile) => hand.insert(tile),
                    None => break 'deal,
                }
            }
        }

        hands
    }
}
