use crate::domain::hand::Hand;
use crate::domain::tile::Tile;

use super::classifier::classify;
use super::combination::Combination;
use super::comparator::beats;

/// Один возможный ход: тайлы + их классификация.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidatePlay {
    pub tiles: Vec<Tile>,
    pub combination: Combination,
}

/// Перебрать все подмножества руки размером 1, 2, 3 и 5 и оставить те,
/// которые являются комбинацией и бьют ведущую.
pub fn legal_plays(hand: &Hand, leader: Option<&Combination>) -> Vec<CandidatePlay> {
    let tiles = hand.tiles();
    let n = tiles.len();
    let mut plays = Vec::new();

    let mut consider = |subset: &[Tile]| {
        if let Some(combination) = classify(subset) {
            if beats(&combination, leader) {
                plays.push(CandidatePlay {
                    tiles: subset.to_vec(),
                    combination,
                });
            }
        }
    };

    for a in 0..n {
        consider(&[tiles[a]]);
    }

    for a in 0..n {
        for b in (a + 1)..n {
            consider(&[tiles[a], tiles[b]]);
        }
    }

    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                consider(&[tiles[a], tiles[b], tiles[c]]);
            }
        }
    }

    if n >= 5 {
        for a in 0..(n - 4) {
            for b in (a + 1)..(n - 3) {
                for c in (b + 1)..(n - 2) {
                    for d in (c + 1)..(n - 1) {
                        for e in (d + 1)..n {
                            consider(&[tiles[a], tiles[b], tiles[c], tiles[d], tiles[e]]);
                        }
                    }
                }
            }
        }
    }

    plays
}

/// Самый "дешёвый" ход: младший вид, затем младший представитель.
pub fn weakest_legal_play(hand: &Hand, leader: Option<&Combination>) -> Option<CandidatePlay> {
    legal_plays(hand, leader)
        .into_iter()
        .min_by(|x, y| {
            x.combination
                .kind
                .cmp(&y.combination.kind)
                .then_with(|| {
                    x.combination
                        .representative
                        .top()
                        .cmp(&y.combination.representative.top())
                })
        })
}
