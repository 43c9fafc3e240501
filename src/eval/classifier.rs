use crate::domain::tile::{Rank, Suit, Tile};

use super::combination::{ComboKind, Combination};
use super::lookup_tables::{highest_strength, is_contiguous_run, mask_from_ranks};

/// Главная функция: классифицировать набор тайлов.
///
/// Допустимые размеры: 1, 2, 3 и 5. `None` = недопустимая комбинация.
/// Функция чистая: один и тот же набор всегда даёт один и тот же результат.
pub fn classify(tiles: &[Tile]) -> Option<Combination> {
    let highest = *tiles.iter().max()?;

    match tiles.len() {
        1 => Some(Combination::single(ComboKind::Single, highest)),
        2 if all_ranks_same(tiles) => Some(Combination::single(ComboKind::Pair, highest)),
        3 if all_ranks_same(tiles) => Some(Combination::single(ComboKind::Triple, highest)),
        5 => {
            let five: [Tile; 5] = tiles.try_into().ok()?;
            classify_five(&five)
        }
        _ => None,
    }
}

/// Оценка строго 5-тайловой комбинации.
fn classify_five(tiles: &[Tile; 5]) -> Option<Combination> {
    if let Some(wild) = classify_wildcard_straight(tiles) {
        return Some(wild);
    }

    let highest = *tiles.iter().max()?;

    // Подсчёт номиналов: (номинал, сколько раз).
    let mut rank_counts: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for tile in tiles.iter() {
        match rank_counts.iter_mut().find(|(r, _)| *r == tile.rank) {
            Some((_, c)) => *c += 1,
            None => rank_counts.push((tile.rank, 1)),
        }
    }

    let mut pattern: Vec<u8> = rank_counts.iter().map(|(_, c)| *c).collect();
    pattern.sort_unstable();

    let mask = mask_from_ranks(tiles.iter().map(|t| t.rank));
    let is_straight = rank_counts.len() == 5 && is_contiguous_run(mask, 5);
    let is_flush = all_suits_same(tiles);

    if is_straight && is_flush {
        return Some(Combination::single(ComboKind::StraightFlush, highest));
    }

    if pattern == [1, 4] {
        let rep = highest_of_rank(tiles, &rank_counts, 4)?;
        return Some(Combination::single(ComboKind::FourOfAKind, rep));
    }

    if pattern == [2, 3] {
        let rep = highest_of_rank(tiles, &rank_counts, 3)?;
        return Some(Combination::single(ComboKind::FullHouse, rep));
    }

    if is_flush {
        let mut sorted = *tiles;
        sorted.sort_by(|a, b| b.cmp(a));
        return Some(Combination::flush(sorted));
    }

    if is_straight {
        return Some(Combination::single(ComboKind::Straight, highest));
    }

    None
}

/// Единица как джокер: если остальные четыре номинала идут подряд,
/// единица встаёт на место следующего за ними номинала.
///
/// Четыре тайла одной масти дают стрит-флеш этой масти, иначе обычный стрит,
/// представитель которого берёт масть старшего реального тайла.
fn classify_wildcard_straight(tiles: &[Tile; 5]) -> Option<Combination> {
    let mask = mask_from_ranks(tiles.iter().map(|t| t.rank));
    if mask.count_ones() != 5 || !tiles.iter().any(|t| t.rank == Rank::ONE) {
        return None;
    }

    let others: Vec<Tile> = tiles
        .iter()
        .copied()
        .filter(|t| t.rank != Rank::ONE)
        .collect();
    let others_mask = mask_from_ranks(others.iter().map(|t| t.rank));
    if !is_contiguous_run(others_mask, 4) {
        return None;
    }

    let virtual_rank = Rank::from_strength(highest_strength(others_mask)? + 1)?;

    match shared_suit(&others) {
        Some(suit) => Some(Combination::single(
            ComboKind::StraightFlush,
            Tile::new(suit, virtual_rank),
        )),
        None => {
            let top_suit = tiles.iter().max()?.suit;
            Some(Combination::single(
                ComboKind::Straight,
                Tile::new(top_suit, virtual_rank),
            ))
        }
    }
}

fn all_ranks_same(tiles: &[Tile]) -> bool {
    tiles.windows(2).all(|w| w[0].rank == w[1].rank)
}

fn all_suits_same(tiles: &[Tile]) -> bool {
    shared_suit(tiles).is_some()
}

fn shared_suit(tiles: &[Tile]) -> Option<Suit> {
    let first = tiles.first()?.suit;
    tiles.iter().all(|t| t.suit == first).then_some(first)
}

/// Старший тайл того номинала, который встречается `count` раз.
fn highest_of_rank(tiles: &[Tile], rank_counts: &[(Rank, u8)], count: u8) -> Option<Tile> {
    let (rank, _) = rank_counts.iter().find(|(_, c)| *c == count)?;
    tiles.iter().filter(|t| t.rank == *rank).max().copied()
}
