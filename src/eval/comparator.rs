use std::cmp::Ordering;

use super::combination::{Combination, Representative};

/// Бьёт ли `challenger` текущую ведущую комбинацию.
///
/// Нет ведущей: любая валидная комбинация проходит.
/// Равенство никогда не бьёт: игрок должен перебить или спасовать.
pub fn beats(challenger: &Combination, leader: Option<&Combination>) -> bool {
    let Some(leader) = leader else {
        return true;
    };

    match (&challenger.representative, &leader.representative) {
        (Representative::Flush(new_tiles), Representative::Flush(old_tiles)) => {
            for (new_tile, old_tile) in new_tiles.iter().zip(old_tiles.iter()) {
                match new_tile.strength().cmp(&old_tile.strength()) {
                    Ordering::Greater => return true,
                    Ordering::Less => return false,
                    Ordering::Equal => {}
                }
            }
            new_tiles[0].suit.power() > old_tiles[0].suit.power()
        }
        (new_rep, old_rep) => {
            match challenger.kind.kind_rank().cmp(&leader.kind.kind_rank()) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => match (new_rep, old_rep) {
                    (Representative::Single(new_tile), Representative::Single(old_tile)) => {
                        new_tile > old_tile
                    }
                    // Флеш против не-флеша одного вида классификатор не порождает.
                    _ => false,
                },
            }
        }
    }
}
