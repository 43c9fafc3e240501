use serde::{Deserialize, Serialize};

use crate::domain::tile::{Rank, Tile};

/// Рука игрока: тайлы всегда отсортированы по возрастанию силы.
///
/// Десериализация идёт через `from_tiles`, так что порядок во входных
/// данных не важен.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "HandRepr")]
pub struct Hand {
    tiles: Vec<Tile>,
}

#[derive(Deserialize)]
struct HandRepr {
    tiles: Vec<Tile>,
}

impl From<HandRepr> for Hand {
    fn from(repr: HandRepr) -> Self {
        Hand::from_tiles(repr.tiles)
    }
}

impl Hand {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut tiles: Vec<Tile> = tiles.into_iter().collect();
        tiles.sort();
        Self { tiles }
    }

    /// Вставка с сохранением порядка.
    pub fn insert(&mut self, tile: Tile) {
        let pos = self.tiles.partition_point(|t| *t < tile);
        self.tiles.insert(pos, tile);
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.binary_search(tile).is_ok()
    }

    /// Все ли тайлы набора есть в руке. Повтор одного тайла в наборе
    /// считается отсутствием (в руке каждый тайл один).
    pub fn contains_all(&self, tiles: &[Tile]) -> bool {
        tiles.iter().enumerate().all(|(i, tile)| {
            self.contains(tile) && !tiles[..i].contains(tile)
        })
    }

    /// Убрать набор тайлов: либо все, либо ничего.
    pub fn remove_tiles(&mut self, tiles: &[Tile]) -> bool {
        if !self.contains_all(tiles) {
            return false;
        }
        self.tiles.retain(|t| !tiles.contains(t));
        true
    }

    pub fn has_rank(&self, rank: Rank) -> bool {
        self.tiles.iter().any(|t| t.rank == rank)
    }
}
