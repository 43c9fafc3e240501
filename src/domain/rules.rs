// src/domain/rules.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::deck::DECK_SIZE;
use crate::domain::money::Money;
use crate::domain::tile::Tile;

/// Минимальное и максимальное число игроков за столом.
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 5;

/// Ошибки конфигурации правил.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("Некорректная конфигурация правил: {0}")]
    InvalidConfig(String),

    #[error("Поддерживается 3–5 игроков, запрошено {0}")]
    UnsupportedPlayerCount(usize),
}

/// Правила сессии. Всё, что можно настроить до старта игры.
///
/// Значения по умолчанию соответствуют классической партии:
/// стартовый банк 27, лог на 15 строк, квоты 12/13/12 тайлов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameRules {
    /// Сколько денег у каждого игрока в начале сессии.
    pub starting_money: Money,

    /// Сколько последних событий хранит лог раздачи.
    pub log_capacity: usize,

    /// Тайл, владелец которого ходит первым в каждой раздаче.
    pub opening_tile: Tile,

    /// Квота тайлов на игрока для 3, 4 и 5 игроков.
    pub quota_three_players: usize,
    pub quota_four_players: usize,
    pub quota_five_players: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_money: Money(27),
            log_capacity: 15,
            opening_tile: Tile::OPENING,
            quota_three_players: 12,
            quota_four_players: 13,
            quota_five_players: 12,
        }
    }
}

impl GameRules {
    /// Сколько тайлов раздаётся каждому игроку.
    pub fn tiles_per_player(&self, num_players: usize) -> Result<usize, RulesError> {
        match num_players {
            3 => Ok(self.quota_three_players),
            4 => Ok(self.quota_four_players),
            5 => Ok(self.quota_five_players),
            n => Err(RulesError::UnsupportedPlayerCount(n)),
        }
    }

    /// Жёсткая валидация конфига.
    pub fn validate_full(&self) -> Result<(), RulesError> {
        if self.starting_money.is_bankrupt() {
            return Err(RulesError::InvalidConfig(
                "GameRules: starting_money <= 0".into(),
            ));
        }

        if self.log_capacity == 0 {
            return Err(RulesError::InvalidConfig(
                "GameRules: log_capacity = 0".into(),
            ));
        }

        for n in MIN_PLAYERS..=MAX_PLAYERS {
            let quota = self.tiles_per_player(n)?;
            if quota == 0 {
                return Err(RulesError::InvalidConfig(format!(
                    "GameRules: quota for {n} players = 0"
                )));
            }
            if quota * n > DECK_SIZE {
                return Err(RulesError::InvalidConfig(format!(
                    "GameRules: {n} players × {quota} tiles exceeds the {DECK_SIZE}-tile deck"
                )));
            }
        }

        Ok(())
    }

    /// Загрузить правила из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rules: GameRules = serde_json::from_str(json)
            .map_err(|e| RulesError::InvalidConfig(format!("GameRules JSON: {e}")))?;
        rules.validate_full()?;
        Ok(rules)
    }
}
