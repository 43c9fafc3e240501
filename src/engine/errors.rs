use crate::domain::rules::RulesError;
use crate::domain::PlayerIndex;

use thiserror::Error;

/// Ошибки игрового движка.
///
/// Всё, кроме `Rules` и `Internal`, это отклонённые действия игрока:
/// состояние при них не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Сейчас не ход игрока P{}", .0 + 1)]
    NotYourTurn(PlayerIndex),

    #[error("Игрок P{} уже спасовал в этом круге", .0 + 1)]
    AlreadyPassed(PlayerIndex),

    #[error("Недопустимая комбинация")]
    InvalidCombination,

    #[error("Комбинация слабее текущей")]
    TooWeak,

    #[error("Ведущий круга не может пасовать")]
    LeaderMustPlay,

    #[error("Этих тайлов нет в руке игрока")]
    TilesNotInHand,

    #[error("Игрока с индексом {0} нет за столом")]
    InvalidPlayer(PlayerIndex),

    #[error("Раздача уже завершена")]
    DealOver,

    #[error("Сессия завершена")]
    SessionFinished,

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Отклонённое действие (нарушено предусловие хода), а не сбой.
    pub fn is_rejected_action(&self) -> bool {
        !matches!(self, EngineError::Rules(_) | EngineError::Internal(_))
    }
}
