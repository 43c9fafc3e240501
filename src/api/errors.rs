use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::dto::Delivery;
use crate::engine::{EngineError, ManagerError};

/// Почему действие игрока отклонено. Состояние при этом не меняется.
#[derive(Clone, Copy, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum RejectReason {
    #[error("Сейчас не ваш ход")]
    NotYourTurn,
    #[error("Вы уже спасовали и не участвуете в этом круге")]
    AlreadyPassed,
    #[error("Недопустимая комбинация")]
    InvalidCombination,
    #[error("Нельзя выложить более слабую комбинацию")]
    TooWeak,
    #[error("Ведущий круга не может пасовать")]
    LeaderMustPlay,
    #[error("Этих тайлов нет у вас в руке")]
    TilesNotInHand,
    #[error("Такого игрока нет за столом")]
    InvalidPlayer,
    #[error("Раздача уже завершена")]
    DealOver,
    #[error("Сессия завершена")]
    SessionFinished,
}

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Игрок нарушил правила хода.
    #[error("{0}")]
    Rejected(RejectReason),

    /// Попытка создать вторую сессию.
    #[error("Сессия уже запущена")]
    SessionAlreadyActive,

    /// Действие без активной сессии.
    #[error("Нет активной сессии")]
    NoActiveSession,

    /// Неправильные входные данные (битый JSON, неизвестная масть/номинал).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Неверные правила или число игроков.
    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    /// Внутренняя ошибка движка.
    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl ApiError {
    /// Отклонённое игровое действие (а не ошибка интеграции).
    pub fn is_rejected_action(&self) -> bool {
        matches!(self, ApiError::Rejected(_) | ApiError::BadRequest(_))
    }

    /// Ошибки никогда не рассылаются всем: ответ получает только отправитель.
    pub fn delivery(&self) -> Delivery {
        Delivery::ActorOnly
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let reason = match err {
            EngineError::NotYourTurn(_) => RejectReason::NotYourTurn,
            EngineError::AlreadyPassed(_) => RejectReason::AlreadyPassed,
            EngineError::InvalidCombination => RejectReason::InvalidCombination,
            EngineError::TooWeak => RejectReason::TooWeak,
            EngineError::LeaderMustPlay => RejectReason::LeaderMustPlay,
            EngineError::TilesNotInHand => RejectReason::TilesNotInHand,
            EngineError::InvalidPlayer(_) => RejectReason::InvalidPlayer,
            EngineError::DealOver => RejectReason::DealOver,
            EngineError::SessionFinished => RejectReason::SessionFinished,
            EngineError::Rules(e) => return ApiError::InvalidConfig(e.to_string()),
            EngineError::Internal(msg) => return ApiError::Internal(msg.to_string()),
        };
        ApiError::Rejected(reason)
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::SessionAlreadyActive => ApiError::SessionAlreadyActive,
            ManagerError::NoActiveSession => ApiError::NoActiveSession,
            ManagerError::Engine(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
