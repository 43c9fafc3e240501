//! Движок настольной игры Lexio (тайлы, комбинации, раздачи, сессии).
//!
//! Слои:
//! - `domain` – тайлы, колода, рука, деньги, правила;
//! - `eval` – классификация и сравнение комбинаций, поиск допустимых ходов;
//! - `engine` – раздача, расчёт, сессия и её слот;
//! - `api` – команды/запросы/DTO для транспорта;
//! - `infra` – RNG, логирование, общий доступ из нескольких потоков.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use api::{execute_command, execute_query, ApiError, Command, CommandResponse, Query};
pub use domain::{GameRules, Money, PlayerIndex, Suit, Tile};
pub use engine::{DealEngine, EngineError, Session, SessionManager};
pub use eval::{beats, classify, ComboKind, Combination};
