//! Игровой движок: раздача, очерёдность ходов, расчёт, сессия.
//!
//! Высокоуровневые объекты: `DealEngine` и `Session`.
//! Основные операции:
//!   - `DealEngine::play_tiles` / `DealEngine::pass_turn` – ходы внутри раздачи
//!   - `settle` – денежный расчёт по итогам раздачи
//!   - `SessionManager` – единственный слот сессии (старт / ходы / сброс)

pub mod actions;
pub mod deal;
pub mod deal_log;
pub mod errors;
pub mod session;
pub mod session_manager;
pub mod settlement;
pub mod turn_order;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use deal::{DealEngine, DealPhase, PassOutcome, PlayOutcome};
pub use deal_log::{DealEvent, DealLog};
pub use errors::EngineError;
pub use session::{FinalRanking, RankingEntry, RoundResult, Session, SessionEvent, SessionPhase};
pub use session_manager::{ManagerError, SessionManager};
pub use settlement::{settle, Payment, SettlementOutcome};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайный индекс в `0..upper`.
    fn gen_index(&mut self, upper: usize) -> usize;
}
