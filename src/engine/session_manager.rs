// src/engine/session_manager.rs

use thiserror::Error;
use tracing::info;

use crate::domain::{GameRules, PlayerIndex, Tile};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::errors::EngineError;
use crate::engine::session::{Session, SessionEvent};
use crate::engine::RandomSource;

/// Ошибки уровня менеджера (над движком одной сессии).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ManagerError {
    /// Сессия уже занимает слот (в том числе завершённая, но не сброшенная).
    #[error("Сессия уже запущена")]
    SessionAlreadyActive,

    /// Нет активной сессии.
    #[error("Нет активной сессии")]
    NoActiveSession,

    /// Проброшенная ошибка из движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Менеджер сессии:
/// - хранит не более одной сессии (пустой слот = лобби);
/// - владеет RNG, которым перемешиваются колоды;
/// - даёт методы start/play/pass/reset поверх `Session`.
pub struct SessionManager<R: RandomSource> {
    rules: GameRules,
    rng: R,
    session: Option<Session>,
}

impl<R: RandomSource> SessionManager<R> {
    pub fn new(rules: GameRules, rng: R) -> Self {
        Self {
            rules,
            rng,
            session: None,
        }
    }

    pub fn with_default_rules(rng: R) -> Self {
        Self::new(GameRules::default(), rng)
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Запустить сессию на `num_players` игроков.
    pub fn start_session(&mut self, num_players: usize) -> Result<&Session, ManagerError> {
        if self.session.is_some() {
            return Err(ManagerError::SessionAlreadyActive);
        }

        let session = Session::start(num_players, self.rules.clone(), &mut self.rng)?;
        Ok(self.session.insert(session))
    }

    /// Поставить уже собранную сессию (тесты, реплеи).
    pub fn install_session(&mut self, session: Session) -> Result<&Session, ManagerError> {
        if self.session.is_some() {
            return Err(ManagerError::SessionAlreadyActive);
        }
        Ok(self.session.insert(session))
    }

    pub fn play_tiles(
        &mut self,
        player: PlayerIndex,
        tiles: &[Tile],
    ) -> Result<SessionEvent, ManagerError> {
        let session = self.session.as_mut().ok_or(ManagerError::NoActiveSession)?;
        Ok(session.play_tiles(player, tiles, &mut self.rng)?)
    }

    pub fn pass_turn(&mut self, player: PlayerIndex) -> Result<SessionEvent, ManagerError> {
        let session = self.session.as_mut().ok_or(ManagerError::NoActiveSession)?;
        Ok(session.pass_turn(player)?)
    }

    pub fn apply_action(&mut self, action: PlayerAction) -> Result<SessionEvent, ManagerError> {
        match action.kind {
            PlayerActionKind::Play(tiles) => self.play_tiles(action.player, &tiles),
            PlayerActionKind::Pass => self.pass_turn(action.player),
        }
    }

    /// Сбросить слот в лобби. Ничего не происходит, если сессии нет.
    pub fn reset_session(&mut self) {
        if self.session.take().is_some() {
            info!("session reset");
        }
    }
}
