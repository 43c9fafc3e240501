use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{GameRules, Money, PlayerIndex, Tile};
use crate::engine::deal::{DealEngine, PassOutcome, PlayOutcome};
use crate::engine::errors::EngineError;
use crate::engine::settlement::{settle, Payment};
use crate::engine::RandomSource;

/// Итог одной раздачи для отображения и истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    pub winner: PlayerIndex,
    pub final_hand_sizes: Vec<usize>,
    pub payments: Vec<Payment>,
    /// Балансы после расчёта.
    pub ledger: Vec<Money>,
}

/// Место выжившего игрока в итоговой таблице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankingEntry {
    /// Место, начиная с 1.
    pub place: u32,
    pub player: PlayerIndex,
    pub money: Money,
}

/// Итоговое распределение мест.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalRanking {
    /// Игроки с положительным балансом: по убыванию денег, при равенстве по индексу.
    pub survivors: Vec<RankingEntry>,
    /// Банкроты в порядке индексов.
    pub bankrupt: Vec<PlayerIndex>,
}

impl FinalRanking {
    pub fn from_ledger(ledger: &[Money]) -> Self {
        let mut survivors: Vec<(PlayerIndex, Money)> = ledger
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_bankrupt())
            .map(|(i, m)| (i, *m))
            .collect();
        survivors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let survivors = survivors
            .into_iter()
            .enumerate()
            .map(|(place, (player, money))| RankingEntry {
                place: place as u32 + 1,
                player,
                money,
            })
            .collect();

        let bankrupt = ledger
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_bankrupt())
            .map(|(i, _)| i)
            .collect();

        Self {
            survivors,
            bankrupt,
        }
    }
}

/// Фаза сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Finished(FinalRanking),
}

/// Что произошло после действия игрока.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Раздача продолжается.
    Continue,
    /// Круг сброшен, новый круг начинает `leader`.
    CycleReset { leader: PlayerIndex },
    /// Повторный пас, состояние не изменилось.
    PassIgnored,
    /// Раздача закончилась, началась следующая.
    RoundFinished(RoundResult),
    /// Кто-то обанкротился: сессия окончена.
    GameOver {
        result: RoundResult,
        ranking: FinalRanking,
    },
}

/// Игровая сессия: серия раздач с общим балансом.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub rules: GameRules,
    pub num_players: usize,
    pub ledger: Vec<Money>,
    pub round_number: u32,
    pub deal: DealEngine,
    pub phase: SessionPhase,
    /// Итог предыдущей раздачи (если была).
    pub last_round: Option<RoundResult>,
}

impl Session {
    /// Старт сессии: у всех стартовые деньги, раздача номер 1.
    pub fn start<R: RandomSource>(
        num_players: usize,
        rules: GameRules,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        rules.validate_full()?;
        rules.tiles_per_player(num_players)?;

        let ledger = vec![rules.starting_money; num_players];
        let deal = DealEngine::start(1, num_players, &rules, rng)?;

        info!(num_players, starting_money = %rules.starting_money, "session started");

        Ok(Self {
            rules,
            num_players,
            ledger,
            round_number: 1,
            deal,
            phase: SessionPhase::InProgress,
            last_round: None,
        })
    }

    /// Сессия с заранее подготовленной раздачей (тесты, реплеи).
    pub fn with_deal(rules: GameRules, ledger: Vec<Money>, deal: DealEngine) -> Self {
        Self {
            num_players: deal.num_players,
            round_number: deal.round_number,
            rules,
            ledger,
            deal,
            phase: SessionPhase::InProgress,
            last_round: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, SessionPhase::Finished(_))
    }

    pub fn final_ranking(&self) -> Option<&FinalRanking> {
        match &self.phase {
            SessionPhase::Finished(ranking) => Some(ranking),
            SessionPhase::InProgress => None,
        }
    }

    pub fn play_tiles<R: RandomSource>(
        &mut self,
        player: PlayerIndex,
        tiles: &[Tile],
        rng: &mut R,
    ) -> Result<SessionEvent, EngineError> {
        self.ensure_in_progress()?;

        match self.deal.play_tiles(player, tiles)? {
            PlayOutcome::Continue { .. } => Ok(SessionEvent::Continue),
            PlayOutcome::DealWon { winner } => self.finish_deal(winner, rng),
        }
    }

    pub fn pass_turn(&mut self, player: PlayerIndex) -> Result<SessionEvent, EngineError> {
        self.ensure_in_progress()?;

        Ok(match self.deal.pass_turn(player)? {
            PassOutcome::Continue { .. } => SessionEvent::Continue,
            PassOutcome::CycleReset { leader } => SessionEvent::CycleReset { leader },
            PassOutcome::Ignored => SessionEvent::PassIgnored,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.is_finished() {
            return Err(EngineError::SessionFinished);
        }
        Ok(())
    }

    /// Расчёт, проверка банкротства и либо новая раздача, либо итоговые места.
    fn finish_deal<R: RandomSource>(
        &mut self,
        winner: PlayerIndex,
        rng: &mut R,
    ) -> Result<SessionEvent, EngineError> {
        let outcome = settle(&self.deal.hands, winner, &self.ledger);

        let result = RoundResult {
            round: self.round_number,
            winner,
            final_hand_sizes: self.deal.hand_sizes(),
            payments: outcome.payments,
            ledger: outcome.ledger.clone(),
        };

        self.ledger = outcome.ledger;
        self.last_round = Some(result.clone());

        info!(
            round = self.round_number,
            winner,
            payments = result.payments.len(),
            session_over = outcome.session_over,
            "deal settled"
        );

        if outcome.session_over {
            let ranking = FinalRanking::from_ledger(&self.ledger);
            self.phase = SessionPhase::Finished(ranking.clone());
            info!(
                rounds = self.round_number,
                bankrupt = ranking.bankrupt.len(),
                "session finished"
            );
            return Ok(SessionEvent::GameOver { result, ranking });
        }

        self.round_number += 1;
        self.deal = DealEngine::start(self.round_number, self.num_players, &self.rules, rng)?;

        Ok(SessionEvent::RoundFinished(result))
    }
}
