use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{Deck, GameRules, Hand, PlayerIndex, Tile};
use crate::engine::deal_log::{DealEvent, DealLog};
use crate::engine::errors::EngineError;
use crate::engine::turn_order::{holder_of, next_active_player};
use crate::engine::validation::{validate_pass, validate_play, PassCheck};
use crate::engine::RandomSource;
use crate::eval::Combination;

/// Фаза раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealPhase {
    /// Ведущей комбинации нет: текущий игрок обязан выложить тайлы.
    AwaitingLead,
    /// Есть ведущая комбинация: можно перебить или спасовать.
    InPlay,
    /// Игрок избавился от всех тайлов.
    DealOver { winner: PlayerIndex },
}

/// Результат успешного хода.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Раздача продолжается, ход у `next`.
    Continue { next: PlayerIndex },
    /// Рука опустела, раздача окончена.
    DealWon { winner: PlayerIndex },
}

/// Результат паса.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    /// Ход переходит к `next`.
    Continue { next: PlayerIndex },
    /// Все, кроме одного, спасовали: новый круг начинает `leader`.
    CycleReset { leader: PlayerIndex },
    /// Повторный пас: ничего не изменилось.
    Ignored,
}

/// Состояние одной раздачи.
///
/// Поля открыты для чтения (снапшоты, тесты); менять состояние следует
/// только через `play_tiles` / `pass_turn`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DealEngine {
    pub round_number: u32,
    pub num_players: usize,
    pub hands: Vec<Hand>,
    /// Нерозданный остаток колоды.
    pub undealt: Deck,
    /// Чей сейчас ход.
    pub current_player: PlayerIndex,
    /// Ведущая комбинация текущего круга.
    pub leading: Option<Combination>,
    pub last_played_tiles: Vec<Tile>,
    /// Кто спасовал в текущем круге.
    pub passed: BTreeSet<PlayerIndex>,
    /// Последний, кто выкладывал тайлы (или открывающий игрок).
    pub last_to_act: PlayerIndex,
    pub phase: DealPhase,
    pub log: DealLog,
}

impl DealEngine {
    /// Старт новой раздачи:
    /// - перемешивает полную колоду;
    /// - раздаёт по кругу квоту тайлов;
    /// - первым ходит владелец открывающего тайла (если его нет ни у кого,
    ///   случайный игрок).
    pub fn start<R: RandomSource>(
        round_number: u32,
        num_players: usize,
        rules: &GameRules,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let quota = rules.tiles_per_player(num_players)?;

        let mut deck = Deck::full_60();
        rng.shuffle(&mut deck.tiles);
        let hands = deck.deal_round_robin(num_players, quota);

        let leader = match holder_of(&hands, &rules.opening_tile) {
            Some(p) => p,
            None => {
                warn!(round_number, "opening tile was not dealt, picking a random leader");
                rng.gen_index(num_players)
            }
        };

        info!(round_number, num_players, leader, "deal started");

        Ok(Self::from_hands(
            round_number,
            hands,
            deck,
            leader,
            rules.log_capacity,
        ))
    }

    /// Раздача с заранее известными руками и ведущим.
    pub fn from_hands(
        round_number: u32,
        hands: Vec<Hand>,
        undealt: Deck,
        leader: PlayerIndex,
        log_capacity: usize,
    ) -> Self {
        let mut log = DealLog::new(log_capacity);
        log.push(DealEvent::RoundStarted {
            round: round_number,
            leader,
        });

        Self {
            round_number,
            num_players: hands.len(),
            hands,
            undealt,
            current_player: leader,
            leading: None,
            last_played_tiles: Vec::new(),
            passed: BTreeSet::new(),
            last_to_act: leader,
            phase: DealPhase::AwaitingLead,
            log,
        }
    }

    /// Выложить тайлы. При ошибке состояние не меняется.
    pub fn play_tiles(
        &mut self,
        player: PlayerIndex,
        tiles: &[Tile],
    ) -> Result<PlayOutcome, EngineError> {
        let combination = validate_play(self, player, tiles)?;

        let empties_hand = self.hands[player].len() == tiles.len();
        let next = if empties_hand {
            None
        } else {
            Some(
                next_active_player(player, self.num_players, &self.passed)
                    .ok_or(EngineError::Internal("no active player left after a play"))?,
            )
        };

        if !self.hands[player].remove_tiles(tiles) {
            return Err(EngineError::Internal("validated tiles missing from hand"));
        }

        let mut played = tiles.to_vec();
        played.sort();
        self.leading = Some(combination);
        self.last_played_tiles = played;
        self.last_to_act = player;
        self.log.push(DealEvent::Played {
            player,
            combination,
        });

        debug!(
            round = self.round_number,
            player,
            combination = %combination,
            tiles_left = self.hands[player].len(),
            "tiles played"
        );

        match next {
            None => {
                self.phase = DealPhase::DealOver { winner: player };
                self.log.push(DealEvent::DealWon { winner: player });
                info!(round = self.round_number, winner = player, "deal won");
                Ok(PlayOutcome::DealWon { winner: player })
            }
            Some(next) => {
                self.current_player = next;
                self.phase = DealPhase::InPlay;
                Ok(PlayOutcome::Continue { next })
            }
        }
    }

    /// Спасовать. Повторный пас того же игрока игнорируется.
    pub fn pass_turn(&mut self, player: PlayerIndex) -> Result<PassOutcome, EngineError> {
        if validate_pass(self, player)? == PassCheck::AlreadyPassed {
            return Ok(PassOutcome::Ignored);
        }

        self.passed.insert(player);
        self.log.push(DealEvent::Passed { player });
        debug!(round = self.round_number, player, "player passed");

        let active = self.num_players - self.passed.len();
        if active <= 1 {
            let leader = self.last_to_act;
            self.leading = None;
            self.last_played_tiles.clear();
            self.passed.clear();
            self.current_player = leader;
            self.phase = DealPhase::AwaitingLead;
            self.log.push(DealEvent::CycleReset { leader });
            debug!(round = self.round_number, leader, "play cycle reset");
            return Ok(PassOutcome::CycleReset { leader });
        }

        match next_active_player(player, self.num_players, &self.passed) {
            Some(next) => {
                self.current_player = next;
                Ok(PassOutcome::Continue { next })
            }
            None => Err(EngineError::Internal("every player passed without a cycle reset")),
        }
    }

    pub fn is_deal_over(&self) -> bool {
        matches!(self.phase, DealPhase::DealOver { .. })
    }

    pub fn winner(&self) -> Option<PlayerIndex> {
        match self.phase {
            DealPhase::DealOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn hand(&self, player: PlayerIndex) -> Option<&Hand> {
        self.hands.get(player)
    }

    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::len).collect()
    }

    pub fn has_passed(&self, player: PlayerIndex) -> bool {
        self.passed.contains(&player)
    }
}
