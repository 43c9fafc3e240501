use core::fmt;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;
use crate::eval::Combination;

/// Событие раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum DealEvent {
    /// Новая раздача началась.
    RoundStarted { round: u32, leader: PlayerIndex },

    /// Игрок выложил комбинацию.
    Played {
        player: PlayerIndex,
        combination: Combination,
    },

    /// Игрок спасовал.
    Passed { player: PlayerIndex },

    /// Все остальные спасовали: круг начинается заново.
    CycleReset { leader: PlayerIndex },

    /// Игрок избавился от всех тайлов.
    DealWon { winner: PlayerIndex },
}

impl fmt::Display for DealEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealEvent::RoundStarted { round, .. } => write!(f, "Round {round} started!"),
            DealEvent::Played {
                player,
                combination,
            } => write!(f, "P{}: played {}.", player + 1, combination.describe()),
            DealEvent::Passed { player } => write!(f, "P{}: passed.", player + 1),
            DealEvent::CycleReset { leader } => {
                write!(f, "P{} leads a new cycle.", leader + 1)
            }
            DealEvent::DealWon { winner } => write!(f, "P{} won the round!", winner + 1),
        }
    }
}

/// Ограниченный лог раздачи: при переполнении выбрасывается самое старое событие.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(from = "DealLogRepr")]
pub struct DealLog {
    capacity: usize,
    events: VecDeque<DealEvent>,
}

#[derive(Deserialize)]
struct DealLogRepr {
    capacity: usize,
    events: VecDeque<DealEvent>,
}

impl From<DealLogRepr> for DealLog {
    /// Ёмкость не меньше 1; лишние старые события отбрасываются.
    fn from(repr: DealLogRepr) -> Self {
        let mut log = DealLog::new(repr.capacity);
        for event in repr.events {
            log.push(event);
        }
        log
    }
}

impl DealLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn push(&mut self, event: DealEvent) {
        while self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn events(&self) -> impl Iterator<Item = &DealEvent> {
        self.events.iter()
    }

    pub fn last(&self) -> Option<&DealEvent> {
        self.events.back()
    }

    /// Строки для отображения, от старых к новым.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}
