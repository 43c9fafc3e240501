use serde::{Deserialize, Serialize};

use crate::domain::{Money, PlayerIndex, Tile};
use crate::engine::{DealPhase, FinalRanking, Payment, RoundResult};
use crate::eval::{ComboKind, Combination, Representative};

/// DTO ведущей комбинации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombinationDto {
    pub kind: ComboKind,
    /// Например "7 Pair".
    pub description: String,
    /// Для флеша 5 тайлов по убыванию, иначе один тайл.
    pub representative: Vec<Tile>,
}

impl From<&Combination> for CombinationDto {
    fn from(c: &Combination) -> Self {
        let representative = match c.representative {
            Representative::Single(tile) => vec![tile],
            Representative::Flush(tiles) => tiles.to_vec(),
        };
        Self {
            kind: c.kind,
            description: c.describe(),
            representative,
        }
    }
}

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub index: PlayerIndex,
    pub display_name: String,
    pub money: Money,
    pub tile_count: usize,
    pub passed: bool,
    pub is_current: bool,
    /// Тайлы показываются только для "героя" или в режиме администратора.
    pub hand: Option<Vec<Tile>>,
}

/// DTO итога раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResultDto {
    pub round: u32,
    pub winner: PlayerIndex,
    pub final_hand_sizes: Vec<usize>,
    pub payments: Vec<Payment>,
    /// Строки вида "P2 → P1: 4".
    pub payment_lines: Vec<String>,
    pub ledger: Vec<Money>,
}

impl From<&RoundResult> for RoundResultDto {
    fn from(r: &RoundResult) -> Self {
        Self {
            round: r.round,
            winner: r.winner,
            final_hand_sizes: r.final_hand_sizes.clone(),
            payments: r.payments.clone(),
            payment_lines: r.payments.iter().map(ToString::to_string).collect(),
            ledger: r.ledger.clone(),
        }
    }
}

/// DTO итоговой таблицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalRankingDto {
    pub ranking: FinalRanking,
    /// Строки вида "1: P3 (41)".
    pub ranking_lines: Vec<String>,
    /// Номера банкротов для отображения ("P2").
    pub bankrupt_lines: Vec<String>,
}

impl From<&FinalRanking> for FinalRankingDto {
    fn from(r: &FinalRanking) -> Self {
        Self {
            ranking: r.clone(),
            ranking_lines: r
                .survivors
                .iter()
                .map(|e| format!("{}: P{} ({})", e.place, e.player + 1, e.money))
                .collect(),
            bankrupt_lines: r.bankrupt.iter().map(|p| format!("P{}", p + 1)).collect(),
        }
    }
}

/// Снапшот раздачи: всё, что нужно фронту для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealSnapshot {
    pub round_number: u32,
    pub num_players: usize,
    pub phase: DealPhase,
    pub current_player: PlayerIndex,
    pub last_to_act: PlayerIndex,
    pub leading: Option<CombinationDto>,
    pub last_played_tiles: Vec<Tile>,
    pub passed_players: Vec<PlayerIndex>,
    pub players: Vec<PlayerViewDto>,
    /// Последние события раздачи, от старых к новым.
    pub log: Vec<String>,
    pub last_round: Option<RoundResultDto>,
    pub final_ranking: Option<FinalRankingDto>,
    pub session_finished: bool,
}

/// Куда доставлять ответ.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Delivery {
    /// Всем участникам.
    Broadcast,
    /// Только игроку, который действовал.
    ActorOnly,
    /// Никому: ничего не изменилось.
    Silent,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Сессия создана, первая раздача началась.
    SessionStarted(DealSnapshot),

    /// Обновлённое состояние раздачи.
    State(DealSnapshot),

    /// Раздача закончилась, началась следующая.
    RoundFinished {
        result: RoundResultDto,
        snapshot: DealSnapshot,
    },

    /// Сессия окончена.
    GameOver {
        result: RoundResultDto,
        ranking: FinalRankingDto,
        snapshot: DealSnapshot,
    },

    /// Повторный пас: состояние не изменилось.
    Ignored,

    /// Слот сброшен в лобби.
    Reset,
}

impl CommandResponse {
    pub fn delivery(&self) -> Delivery {
        match self {
            CommandResponse::Ignored => Delivery::Silent,
            _ => Delivery::Broadcast,
        }
    }

    pub fn snapshot(&self) -> Option<&DealSnapshot> {
        match self {
            CommandResponse::SessionStarted(s) | CommandResponse::State(s) => Some(s),
            CommandResponse::RoundFinished { snapshot, .. }
            | CommandResponse::GameOver { snapshot, .. } => Some(snapshot),
            CommandResponse::Ignored | CommandResponse::Reset => None,
        }
    }
}
