use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;
use crate::engine::{RandomSource, Session, SessionManager};
use crate::infra::mapping::{DefaultNameResolver, PlayerNameResolver};

use super::dto::{CombinationDto, DealSnapshot, FinalRankingDto, PlayerViewDto, RoundResultDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Снапшот текущей раздачи. Рука видна только `viewer`.
    GetSnapshot { viewer: Option<PlayerIndex> },

    /// Есть ли активная сессия.
    GetStatus,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Snapshot(DealSnapshot),
    Status { active: bool, finished: bool },
}

/// Чьи руки раскрывать в снапшоте.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Nobody,
    Player(PlayerIndex),
    /// Режим администратора / реплея.
    Everyone,
}

impl Reveal {
    pub fn shows(&self, player: PlayerIndex) -> bool {
        match self {
            Reveal::Nobody => false,
            Reveal::Player(p) => *p == player,
            Reveal::Everyone => true,
        }
    }
}

impl From<Option<PlayerIndex>> for Reveal {
    fn from(viewer: Option<PlayerIndex>) -> Self {
        viewer.map_or(Reveal::Nobody, Reveal::Player)
    }
}

/// Снапшот сессии с именами по умолчанию ("P1", "P2", ...).
pub fn build_deal_snapshot(session: &Session, reveal: Reveal) -> DealSnapshot {
    build_deal_snapshot_with(session, reveal, &DefaultNameResolver)
}

/// Сформировать снапшот раздачи для фронта.
pub fn build_deal_snapshot_with(
    session: &Session,
    reveal: Reveal,
    names: &impl PlayerNameResolver,
) -> DealSnapshot {
    let deal = &session.deal;

    let players = (0..session.num_players)
        .map(|index| {
            let hand = deal.hand(index);
            PlayerViewDto {
                index,
                display_name: names.resolve_name(index),
                money: session.ledger.get(index).copied().unwrap_or_default(),
                tile_count: hand.map_or(0, |h| h.len()),
                passed: deal.has_passed(index),
                is_current: deal.current_player == index && !deal.is_deal_over(),
                hand: if reveal.shows(index) {
                    hand.map(|h| h.tiles().to_vec())
                } else {
                    None
                },
            }
        })
        .collect();

    DealSnapshot {
        round_number: deal.round_number,
        num_players: session.num_players,
        phase: deal.phase,
        current_player: deal.current_player,
        last_to_act: deal.last_to_act,
        leading: deal.leading.as_ref().map(CombinationDto::from),
        last_played_tiles: deal.last_played_tiles.clone(),
        passed_players: deal.passed.iter().copied().collect(),
        players,
        log: deal.log.messages(),
        last_round: session.last_round.as_ref().map(RoundResultDto::from),
        final_ranking: session.final_ranking().map(FinalRankingDto::from),
        session_finished: session.is_finished(),
    }
}

/// Разобрать запрос из JSON.
pub fn parse_query(raw: &str) -> Result<Query, ApiError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn execute_query<R: RandomSource>(
    manager: &SessionManager<R>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetSnapshot { viewer } => {
            let session = manager.session().ok_or(ApiError::NoActiveSession)?;
            if let Some(v) = viewer {
                if v >= session.num_players {
                    return Err(ApiError::BadRequest(format!("unknown viewer {v}")));
                }
            }
            Ok(QueryResponse::Snapshot(build_deal_snapshot(
                session,
                Reveal::from(viewer),
            )))
        }
        Query::GetStatus => Ok(QueryResponse::Status {
            active: manager.is_active(),
            finished: manager.session().is_some_and(Session::is_finished),
        }),
    }
}
