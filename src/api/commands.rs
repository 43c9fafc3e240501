use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{PlayerIndex, Tile};
use crate::engine::{RandomSource, SessionEvent, SessionManager};

use super::dto::{CommandResponse, FinalRankingDto, RoundResultDto};
use super::errors::ApiError;
use super::queries::{build_deal_snapshot, Reveal};

/// Команда верхнего уровня.
///
/// Транспорт (сокеты, CLI, бот) превращает входящее сообщение в `Command`
/// и передаёт его в `execute_command`. JSON-формат:
/// `{"type":"play_tiles","player_index":0,"tiles":[{"suit":"cloud","rank":3}]}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Создать сессию и раздать первую раздачу.
    StartSession(StartSessionCommand),

    /// Выложить комбинацию.
    PlayTiles(PlayTilesCommand),

    /// Пас.
    PassTurn(PassTurnCommand),

    /// Вернуть слот в лобби.
    ResetSession,
}

/// Создание сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartSessionCommand {
    /// 3–5 игроков.
    pub num_players: usize,
}

/// Ход тайлами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayTilesCommand {
    pub player_index: PlayerIndex,
    pub tiles: Vec<Tile>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassTurnCommand {
    pub player_index: PlayerIndex,
}

impl Command {
    pub fn start(num_players: usize) -> Self {
        Command::StartSession(StartSessionCommand { num_players })
    }

    pub fn play(player_index: PlayerIndex, tiles: Vec<Tile>) -> Self {
        Command::PlayTiles(PlayTilesCommand {
            player_index,
            tiles,
        })
    }

    pub fn pass(player_index: PlayerIndex) -> Self {
        Command::PassTurn(PassTurnCommand { player_index })
    }

    /// Игрок, от имени которого пришла команда (если есть).
    pub fn actor(&self) -> Option<PlayerIndex> {
        match self {
            Command::PlayTiles(c) => Some(c.player_index),
            Command::PassTurn(c) => Some(c.player_index),
            Command::StartSession(_) | Command::ResetSession => None,
        }
    }
}

/// Разобрать команду из JSON.
pub fn parse_command(raw: &str) -> Result<Command, ApiError> {
    Ok(serde_json::from_str(raw)?)
}

/// Выполнить команду над менеджером сессии.
///
/// При ошибке состояние не меняется, ответ уходит только отправителю
/// (`ApiError::delivery`). Снапшоты в ответах публичные, без рук:
/// свою руку игрок получает через `Query::GetSnapshot`.
pub fn execute_command<R: RandomSource>(
    manager: &mut SessionManager<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    debug!(?command, "executing command");

    let event = match command {
        Command::StartSession(cmd) => {
            let session = manager.start_session(cmd.num_players)?;
            return Ok(CommandResponse::SessionStarted(build_deal_snapshot(
                session,
                Reveal::Nobody,
            )));
        }
        Command::ResetSession => {
            manager.reset_session();
            return Ok(CommandResponse::Reset);
        }
        Command::PlayTiles(cmd) => manager.play_tiles(cmd.player_index, &cmd.tiles)?,
        Command::PassTurn(cmd) => manager.pass_turn(cmd.player_index)?,
    };

    let session = manager.session().ok_or(ApiError::NoActiveSession)?;
    let snapshot = build_deal_snapshot(session, Reveal::Nobody);

    Ok(match event {
        SessionEvent::Continue | SessionEvent::CycleReset { .. } => {
            CommandResponse::State(snapshot)
        }
        SessionEvent::PassIgnored => CommandResponse::Ignored,
        SessionEvent::RoundFinished(result) => CommandResponse::RoundFinished {
            result: RoundResultDto::from(&result),
            snapshot,
        },
        SessionEvent::GameOver { result, ranking } => CommandResponse::GameOver {
            result: RoundResultDto::from(&result),
            ranking: FinalRankingDto::from(&ranking),
            snapshot,
        },
    })
}
