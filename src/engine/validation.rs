use crate::domain::{PlayerIndex, Tile};
use crate::engine::deal::{DealEngine, DealPhase};
use crate::engine::errors::EngineError;
use crate::eval::{beats, classify, Combination};

/// Итог проверки паса.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassCheck {
    /// Пас допустим.
    Accept,
    /// Игрок уже пасовал: повторный пас молча игнорируется.
    AlreadyPassed,
}

/// Может ли игрок выложить эти тайлы. Возвращает классификацию набора.
///
/// Порядок проверок: раздача идёт, игрок существует, его ход, он не пасовал,
/// тайлы есть в руке, набор является комбинацией, комбинация бьёт ведущую.
pub fn validate_play(
    deal: &DealEngine,
    player: PlayerIndex,
    tiles: &[Tile],
) -> Result<Combination, EngineError> {
    ensure_actor(deal, player)?;

    // Проверка не зависит от того, как двигается current_player.
    if deal.passed.contains(&player) {
        return Err(EngineError::AlreadyPassed(player));
    }

    let hand = deal
        .hands
        .get(player)
        .ok_or(EngineError::InvalidPlayer(player))?;
    if !hand.contains_all(tiles) {
        return Err(EngineError::TilesNotInHand);
    }

    let combination = classify(tiles).ok_or(EngineError::InvalidCombination)?;

    if !beats(&combination, deal.leading.as_ref()) {
        return Err(EngineError::TooWeak);
    }

    Ok(combination)
}

/// Может ли игрок спасовать.
pub fn validate_pass(deal: &DealEngine, player: PlayerIndex) -> Result<PassCheck, EngineError> {
    ensure_actor(deal, player)?;

    if deal.leading.is_none() {
        return Err(EngineError::LeaderMustPlay);
    }

    if deal.passed.contains(&player) {
        return Ok(PassCheck::AlreadyPassed);
    }

    Ok(PassCheck::Accept)
}

/// Общая часть: раздача не окончена, игрок за столом и сейчас его ход.
fn ensure_actor(deal: &DealEngine, player: PlayerIndex) -> Result<(), EngineError> {
    if matches!(deal.phase, DealPhase::DealOver { .. }) {
        return Err(EngineError::DealOver);
    }
    if player >= deal.num_players {
        return Err(EngineError::InvalidPlayer(player));
    }
    if deal.current_player != player {
        return Err(EngineError::NotYourTurn(player));
    }
    Ok(())
}
