// tests/engine_deal_tests.rs
//
// Машина состояний раздачи:
//  1) Старт раздачи: квоты, непересекающиеся руки, ведущий = владелец cloud-3
//  2) Ход тайлами: ведущая комбинация, переход хода, пропуск спасовавших
//  3) Пас и сброс круга (3 игрока, два паса подряд)
//  4) Конец раздачи
//  5) Пасовавший игрок не может действовать, даже если его ошибочно сделали текущим
//  6) Лог раздачи

use lexio_engine::domain::{Deck, GameRules, Hand, Suit, Tile};
use lexio_engine::engine::{
    DealEngine, DealEvent, DealLog, DealPhase, EngineError, PassOutcome, PlayOutcome, RandomSource,
};
use lexio_engine::eval::ComboKind;
use lexio_engine::infra::DeterministicRng;

fn t(suit: Suit, rank: u8) -> Tile {
    Tile::try_new(suit, rank).unwrap()
}

/// P1: cloud-3, cloud-9, sun-12; P2: star-4, moon-10; P3: moon-5, sun-11, star-13.
fn three_player_deal() -> DealEngine {
    let hands = vec![
        Hand::from_tiles([t(Suit::Cloud, 3), t(Suit::Cloud, 9), t(Suit::Sun, 12)]),
        Hand::from_tiles([t(Suit::Star, 4), t(Suit::Moon, 10)]),
        Hand::from_tiles([t(Suit::Moon, 5), t(Suit::Sun, 11), t(Suit::Star, 13)]),
    ];
    DealEngine::from_hands(1, hands, Deck::empty(), 0, 15)
}

// -----------------------------
// 1) СТАРТ
// -----------------------------

#[test]
fn start_deals_quota_and_picks_opening_holder() {
    let rules = GameRules::default();

    for (players, quota) in [(3usize, 12usize), (4, 13), (5, 12)] {
        for seed in 0..20u64 {
            let mut rng = DeterministicRng::from_seed(seed);
            let deal = DealEngine::start(1, players, &rules, &mut rng).unwrap();

            assert_eq!(deal.num_players, players);
            assert!(deal.hands.iter().all(|h| h.len() == quota));
            assert_eq!(deal.undealt.len(), 60 - players * quota);
            assert_eq!(deal.phase, DealPhase::AwaitingLead);
            assert!(deal.leading.is_none());
            assert!(deal.passed.is_empty());

            if let Some(holder) = deal.hands.iter().position(|h| h.contains(&Tile::OPENING)) {
                assert_eq!(deal.current_player, holder, "seed {seed}");
            } else {
                assert!(deal.current_player < players);
            }
            assert_eq!(deal.last_to_act, deal.current_player);

            let mut all: Vec<Tile> = deal.hands.iter().flat_map(|h| h.tiles().to_vec()).collect();
            all.extend(deal.undealt.tiles.iter().copied());
            all.sort();
            all.dedup();
            assert_eq!(all.len(), 60);
        }
    }
}

/// Источник без перемешивания с фиксированным `gen_index`.
struct FixedRng {
    index: usize,
}

impl RandomSource for FixedRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn gen_index(&mut self, upper: usize) -> usize {
        self.index.min(upper - 1)
    }
}

/// Без перемешивания раздача идёт с конца колоды, cloud-3 остаётся в остатке:
/// ведущий берётся из gen_index.
#[test]
fn start_without_opening_tile_uses_random_leader() {
    let rules = GameRules::default();
    let mut rng = FixedRng { index: 2 };
    let deal = DealEngine::start(1, 3, &rules, &mut rng).unwrap();

    assert!(deal.hands.iter().all(|h| !h.contains(&Tile::OPENING)));
    assert!(deal.undealt.tiles.contains(&Tile::OPENING));
    assert_eq!(deal.current_player, 2);
    assert_eq!(deal.last_to_act, 2);
    assert_eq!(deal.log.last(), Some(&DealEvent::RoundStarted { round: 1, leader: 2 }));
}

#[test]
fn start_rejects_unsupported_player_count() {
    let mut rng = DeterministicRng::from_seed(1);
    let rules = GameRules::default();
    assert!(matches!(
        DealEngine::start(1, 2, &rules, &mut rng),
        Err(EngineError::Rules(_))
    ));
    assert!(matches!(
        DealEngine::start(1, 6, &rules, &mut rng),
        Err(EngineError::Rules(_))
    ));
}

// -----------------------------
// 2–4) ПОЛНЫЙ СЦЕНАРИЙ
// -----------------------------

#[test]
fn play_pass_reset_and_win() {
    let mut deal = three_player_deal();

    assert_eq!(deal.pass_turn(0), Err(EngineError::LeaderMustPlay));

    assert_eq!(
        deal.play_tiles(0, &[t(Suit::Cloud, 3)]),
        Ok(PlayOutcome::Continue { next: 1 })
    );
    assert_eq!(deal.phase, DealPhase::InPlay);
    assert_eq!(deal.leading.unwrap().kind, ComboKind::Single);
    assert_eq!(deal.last_played_tiles, vec![t(Suit::Cloud, 3)]);
    assert_eq!(deal.hand(0).unwrap().len(), 2);

    assert_eq!(
        deal.play_tiles(1, &[t(Suit::Star, 4)]),
        Ok(PlayOutcome::Continue { next: 2 })
    );
    assert_eq!(deal.last_to_act, 1);

    assert_eq!(deal.pass_turn(2), Ok(PassOutcome::Continue { next: 0 }));
    assert!(deal.has_passed(2));

    // Второй пас подряд: 3 - 2 = 1 активный игрок, круг сбрасывается.
    assert_eq!(deal.pass_turn(0), Ok(PassOutcome::CycleReset { leader: 1 }));
    assert_eq!(deal.current_player, 1);
    assert!(deal.leading.is_none());
    assert!(deal.last_played_tiles.is_empty());
    assert!(deal.passed.is_empty());
    assert_eq!(deal.phase, DealPhase::AwaitingLead);

    assert_eq!(deal.pass_turn(1), Err(EngineError::LeaderMustPlay));

    assert_eq!(
        deal.play_tiles(1, &[t(Suit::Moon, 10)]),
        Ok(PlayOutcome::DealWon { winner: 1 })
    );
    assert!(deal.is_deal_over());
    assert_eq!(deal.winner(), Some(1));
    assert_eq!(deal.hand_sizes(), vec![2, 0, 3]);

    assert_eq!(deal.play_tiles(2, &[t(Suit::Moon, 5)]), Err(EngineError::DealOver));
    assert_eq!(deal.pass_turn(2), Err(EngineError::DealOver));
}

#[test]
fn turn_skips_players_who_passed() {
    let hands = vec![
        Hand::from_tiles([t(Suit::Cloud, 3), t(Suit::Cloud, 9), t(Suit::Cloud, 14)]),
        Hand::from_tiles([t(Suit::Star, 3), t(Suit::Star, 9)]),
        Hand::from_tiles([t(Suit::Moon, 5), t(Suit::Moon, 11)]),
        Hand::from_tiles([t(Suit::Sun, 4), t(Suit::Sun, 8)]),
    ];
    let mut deal = DealEngine::from_hands(1, hands, Deck::empty(), 0, 15);

    deal.play_tiles(0, &[t(Suit::Cloud, 3)]).unwrap();
    assert_eq!(deal.pass_turn(1), Ok(PassOutcome::Continue { next: 2 }));
    assert_eq!(
        deal.play_tiles(2, &[t(Suit::Moon, 5)]),
        Ok(PlayOutcome::Continue { next: 3 })
    );
    assert_eq!(deal.pass_turn(3), Ok(PassOutcome::Continue { next: 0 }));

    // P2 и P4 спасовали: после P1 ход сразу у P3.
    assert_eq!(
        deal.play_tiles(0, &[t(Suit::Cloud, 9)]),
        Ok(PlayOutcome::Continue { next: 2 })
    );
}

#[test]
fn wrong_player_and_bad_tiles_are_rejected_without_change() {
    let mut deal = three_player_deal();
    let before = deal.clone();

    assert_eq!(
        deal.play_tiles(1, &[t(Suit::Star, 4)]),
        Err(EngineError::NotYourTurn(1))
    );
    assert_eq!(
        deal.play_tiles(7, &[t(Suit::Star, 4)]),
        Err(EngineError::InvalidPlayer(7))
    );
    assert_eq!(
        deal.play_tiles(0, &[t(Suit::Sun, 2)]),
        Err(EngineError::TilesNotInHand)
    );
    assert_eq!(
        deal.play_tiles(0, &[t(Suit::Cloud, 3), t(Suit::Cloud, 9)]),
        Err(EngineError::InvalidCombination)
    );
    assert_eq!(deal, before);

    deal.play_tiles(0, &[t(Suit::Cloud, 9)]).unwrap();
    let before = deal.clone();
    assert_eq!(deal.play_tiles(1, &[t(Suit::Star, 4)]), Err(EngineError::TooWeak));
    assert_eq!(deal, before);
}

// -----------------------------
// 5) ЗАЩИТА ОТ ОШИБОК ВЫЗЫВАЮЩЕГО
// -----------------------------

#[test]
fn passed_player_forced_current_cannot_play() {
    let mut deal = three_player_deal();
    deal.play_tiles(0, &[t(Suit::Cloud, 3)]).unwrap();
    deal.play_tiles(1, &[t(Suit::Star, 4)]).unwrap();
    deal.pass_turn(2).unwrap();

    // Баг вызывающего: сделали текущим уже спасовавшего игрока.
    deal.current_player = 2;
    let before = deal.clone();

    assert_eq!(
        deal.play_tiles(2, &[t(Suit::Star, 13)]),
        Err(EngineError::AlreadyPassed(2))
    );
    assert_eq!(deal.pass_turn(2), Ok(PassOutcome::Ignored));
    assert_eq!(deal, before);
}

// -----------------------------
// 6) ЛОГ
// -----------------------------

#[test]
fn log_records_events_in_order() {
    let mut deal = three_player_deal();
    deal.play_tiles(0, &[t(Suit::Cloud, 3)]).unwrap();
    deal.play_tiles(1, &[t(Suit::Star, 4)]).unwrap();
    deal.pass_turn(2).unwrap();
    deal.pass_turn(0).unwrap();
    deal.play_tiles(1, &[t(Suit::Moon, 10)]).unwrap();

    assert_eq!(
        deal.log.messages(),
        vec![
            "Round 1 started!",
            "P1: played 3 Single.",
            "P2: played 4 Single.",
            "P3: passed.",
            "P1: passed.",
            "P2 leads a new cycle.",
            "P2: played 10 Single.",
            "P2 won the round!",
        ]
    );
    assert_eq!(deal.log.last(), Some(&DealEvent::DealWon { winner: 1 }));
}

#[test]
fn log_evicts_oldest_when_full() {
    let hands = vec![
        Hand::from_tiles([t(Suit::Cloud, 3), t(Suit::Cloud, 9), t(Suit::Sun, 12)]),
        Hand::from_tiles([t(Suit::Star, 4), t(Suit::Moon, 10)]),
        Hand::from_tiles([t(Suit::Moon, 5), t(Suit::Sun, 11), t(Suit::Star, 13)]),
    ];
    let mut deal = DealEngine::from_hands(2, hands, Deck::empty(), 0, 3);

    deal.play_tiles(0, &[t(Suit::Cloud, 3)]).unwrap();
    deal.play_tiles(1, &[t(Suit::Star, 4)]).unwrap();
    deal.play_tiles(2, &[t(Suit::Moon, 5)]).unwrap();

    assert_eq!(deal.log.len(), 3);
    assert_eq!(deal.log.capacity(), 3);
    assert_eq!(
        deal.log.messages(),
        vec!["P1: played 3 Single.", "P2: played 4 Single.", "P3: played 5 Single."]
    );
}

/// Лог из JSON с нулевой ёмкостью всё равно ограничен.
#[test]
fn deserialized_log_keeps_its_bound() {
    let events: Vec<DealEvent> = (0..4).map(|p| DealEvent::Passed { player: p }).collect();
    let json = serde_json::json!({ "capacity": 0, "events": events });

    let mut log: DealLog = serde_json::from_value(json).unwrap();
    assert_eq!(log.capacity(), 1);
    assert_eq!(log.len(), 1);
    assert_eq!(log.last(), Some(&DealEvent::Passed { player: 3 }));

    log.push(DealEvent::DealWon { winner: 0 });
    assert_eq!(log.len(), 1);
    assert_eq!(log.messages(), vec!["P1 won the round!"]);
}
