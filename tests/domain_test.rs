//! Интеграционные тесты для доменной модели (crate::domain).

use lexio_engine::domain::*;

fn t(suit: Suit, rank: u8) -> Tile {
    Tile::try_new(suit, rank).unwrap()
}

/// Сила номинала: 3 слабейший, потом ... 15, 1, 2.
#[test]
fn rank_strength_order() {
    assert_eq!(Rank::new(3).unwrap().strength(), 1);
    assert_eq!(Rank::new(15).unwrap().strength(), 13);
    assert_eq!(Rank::ONE.strength(), 14);
    assert_eq!(Rank::TWO.strength(), 15);

    let order: Vec<u8> = Rank::all_by_strength().map(|r| r.value()).collect();
    assert_eq!(order, vec![3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 1, 2]);

    for s in 1..=15u8 {
        assert_eq!(Rank::from_strength(s).unwrap().strength(), s);
    }
    assert!(Rank::from_strength(0).is_none());
    assert!(Rank::from_strength(16).is_none());
}

#[test]
fn rank_out_of_range_rejected() {
    assert!(Rank::new(0).is_none());
    assert!(Rank::new(16).is_none());
    assert!(Tile::try_new(Suit::Sun, 16).is_none());
    assert!(matches!(Rank::try_from(0u8), Err(TileParseError::InvalidRank(_))));
}

/// Порядок тайлов: сначала номинал, затем масть.
#[test]
fn tile_total_order() {
    assert!(t(Suit::Sun, 3) < t(Suit::Cloud, 4));
    assert!(t(Suit::Cloud, 7) < t(Suit::Star, 7));
    assert!(t(Suit::Moon, 7) < t(Suit::Sun, 7));
    assert!(t(Suit::Sun, 15) < t(Suit::Cloud, 1));
    assert!(t(Suit::Sun, 1) < t(Suit::Cloud, 2));

    assert_eq!(Tile::OPENING, t(Suit::Cloud, 3));
    let deck = Deck::full_60();
    assert_eq!(deck.tiles.iter().min(), Some(&Tile::OPENING));
    assert_eq!(deck.tiles.iter().max(), Some(&t(Suit::Sun, 2)));
}

#[test]
fn suit_power_values() {
    let powers: Vec<u8> = Suit::ALL.iter().map(|s| s.power()).collect();
    assert_eq!(powers, vec![1, 2, 3, 4]);
}

#[test]
fn tile_display_and_parse() {
    let tile = t(Suit::Sun, 12);
    assert_eq!(tile.to_string(), "sun-12");
    assert_eq!("sun-12".parse::<Tile>().unwrap(), tile);
    assert_eq!(" Cloud-3 ".parse::<Tile>().unwrap(), Tile::OPENING);

    assert!(matches!("sun12".parse::<Tile>(), Err(TileParseError::BadFormat(_))));
    assert!(matches!("comet-3".parse::<Tile>(), Err(TileParseError::InvalidSuit(_))));
    assert!(matches!("moon-0".parse::<Tile>(), Err(TileParseError::InvalidRank(_))));
    assert!(matches!("moon-x".parse::<Tile>(), Err(TileParseError::InvalidRank(_))));
}

#[test]
fn tile_serde_format() {
    let json = serde_json::to_string(&t(Suit::Moon, 1)).unwrap();
    assert_eq!(json, r#"{"suit":"moon","rank":1}"#);

    let back: Tile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t(Suit::Moon, 1));

    let bad = serde_json::from_str::<Tile>(r#"{"suit":"moon","rank":16}"#);
    assert!(bad.is_err());
}

/// Полная колода: 60 уникальных тайлов.
#[test]
fn full_deck_is_60_unique_tiles() {
    let deck = Deck::full_60();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut tiles = deck.tiles.clone();
    tiles.sort();
    tiles.dedup();
    assert_eq!(tiles.len(), 60);

    for suit in Suit::ALL {
        assert_eq!(deck.tiles.iter().filter(|x| x.suit == suit).count(), 15);
    }
}

#[test]
fn deck_draws_from_the_top() {
    let mut deck = Deck::full_60();
    assert_eq!(deck.draw_one(), Some(t(Suit::Sun, 15)));
    assert_eq!(deck.len(), 59);

    let mut empty = Deck::empty();
    assert!(empty.draw_one().is_none());
}

/// Раздача по кругу даёт каждому квоту и не теряет тайлы.
#[test]
fn deal_round_robin_quota_and_leftover() {
    let mut deck = Deck::full_60();
    let hands = deck.deal_round_robin(3, 12);

    assert_eq!(hands.len(), 3);
    assert!(hands.iter().all(|h| h.len() == 12));
    assert_eq!(deck.len(), 60 - 36);

    let mut all: Vec<Tile> = hands.iter().flat_map(|h| h.tiles().to_vec()).collect();
    all.extend(deck.tiles.iter().copied());
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 60);
}

#[test]
fn deal_round_robin_stops_when_deck_empty() {
    let mut deck = Deck {
        tiles: Deck::full_60().tiles.into_iter().take(7).collect(),
    };
    let hands = deck.deal_round_robin(3, 5);
    let sizes: Vec<usize> = hands.iter().map(Hand::len).collect();
    assert_eq!(sizes, vec![3, 2, 2]);
    assert!(deck.is_empty());
}

#[test]
fn hand_stays_sorted_and_removes_atomically() {
    let mut hand = Hand::from_tiles([t(Suit::Sun, 2), t(Suit::Cloud, 3), t(Suit::Moon, 9)]);
    hand.insert(t(Suit::Star, 1));

    let tiles = hand.tiles().to_vec();
    let mut sorted = tiles.clone();
    sorted.sort();
    assert_eq!(tiles, sorted);
    assert!(hand.has_rank(Rank::TWO));

    // Один тайл отсутствует: ничего не удаляется.
    assert!(!hand.remove_tiles(&[t(Suit::Moon, 9), t(Suit::Moon, 10)]));
    assert_eq!(hand.len(), 4);

    // Повтор тайла в наборе тоже отклоняется.
    assert!(!hand.contains_all(&[t(Suit::Moon, 9), t(Suit::Moon, 9)]));

    assert!(hand.remove_tiles(&[t(Suit::Moon, 9), t(Suit::Sun, 2)]));
    assert_eq!(hand.len(), 2);
    assert!(!hand.has_rank(Rank::TWO));
}

/// Рука из JSON с произвольным порядком тайлов сортируется при чтении.
#[test]
fn hand_from_unsorted_json_finds_every_tile() {
    let unsorted = [t(Suit::Sun, 2), t(Suit::Cloud, 3), t(Suit::Moon, 9)];
    let json = serde_json::json!({ "tiles": unsorted });

    let hand: Hand = serde_json::from_value(json).unwrap();
    for tile in &unsorted {
        assert!(hand.contains(tile), "{tile} missing");
    }
    assert!(hand.contains_all(&unsorted));
    assert_eq!(
        hand.tiles(),
        &[t(Suit::Cloud, 3), t(Suit::Moon, 9), t(Suit::Sun, 2)]
    );
}

#[test]
fn money_arithmetic_and_bankruptcy() {
    let mut m = Money::new(27);
    m -= Money(30);
    assert_eq!(m, Money(-3));
    assert!(m.is_bankrupt());
    assert!(Money::ZERO.is_bankrupt());
    assert!(!Money(1).is_bankrupt());

    m += Money(5) * 2;
    assert_eq!(m, Money(7));
    assert_eq!(-m, Money(-7));

    let total: Money = vec![Money(1), Money(2), Money(-3)].into_iter().sum();
    assert!(total.is_zero());
}

#[test]
fn rules_defaults_and_quotas() {
    let rules = GameRules::default();
    assert_eq!(rules.starting_money, Money(27));
    assert_eq!(rules.log_capacity, 15);
    assert_eq!(rules.opening_tile, Tile::OPENING);

    assert_eq!(rules.tiles_per_player(3), Ok(12));
    assert_eq!(rules.tiles_per_player(4), Ok(13));
    assert_eq!(rules.tiles_per_player(5), Ok(12));
    assert_eq!(
        rules.tiles_per_player(2),
        Err(RulesError::UnsupportedPlayerCount(2))
    );
    assert_eq!(
        rules.tiles_per_player(6),
        Err(RulesError::UnsupportedPlayerCount(6))
    );

    assert!(rules.validate_full().is_ok());
}

#[test]
fn rules_validation_rejects_bad_config() {
    let broke = GameRules {
        starting_money: Money(0),
        ..GameRules::default()
    };
    assert!(matches!(broke.validate_full(), Err(RulesError::InvalidConfig(_))));

    let no_log = GameRules {
        log_capacity: 0,
        ..GameRules::default()
    };
    assert!(matches!(no_log.validate_full(), Err(RulesError::InvalidConfig(_))));

    // 5 × 13 = 65 > 60.
    let too_many = GameRules {
        quota_five_players: 13,
        ..GameRules::default()
    };
    assert!(matches!(too_many.validate_full(), Err(RulesError::InvalidConfig(_))));
}

#[test]
fn rules_from_json_fills_defaults() {
    let rules = GameRules::from_json_str(r#"{"starting_money": 40}"#).unwrap();
    assert_eq!(rules.starting_money, Money(40));
    assert_eq!(rules.log_capacity, 15);
    assert_eq!(rules.quota_four_players, 13);

    assert!(GameRules::from_json_str("{not json").is_err());
    assert!(GameRules::from_json_str(r#"{"starting_money": -1}"#).is_err());
}
