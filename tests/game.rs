//! Game integration tests.

#![allow(clippy::float_cmp)]

use core::time::Duration;

use seven_half::{
    Card, CardSource, Choice, ConfigError, DECK_VALUES, Deck, Game, GameOptions, MAX_PLAYERS,
    MIN_PLAYERS, PlayerStatus, Points, Realization, ScriptedDeck, ScriptedStrategy, Standings,
    Strategy, WINNING_SCORE,
};

const REALIZATIONS: [Realization; 2] = [Realization::SharedState, Realization::MessagePassing];

fn scripted(choices: &[Choice]) -> Box<dyn Strategy> {
    Box::new(ScriptedStrategy::new(choices.to_vec()))
}

fn scripted_game(players: u8, cards: &[Card], strategies: Vec<Box<dyn Strategy>>) -> Game {
    Game::new(GameOptions::default().with_players(players))
        .unwrap()
        .with_deck(ScriptedDeck::new(cards.to_vec()).unwrap())
        .with_strategies(strategies)
        .unwrap()
}

#[test]
fn points_display_and_arithmetic() {
    assert_eq!(WINNING_SCORE, Points::whole(7) + Card::HALF.value());
    assert_eq!(WINNING_SCORE.to_string(), "7.5");
    assert_eq!(Points::whole(14).to_string(), "14.0");
    assert_eq!(WINNING_SCORE.as_f64(), 7.5);
    assert!(Points::whole(8) > WINNING_SCORE);
}

#[test]
fn deck_values_keep_three_halves() {
    let halves = DECK_VALUES.iter().filter(|&&card| card == Card::HALF).count();
    assert_eq!(DECK_VALUES.len(), 10);
    assert_eq!(halves, 3);
    for points in 1..=7 {
        assert_eq!(
            DECK_VALUES
                .iter()
                .filter(|card| card.value() == Points::whole(points))
                .count(),
            1
        );
    }
}

#[test]
fn seeded_deck_draws_from_the_multiset() {
    let mut deck = Deck::seeded(5);
    let draws: Vec<Card> = (0..10_000).map(|_| deck.draw()).collect();

    assert!(draws.iter().all(|card| DECK_VALUES.contains(card)));
    let halves = draws.iter().filter(|&&card| card == Card::HALF).count();
    let sevens = draws.iter().filter(|&&card| card == Card::whole(7)).count();
    assert!(halves > sevens * 2, "halves {halves}, sevens {sevens}");

    let mut replay = Deck::seeded(5);
    assert!(draws.iter().all(|&card| card == replay.draw()));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_players(5)
        .with_seed(99)
        .with_turn_delay(Duration::from_millis(100));

    assert_eq!(options.players, 5);
    assert_eq!(options.seed, 99);
    assert_eq!(options.turn_delay, Duration::from_millis(100));
}

#[test]
fn player_count_is_validated() {
    for players in [0, 1, MAX_PLAYERS + 1] {
        let err = Game::new(GameOptions::default().with_players(players))
            .err()
            .unwrap();
        assert_eq!(
            err,
            ConfigError::PlayerCount {
                count: players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            }
        );
    }

    for players in MIN_PLAYERS..=MAX_PLAYERS {
        let game = Game::new(GameOptions::default().with_players(players)).unwrap();
        assert_eq!(game.player_count(), usize::from(players));
    }
}

#[test]
fn strategy_count_must_match_players() {
    let err = Game::new(GameOptions::default().with_players(3))
        .unwrap()
        .with_strategies(vec![scripted(&[]), scripted(&[])])
        .err()
        .unwrap();
    assert_eq!(
        err,
        ConfigError::StrategyCount {
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn empty_scripted_deck_is_rejected() {
    assert_eq!(
        ScriptedDeck::new(Vec::<Card>::new()).unwrap_err(),
        ConfigError::EmptyScript
    );
}

#[test]
fn everyone_busts_on_sevens() {
    for realization in REALIZATIONS {
        let game = scripted_game(
            2,
            &[Card::whole(7)],
            vec![scripted(&[Choice::Continue]), scripted(&[Choice::Continue])],
        );
        let report = game.play(realization).unwrap();

        let order: Vec<u8> = report.deliveries.iter().map(|d| d.player_id).collect();
        assert_eq!(order, [0, 1, 0, 1]);
        for player in &report.players {
            assert_eq!(player.status, PlayerStatus::Busted);
            assert_eq!(player.score, Points::whole(14));
        }
        assert_eq!(report.standings, Standings::NoWinner);
        assert_eq!(report.standings.winner(), None);
        assert_eq!(report.busted().count(), 2);
    }
}

#[test]
fn exact_winning_score_forces_stand() {
    for realization in REALIZATIONS {
        // Player 0 would keep going if asked at 7.5.
        let game = scripted_game(
            2,
            &[Card::whole(7), Card::whole(7), Card::HALF],
            vec![
                scripted(&[Choice::Continue, Choice::Continue]),
                scripted(&[Choice::Stand]),
            ],
        );
        let report = game.play(realization).unwrap();

        let winner = report.player(0).unwrap();
        assert_eq!(winner.status, PlayerStatus::Standing);
        assert_eq!(winner.score, WINNING_SCORE);
        assert_eq!(winner.cards, [Card::whole(7), Card::HALF]);
        assert_eq!(report.deliveries.len(), 3);
        assert_eq!(
            report.standings,
            Standings::Winner {
                player_id: 0,
                score: WINNING_SCORE,
            }
        );
    }
}

#[test]
fn round_robin_skips_only_terminal_players() {
    for realization in REALIZATIONS {
        let game = scripted_game(
            3,
            &[Card::HALF],
            vec![
                scripted(&[Choice::Continue, Choice::Stand]),
                scripted(&[Choice::Stand]),
                scripted(&[Choice::Continue, Choice::Continue, Choice::Stand]),
            ],
        );
        let report = game.play(realization).unwrap();

        let order: Vec<u8> = report.deliveries.iter().map(|d| d.player_id).collect();
        assert_eq!(order, [0, 1, 2, 0, 2, 2]);
        let turns: Vec<usize> = report.deliveries.iter().map(|d| d.turn).collect();
        assert_eq!(turns, [0, 1, 2, 3, 4, 5]);
        assert_eq!(report.player(0).unwrap().score, Points::whole(1));
        assert_eq!(report.player(1).unwrap().score, Card::HALF.value());
        assert_eq!(report.player(2).unwrap().score, Points::from_halves(3));
        assert_eq!(
            report.standings,
            Standings::Winner {
                player_id: 2,
                score: Points::from_halves(3),
            }
        );
    }
}

#[test]
fn mid_lap_bust_ends_game_immediately() {
    for realization in REALIZATIONS {
        // Player 1 stands at once; player 0 busts on its second card and
        // nobody else should be dealt to afterwards.
        let game = scripted_game(
            2,
            &[Card::whole(5), Card::whole(1), Card::whole(6)],
            vec![scripted(&[Choice::Continue]), scripted(&[Choice::Stand])],
        );
        let report = game.play(realization).unwrap();

        assert_eq!(report.deliveries.len(), 3);
        assert_eq!(report.player(0).unwrap().status, PlayerStatus::Busted);
        assert_eq!(report.player(0).unwrap().score, Points::whole(11));
        assert_eq!(
            report.standings,
            Standings::Winner {
                player_id: 1,
                score: Points::whole(1),
            }
        );
    }
}

#[test]
fn equal_best_scores_are_reported_as_tie() {
    for realization in REALIZATIONS {
        let game = scripted_game(
            3,
            &[Card::whole(7), Card::whole(3), Card::whole(7)],
            vec![
                scripted(&[Choice::Stand]),
                scripted(&[Choice::Stand]),
                scripted(&[Choice::Stand]),
            ],
        );
        let report = game.play(realization).unwrap();

        assert_eq!(
            report.standings,
            Standings::Tie {
                player_ids: vec![0, 2],
                score: Points::whole(7),
            }
        );
        assert_eq!(report.standings.winner(), Some((0, Points::whole(7))));
        assert_eq!(report.standing().count(), 3);
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let options = GameOptions::default().with_players(6).with_seed(2024);
    for realization in REALIZATIONS {
        let first = Game::new(options.clone()).unwrap().play(realization).unwrap();
        let second = Game::new(options.clone()).unwrap().play(realization).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn realizations_agree_on_seeded_games() {
    for seed in 0..20 {
        let options = GameOptions::default().with_players(4).with_seed(seed);
        let shared = Game::new(options.clone())
            .unwrap()
            .play(Realization::SharedState)
            .unwrap();
        let channel = Game::new(options)
            .unwrap()
            .play(Realization::MessagePassing)
            .unwrap();
        assert_eq!(shared, channel, "seed {seed}");
    }
}

#[test]
fn turn_delay_paces_the_dealer() {
    let options = GameOptions::default()
        .with_players(2)
        .with_turn_delay(Duration::from_millis(5));
    let game = Game::new(options)
        .unwrap()
        .with_deck(ScriptedDeck::new(vec![Card::whole(7)]).unwrap());

    let started = std::time::Instant::now();
    let report = game.play(Realization::SharedState).unwrap();
    assert!(started.elapsed() >= Duration::from_millis(5) * report.deliveries.len() as u32);
}
