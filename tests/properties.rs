//! Property-based tests over seeded games.
//!
//! Every seeded game, under either realization, must satisfy the same
//! invariants, and both realizations must agree on the outcome.

use proptest::prelude::*;
use seven_half::{
    Game, GameOptions, GameReport, MAX_PLAYERS, MIN_PLAYERS, PlayerStatus, Points, Realization,
    Standings, WINNING_SCORE,
};

fn play(players: u8, seed: u64, realization: Realization) -> GameReport {
    let options = GameOptions::default().with_players(players).with_seed(seed);
    Game::new(options).unwrap().play(realization).unwrap()
}

fn check_invariants(report: &GameReport, players: u8) -> Result<(), TestCaseError> {
    prop_assert_eq!(report.players.len(), usize::from(players));

    for player in &report.players {
        // Score conservation: the score is exactly what was dealt, in order.
        let dealt = report.dealt_to(player.player_id);
        prop_assert_eq!(&player.cards, &dealt);
        let total = dealt
            .iter()
            .fold(Points::ZERO, |total, card| total + card.value());
        prop_assert_eq!(player.score, total);

        // Terminal exclusivity and bust correctness.
        prop_assert_ne!(player.status, PlayerStatus::Active);
        prop_assert_eq!(
            player.status == PlayerStatus::Busted,
            player.score > WINNING_SCORE
        );

        // No card after the first one that left the player terminal: every
        // prefix short of the full hand stays strictly below the threshold.
        let mut running = Points::ZERO;
        for card in &dealt[..dealt.len() - 1] {
            running += card.value();
            prop_assert!(running < WINNING_SCORE);
        }
    }

    // Round-robin: between two consecutive cards to the same player, every
    // other player that was still active in between got exactly one card.
    for (turn, delivery) in report.deliveries.iter().enumerate() {
        prop_assert_eq!(delivery.turn, turn);
    }
    let mut last_dealt: Vec<Option<usize>> = vec![None; usize::from(players)];
    for delivery in &report.deliveries {
        let seat = usize::from(delivery.player_id);
        if let Some(previous) = last_dealt[seat] {
            let between = &report.deliveries[previous + 1..delivery.turn];
            let mut seen = vec![false; usize::from(players)];
            for other in between {
                let other_seat = usize::from(other.player_id);
                prop_assert!(!seen[other_seat], "player dealt twice within one lap");
                seen[other_seat] = true;
            }
        }
        last_dealt[seat] = Some(delivery.turn);
    }

    match &report.standings {
        Standings::NoWinner => prop_assert_eq!(report.standing().count(), 0),
        Standings::Winner { player_id, score } => {
            let winner = report.player(*player_id).unwrap();
            prop_assert_eq!(winner.status, PlayerStatus::Standing);
            for other in report.standing() {
                prop_assert!(other.player_id == *player_id || other.score < *score);
            }
        }
        Standings::Tie { player_ids, score } => {
            prop_assert!(player_ids.len() > 1);
            for other in report.standing() {
                prop_assert_eq!(
                    player_ids.contains(&other.player_id),
                    other.score == *score
                );
                prop_assert!(other.score <= *score);
            }
        }
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shared_state_games_hold_invariants(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        seed in any::<u64>(),
    ) {
        let report = play(players, seed, Realization::SharedState);
        check_invariants(&report, players)?;
    }

    #[test]
    fn message_passing_games_hold_invariants(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        seed in any::<u64>(),
    ) {
        let report = play(players, seed, Realization::MessagePassing);
        check_invariants(&report, players)?;
    }

    #[test]
    fn realizations_are_equivalent(
        players in MIN_PLAYERS..=MAX_PLAYERS,
        seed in any::<u64>(),
    ) {
        let shared = play(players, seed, Realization::SharedState);
        let channel = play(players, seed, Realization::MessagePassing);
        prop_assert_eq!(shared, channel);
    }
}
