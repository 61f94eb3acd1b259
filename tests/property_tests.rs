//! Property-based tests for invariants that must hold in every game.

mod common;

use common::total_cards;
use durak_engine::cards::{Card, Deck, Rank, Suit};
use durak_engine::core::{GameConfig, GameRng, ShuffleMode};
use durak_engine::decision::RandomDecider;
use durak_engine::game::Game;
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0..4usize, 0..9usize).prop_map(|(s, r)| Card::new(Suit::ALL[s], Rank::ALL[r]))
}

fn any_suit() -> impl Strategy<Value = Suit> {
    (0..4usize).prop_map(|s| Suit::ALL[s])
}

fn any_shuffle() -> impl Strategy<Value = ShuffleMode> {
    prop_oneof![Just(ShuffleMode::Uniform), Just(ShuffleMode::Legacy)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Two cards never beat each other.
    #[test]
    fn prop_can_beat_is_asymmetric(a in any_card(), b in any_card(), trump in any_suit()) {
        prop_assert!(!(a.can_beat(&b, trump) && b.can_beat(&a, trump)));
        prop_assert!(!a.can_beat(&a, trump));
    }

    /// A trump beats every non-trump; otherwise only a higher card of the
    /// same suit wins.
    #[test]
    fn prop_can_beat_matches_trump_rules(a in any_card(), b in any_card(), trump in any_suit()) {
        let expected = match (a.is_trump(trump), b.is_trump(trump)) {
            (true, false) => true,
            (false, true) => false,
            _ => a.suit() == b.suit() && a.rank() > b.rank(),
        };
        prop_assert_eq!(a.can_beat(&b, trump), expected);
    }

    /// Shuffling only reorders the deck.
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>(), mode in any_shuffle()) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed), mode);

        let mut shuffled: Vec<String> = deck.iter().map(Card::to_string).collect();
        let mut original: Vec<String> = Deck::standard().iter().map(Card::to_string).collect();
        shuffled.sort();
        original.sort();
        prop_assert_eq!(shuffled, original);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Whatever the random players do, the 36 cards stay in play, players
    /// only ever leave, and the game is over exactly when one is left.
    #[test]
    fn prop_random_games_keep_invariants(
        seed in any::<u64>(),
        seats in 2usize..=5,
        mode in any_shuffle(),
    ) {
        let config = GameConfig::all_computer(seats).with_shuffle(mode);
        let mut game = Game::new(config, seed).unwrap();
        game.deal().unwrap();
        let mut decider = RandomDecider::new(seed.wrapping_add(1));

        let mut remaining = game.players_remaining();
        prop_assert_eq!(remaining, seats);

        for _ in 0..20_000 {
            if game.is_over() {
                break;
            }
            if game.phase().awaits_decision() {
                let _ = game.resolve_pending(&mut decider).unwrap();
            } else {
                let _ = game.advance();
            }

            prop_assert_eq!(total_cards(&game), Deck::STANDARD_SIZE);
            prop_assert!(game.players_remaining() <= remaining);
            prop_assert_eq!(game.is_over(), game.players_remaining() <= 1);
            prop_assert!(game.battlefield().len() <= game.battlefield().max_attacks());
            remaining = game.players_remaining();
        }
    }
}
