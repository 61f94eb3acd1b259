//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver};

use durak_engine::cards::{Card, Deck};
use durak_engine::core::{GameConfig, PlayerId};
use durak_engine::decision::{
    AttackDecision, DecisionError, DecisionRequest, DecisionSource, DefenseDecision,
};
use durak_engine::game::{Game, Phase};

pub fn card(s: &str) -> Card {
    s.parse().unwrap()
}

pub fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| card(s)).collect()
}

pub fn seat(n: u8) -> PlayerId {
    PlayerId::new(n)
}

/// Build a deck that deals `hands[s]` to seat `s` (round-robin, as the
/// game deals) and leaves `stock` behind, trump card last.
pub fn stacked_deck(hands: &[&[&str]], stock: &[&str]) -> Deck {
    let rounds = hands.iter().map(|h| h.len()).max().unwrap_or(0);
    let mut order = Vec::new();
    for round in 0..rounds {
        for hand in hands {
            order.push(card(hand[round]));
        }
    }
    order.extend(cards(stock));
    Deck::from_cards(order).unwrap()
}

/// Four seats over the full 36 cards, trump Diamonds, seat 0 attacking
/// first with the 6D.
pub const HANDS: [&[&str]; 4] = [
    &["6D", "7C", "8C", "9S", "JH", "QS"],
    &["10C", "7H", "8H", "9H", "JC", "KS"],
    &["6C", "6H", "6S", "7S", "8S", "10S"],
    &["9C", "QC", "KC", "AC", "10H", "QH"],
];

pub const STOCK: [&str; 12] = [
    "7D", "8D", "9D", "10D", "JD", "QD", "KD", "JS", "AS", "KH", "AH", "AD",
];

pub fn standard_table() -> Deck {
    stacked_deck(&HANDS, &STOCK)
}

/// A game dealt from `deck`, with status messages captured.
pub fn dealt_game(config: GameConfig, deck: Deck) -> (Game, Receiver<String>) {
    let (tx, rx) = channel();
    let mut game = Game::with_notifier(config, 1, Box::new(tx)).unwrap();
    game.deal_from(deck).unwrap();
    (game, rx)
}

/// Every card the game holds, wherever it is.
pub fn total_cards(game: &Game) -> usize {
    game.deck().len()
        + game.discard_pile().len()
        + game
            .battlefield()
            .attacks()
            .iter()
            .map(|a| 1 + usize::from(a.is_defended()))
            .sum::<usize>()
        + game.players().values().map(|p| p.hand_len()).sum::<usize>()
}

/// Answers decisions from prepared queues.
#[derive(Default)]
pub struct Scripted {
    pub attacks: VecDeque<AttackDecision>,
    pub defenses: VecDeque<DefenseDecision>,
    pub requests: Vec<DecisionRequest>,
}

impl Scripted {
    pub fn new(attacks: Vec<AttackDecision>, defenses: Vec<DefenseDecision>) -> Self {
        Self {
            attacks: attacks.into(),
            defenses: defenses.into(),
            requests: Vec::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.attacks.is_empty() && self.defenses.is_empty()
    }
}

impl DecisionSource for Scripted {
    fn decide_attack(&mut self, request: &DecisionRequest) -> Result<AttackDecision, DecisionError> {
        self.requests.push(request.clone());
        self.attacks
            .pop_front()
            .ok_or_else(|| DecisionError::Transport("script has no attack left".into()))
    }

    fn decide_defense(&mut self, request: &DecisionRequest) -> Result<DefenseDecision, DecisionError> {
        self.requests.push(request.clone());
        self.defenses
            .pop_front()
            .ok_or_else(|| DecisionError::Transport("script has no defense left".into()))
    }
}

pub fn play(list: &[&str]) -> AttackDecision {
    AttackDecision::Play(cards(list))
}

pub fn defend(slots: &[(usize, &str)]) -> DefenseDecision {
    DefenseDecision::Defend(slots.iter().map(|(slot, c)| (*slot, card(c))).collect())
}

/// Step the game one input at a time until `done` holds. Panics after
/// `limit` steps.
pub fn step_until(
    game: &mut Game,
    source: &mut dyn DecisionSource,
    limit: usize,
    done: impl Fn(&Game) -> bool,
) {
    for _ in 0..limit {
        if done(game) {
            return;
        }
        if game.phase().awaits_decision() {
            let _ = game.resolve_pending(source).unwrap();
        } else {
            let _ = game.advance();
        }
    }
    panic!("condition not reached within {limit} steps; phase {:?}", game.phase());
}

pub fn in_phase(phase: Phase) -> impl Fn(&Game) -> bool {
    move |game| game.phase() == phase
}
