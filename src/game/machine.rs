//! The Durak state machine.
//!
//! A `Game` owns every card in play (deck, hands, battlefield, discard
//! pile) and moves them only through the transitions below. Inputs are
//! UI actions for the human seat, decisions for computer seats (see
//! `driver.rs`), and `advance` for the automatic steps in between.

use std::fmt;

use tracing::{debug, info};

use crate::battlefield::Battlefield;
use crate::cards::{Card, Deck, Rank, Suit};
use crate::core::{GameConfig, GameRng, PlayerId, SeatMap};
use crate::error::{GameError, IllegalMove};
use crate::players::{Player, Status};

use super::notify::{Notifier, TracingNotifier};
use super::{Action, BattlefieldSnapshot, GameSnapshot, Outcome, Phase, PlayerSnapshot};

/// One table of Durak.
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) rng: GameRng,
    pub(super) deck: Deck,
    pub(super) battlefield: Battlefield,
    pub(super) discard: Vec<Card>,
    pub(super) players: SeatMap<Player>,
    pub(super) phase: Phase,
    /// Face of the bottom card. The card itself stays in the deck until
    /// drawn; only its suit and rank are remembered here.
    pub(super) trump: Option<(Suit, Rank)>,
    pub(super) attacker: PlayerId,
    pub(super) defender: PlayerId,
    /// The attacker who opened the round.
    pub(super) last_attacker: PlayerId,
    pub(super) redraw_cursor: PlayerId,
    pub(super) players_remaining: usize,
    pub(super) status_text: String,
    pub(super) notifier: Box<dyn Notifier>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("attacker", &self.attacker)
            .field("defender", &self.defender)
            .field("players_remaining", &self.players_remaining)
            .field("deck", &self.deck.len())
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Create a table. Nothing is dealt until [`Game::deal`].
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_notifier(config, seed, Box::new(TracingNotifier))
    }

    pub fn with_notifier(
        config: GameConfig,
        seed: u64,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let players = SeatMap::from_vec(config.seats.iter().map(Player::from_seat).collect());
        Ok(Self {
            config,
            rng: GameRng::new(seed),
            deck: Deck::default(),
            battlefield: Battlefield::new(),
            discard: Vec::new(),
            players,
            phase: Phase::Undealt,
            trump: None,
            attacker: PlayerId::new(0),
            defender: PlayerId::new(0),
            last_attacker: PlayerId::new(0),
            redraw_cursor: PlayerId::new(0),
            players_remaining: 0,
            status_text: String::new(),
            notifier,
        })
    }

    // ---- accessors ----

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The loser, once the game is over.
    #[must_use]
    pub fn durak(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver { durak } => durak,
            _ => None,
        }
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    /// Cards beaten in earlier rounds.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// The face-up trump card, as dealt. A detached copy: the card itself
    /// is in the deck or, once drawn, in somebody's hand.
    #[must_use]
    pub fn trump_card(&self) -> Option<Card> {
        self.trump.map(|(suit, rank)| Card::new(suit, rank))
    }

    #[must_use]
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump.map(|(suit, _)| suit)
    }

    /// An independent random stream derived from this game's seed, for
    /// seeding computer opponents.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    #[must_use]
    pub fn attacker(&self) -> PlayerId {
        self.attacker
    }

    #[must_use]
    pub fn defender(&self) -> PlayerId {
        self.defender
    }

    #[must_use]
    pub fn last_attacker(&self) -> PlayerId {
        self.last_attacker
    }

    #[must_use]
    pub fn players_remaining(&self) -> usize {
        self.players_remaining
    }

    /// The most recent status message.
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Export the full state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            battlefield: BattlefieldSnapshot {
                attacks: self.battlefield.attacks().to_vec(),
                max_attacks: self.battlefield.max_attacks(),
            },
            players: self.players.values().map(PlayerSnapshot::from).collect(),
            attacking_player: self.attacker,
            defending_player: self.defender,
            last_attacker: self.last_attacker,
            trump_card: self.trump_card(),
            players_remaining: self.players_remaining,
            deck_size: self.deck.len(),
            discard_size: self.discard.len(),
        }
    }

    /// Next active seat clockwise from `from`, or `from` itself if nobody
    /// else is active.
    #[must_use]
    pub fn next_seat(&self, from: PlayerId) -> PlayerId {
        let n = self.players.seat_count();
        (1..=n)
            .map(|step| PlayerId::new(((from.index() + step) % n) as u8))
            .find(|&seat| self.players[seat].is_active())
            .unwrap_or(from)
    }

    // ---- UI actions ----

    /// Apply a UI action.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, GameError> {
        Ok(match action {
            Action::Deal => {
                self.deal()?;
                Outcome::Accepted
            }
            Action::SelectCard { index } => self.select_card(index),
            Action::PlayAttack => self.play_attack(),
            Action::PlayDefense { slot } => self.play_defense(slot),
            Action::Surrender => self.surrender(),
            Action::Advance => self.advance(),
        })
    }

    /// Shuffle a fresh deck and deal a new game. Valid in any phase.
    pub fn deal(&mut self) -> Result<(), GameError> {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng, self.config.shuffle);
        self.deal_from(deck)
    }

    /// Deal a new game from `deck` as given, top card first.
    pub fn deal_from(&mut self, mut deck: Deck) -> Result<(), GameError> {
        let seats = self.players.seat_count();
        let needed = seats * self.config.hand_size;
        if deck.len() <= needed {
            return Err(GameError::NotEnoughCards {
                needed,
                available: deck.len(),
            });
        }

        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.battlefield = Battlefield::new();
        self.discard.clear();
        self.players_remaining = seats;

        for _ in 0..self.config.hand_size {
            for seat in PlayerId::all(seats) {
                if let Some(card) = deck.draw() {
                    self.players[seat].add_card(card);
                }
            }
        }
        self.trump = deck.trump().map(|card| (card.suit(), card.rank()));
        self.deck = deck;

        self.attacker = self.first_attacker();
        self.defender = self.next_seat(self.attacker);
        info!(
            seats,
            seed = self.rng.seed(),
            trump = ?self.trump_card(),
            attacker = %self.attacker,
            "dealt new game"
        );
        if let Some(trump) = self.trump_card() {
            let message = format!(
                "Trump is {}. {} attacks first.",
                trump,
                self.players[self.attacker].name()
            );
            self.notify(message);
        }
        self.initiate_round();
        Ok(())
    }

    /// Select a card in the acting human's hand.
    pub fn select_card(&mut self, index: usize) -> Outcome {
        let Some(seat) = self.acting_human() else {
            return Outcome::Ignored;
        };
        match self.players[seat].select_card(index) {
            Ok(()) => Outcome::Accepted,
            Err(_) => Outcome::Rejected(IllegalMove::NoSuchCard { index }),
        }
    }

    /// Attack with the human attacker's selected card.
    pub fn play_attack(&mut self) -> Outcome {
        if self.phase != Phase::Attacking {
            return Outcome::Ignored;
        }
        let seat = self.attacker;
        let Some(index) = self.players[seat].selected_index() else {
            return self.reject(IllegalMove::NoCardSelected);
        };
        let result = self.attack_from_hand(seat, index);
        self.players[seat].deselect();
        if let Err(reason) = result {
            return self.reject(reason);
        }

        if self.battlefield.is_full() {
            self.notify(IllegalMove::AttackLimitReached.to_string());
        } else {
            self.notify("Play an attack, or pass.");
        }
        self.check_if_out(seat);
        Outcome::Accepted
    }

    /// Beat the attack in `slot` with the human defender's selected card.
    pub fn play_defense(&mut self, slot: usize) -> Outcome {
        if self.phase != Phase::Defending {
            return Outcome::Ignored;
        }
        let seat = self.defender;
        let Some(index) = self.players[seat].selected_index() else {
            return self.reject(IllegalMove::NoCardSelected);
        };
        let result = self.defend_from_hand(seat, index, slot);
        self.players[seat].deselect();
        if let Err(reason) = result {
            return self.reject(reason);
        }

        if !self.battlefield.has_new_attacks() {
            self.notify("You have beaten all current attacks.");
            self.check_if_out(seat);
            if !self.is_over() {
                self.set_phase(Phase::AfterDefense);
            }
        }
        Outcome::Accepted
    }

    /// Human defender gives up the round.
    pub fn surrender(&mut self) -> Outcome {
        if self.phase != Phase::Defending {
            return Outcome::Ignored;
        }
        let seat = self.defender;
        self.players[seat].deselect();
        self.surrender_seat(seat);
        self.set_phase(Phase::AfterDefense);
        Outcome::Accepted
    }

    /// Pass as the human attacker, or run the next automatic step.
    pub fn advance(&mut self) -> Outcome {
        match self.phase {
            Phase::ReadyToInitiate => self.initiate_round(),
            Phase::EndOfRound => self.end_round(),
            Phase::StartRedraw | Phase::Redrawing => self.redraw(),
            Phase::Attacking => {
                if self.battlefield.is_empty() {
                    return self.reject(IllegalMove::MustAttack);
                }
                self.players[self.attacker].deselect();
                self.next_turn();
            }
            Phase::AfterAttack | Phase::AfterDefense => self.next_turn(),
            Phase::Undealt
            | Phase::Defending
            | Phase::AwaitingAttack
            | Phase::AwaitingDefense
            | Phase::GameOver { .. } => return Outcome::Ignored,
        }
        Outcome::Accepted
    }

    // ---- transitions ----

    /// Lowest trump holder, ties to the lower seat. Random seat if no one
    /// holds a trump.
    fn first_attacker(&mut self) -> PlayerId {
        let lowest = self.trump_suit().and_then(|trump| {
            self.players
                .iter()
                .filter_map(|(seat, player)| {
                    player
                        .hand()
                        .iter()
                        .filter(|card| card.is_trump(trump))
                        .map(Card::rank)
                        .min()
                        .map(|rank| (rank, seat))
                })
                .min()
        });
        match lowest {
            Some((_, seat)) => seat,
            None => PlayerId::new(self.rng.gen_range_usize(0..self.players.seat_count()) as u8),
        }
    }

    pub(super) fn initiate_round(&mut self) {
        for (_, player) in self.players.iter_mut() {
            if player.is_active() {
                player.clear_status();
                player.set_played_attack(true);
            }
        }
        self.last_attacker = self.attacker;
        self.players[self.attacker].set_status(Status::Attacking);
        self.players[self.defender].set_status(Status::Defending);

        let cap = self
            .config
            .max_attacks
            .min(self.players[self.defender].hand_len());
        self.battlefield.set_max_attacks(cap);
        debug!(
            attacker = %self.attacker,
            defender = %self.defender,
            max_attacks = cap,
            "round initiated"
        );
        self.attack();
    }

    pub(super) fn attack(&mut self) {
        if self.battlefield.is_full() {
            self.set_phase(Phase::EndOfRound);
            self.notify("Maximum number of cards have been played. End of round.");
            return;
        }
        let human = {
            let attacker = &mut self.players[self.attacker];
            attacker.set_played_attack(false);
            attacker.is_human()
        };
        if human {
            self.set_phase(Phase::Attacking);
            if self.battlefield.is_empty() {
                self.notify("Play an attack.");
            } else {
                self.notify("Play an attack, or pass.");
            }
        } else {
            self.set_phase(Phase::AwaitingAttack);
        }
    }

    fn defend(&mut self) {
        if self.players[self.defender].is_human() {
            self.set_phase(Phase::Defending);
            self.notify("Defend against the attack, or surrender.");
        } else {
            self.set_phase(Phase::AwaitingDefense);
        }
    }

    /// Hand the attack to the next seat, skipping the defender.
    fn next_attacker(&mut self) {
        if self.players[self.attacker].is_active() {
            self.players[self.attacker].clear_status();
        }
        self.attacker = self.next_non_defender(self.attacker);
        self.players[self.attacker].set_status(Status::Attacking);
    }

    fn next_non_defender(&self, from: PlayerId) -> PlayerId {
        let mut seat = self.next_seat(from);
        for _ in 0..self.players.seat_count() {
            if seat != self.defender {
                break;
            }
            seat = self.next_seat(seat);
        }
        seat
    }

    /// Decide who acts after an attack or defense turn, or end the round.
    fn next_turn(&mut self) {
        let after_defense = self.phase == Phase::AfterDefense;
        if !self.players[self.last_attacker].is_active() {
            self.last_attacker = self.next_non_defender(self.last_attacker);
        }

        let defender = self.defender;
        let no_new_attacks = self
            .players
            .iter()
            .filter(|(seat, player)| *seat != defender && player.is_active())
            .all(|(_, player)| !player.played_attack());
        if no_new_attacks && self.attacker == self.last_attacker {
            self.set_phase(Phase::EndOfRound);
            self.notify("No new attacks have been made. End of this round.");
            return;
        }

        if after_defense {
            if self.players[defender].is_active() {
                if !self.players[self.attacker].is_active() {
                    self.next_attacker();
                }
                self.attack();
            } else {
                self.end_round();
            }
        } else if self.players[defender].has_surrendered() || !self.battlefield.has_new_attacks() {
            self.next_attacker();
            self.attack();
        } else {
            self.defend();
        }
    }

    fn end_round(&mut self) {
        let cards = self.battlefield.clear();
        let count = cards.len();
        let defender = self.defender;

        if self.players[defender].has_surrendered() {
            self.players[defender].add_cards(cards);
            let message = format!("{} takes {} cards.", self.players[defender].name(), count);
            self.notify(message);
            info!(seat = %defender, cards = count, "defender picked up");
            self.attacker = self.next_seat(defender);
        } else {
            self.discard.extend(cards);
            let message = format!("{} successfully defended.", self.players[defender].name());
            self.notify(message);
            info!(seat = %defender, cards = count, "round defended");
            self.attacker = if self.players[defender].is_active() {
                defender
            } else {
                self.next_seat(defender)
            };
        }
        self.defender = self.next_seat(self.attacker);

        if self.deck.is_empty() {
            if !self.sweep_eliminations() {
                self.set_phase(Phase::ReadyToInitiate);
            }
        } else {
            self.redraw_cursor = self.last_attacker;
            self.set_phase(Phase::StartRedraw);
        }
    }

    /// One redraw step: refill the next player who needs cards. Starts the
    /// next round once everyone from the last attacker around has drawn
    /// or the deck runs out.
    fn redraw(&mut self) {
        for _ in 0..=self.players.seat_count() {
            let lap_done =
                self.phase == Phase::Redrawing && self.redraw_cursor == self.last_attacker;
            if self.deck.is_empty() || lap_done {
                break;
            }
            self.set_phase(Phase::Redrawing);

            let seat = self.redraw_cursor;
            let drawn = self.top_up(seat);
            self.redraw_cursor = self.next_seat(seat);
            if drawn > 0 {
                let message = format!("{} draws {} cards.", self.players[seat].name(), drawn);
                self.notify(message);
                return;
            }
        }
        if !self.sweep_eliminations() {
            self.initiate_round();
        }
    }

    fn top_up(&mut self, seat: PlayerId) -> usize {
        let mut drawn = 0;
        while self.players[seat].hand_len() < self.config.hand_size {
            let Some(card) = self.deck.draw() else {
                break;
            };
            self.players[seat].add_card(card);
            drawn += 1;
        }
        drawn
    }

    /// With the deck gone, retire everyone holding no cards and make sure
    /// both roles sit with active players. Returns true if the game ended.
    fn sweep_eliminations(&mut self) -> bool {
        if self.deck.is_empty() {
            let empty: Vec<PlayerId> = self
                .players
                .iter()
                .filter(|(_, player)| player.is_active() && player.is_out_of_cards())
                .map(|(seat, _)| seat)
                .collect();
            for seat in empty {
                self.check_if_out(seat);
                if self.is_over() {
                    return true;
                }
            }
        }
        if !self.players[self.attacker].is_active() {
            self.attacker = self.next_seat(self.attacker);
        }
        if !self.players[self.defender].is_active() || self.defender == self.attacker {
            self.defender = self.next_seat(self.attacker);
        }
        false
    }

    /// Retire `seat` if it has no cards and none are left to draw.
    pub(super) fn check_if_out(&mut self, seat: PlayerId) {
        let deck_empty = self.deck.is_empty();
        let player = &mut self.players[seat];
        if !deck_empty || !player.is_out_of_cards() || !player.eliminate() {
            return;
        }
        self.players_remaining = self.players_remaining.saturating_sub(1);
        info!(seat = %seat, remaining = self.players_remaining, "player out");
        let message = format!("{} is out of cards.", self.players[seat].name());
        self.notify(message);
        self.check_for_game_over();
    }

    fn check_for_game_over(&mut self) {
        if self.players_remaining > 1 {
            return;
        }
        let durak = self
            .players
            .iter()
            .filter(|(_, player)| player.is_active())
            .map(|(seat, _)| seat)
            .last();
        for (_, player) in self.players.iter_mut() {
            player.deselect();
        }
        self.set_phase(Phase::GameOver { durak });
        let message = match durak {
            Some(seat) => format!("This game is over! {} is the durak!", self.players[seat].name()),
            None => "This game is over! Nobody is the durak.".to_string(),
        };
        info!(durak = ?durak, "game over");
        self.notify(message);
    }

    // ---- card movement ----

    /// Move the card at `index` in `seat`'s hand onto the battlefield.
    pub(super) fn attack_from_hand(&mut self, seat: PlayerId, index: usize) -> Result<(), IllegalMove> {
        let card = self.players[seat]
            .hand()
            .get(index)
            .ok_or(IllegalMove::NoSuchCard { index })?;
        self.battlefield.check_attack(card)?;

        let card = self.players[seat]
            .remove_card(index)
            .map_err(|_| IllegalMove::NoSuchCard { index })?;
        if let Err(rejected) = self.battlefield.add_attack(card) {
            self.players[seat].add_card(rejected.card);
            return Err(rejected.reason);
        }
        self.players[seat].set_played_attack(true);
        Ok(())
    }

    /// Beat the attack in `slot` with the card at `index` in `seat`'s hand.
    pub(super) fn defend_from_hand(
        &mut self,
        seat: PlayerId,
        index: usize,
        slot: usize,
    ) -> Result<(), IllegalMove> {
        let trump = self.trump_suit().ok_or(IllegalMove::CannotBeat)?;
        let card = self.players[seat]
            .hand()
            .get(index)
            .ok_or(IllegalMove::NoSuchCard { index })?;
        self.battlefield.check_defense(card, slot, trump)?;

        let card = self.players[seat]
            .remove_card(index)
            .map_err(|_| IllegalMove::NoSuchCard { index })?;
        if let Err(rejected) = self.battlefield.add_defense(card, slot, trump) {
            self.players[seat].add_card(rejected.card);
            return Err(rejected.reason);
        }
        Ok(())
    }

    pub(super) fn surrender_seat(&mut self, seat: PlayerId) {
        self.players[seat].set_status(Status::Surrendered);
        let message = if self.players[seat].is_human() {
            "You surrender.".to_string()
        } else {
            format!("{} surrenders.", self.players[seat].name())
        };
        self.notify(message);
    }

    // ---- bookkeeping ----

    fn acting_human(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Attacking => Some(self.attacker),
            Phase::Defending => Some(self.defender),
            _ => None,
        }
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "phase transition");
        }
        self.phase = phase;
    }

    pub(super) fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.notifier.notify(&message);
        self.status_text = message;
    }

    fn reject(&mut self, reason: IllegalMove) -> Outcome {
        self.notify(reason.to_string());
        Outcome::Rejected(reason)
    }
}
