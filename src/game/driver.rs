//! Decisions for computer seats.
//!
//! A computer seat's turn parks the game in an `Awaiting*` phase. The
//! caller fetches the [`DecisionRequest`], obtains an answer from any
//! [`DecisionSource`], and submits it. Responses are validated against
//! the seat's hand before anything moves; individual cards the rules
//! refuse are skipped with a warning.

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::cards::Card;
use crate::core::{DecisionFailurePolicy, PlayerId};
use crate::decision::{
    AttackDecision, DecisionKind, DecisionRequest, DecisionSource, DefenseDecision,
};
use crate::error::{GameError, ProtocolError};

use super::{Game, Outcome, Phase};

impl Game {
    /// The decision the game is waiting for, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<DecisionRequest> {
        let (seat, kind) = match self.phase {
            Phase::AwaitingAttack => (self.attacker, DecisionKind::Attack),
            Phase::AwaitingDefense => (self.defender, DecisionKind::Defense),
            _ => return None,
        };
        Some(DecisionRequest {
            seat,
            kind,
            state: self.snapshot(),
        })
    }

    /// Apply the attacking computer seat's answer.
    ///
    /// Passing on an empty battlefield is a protocol error and leaves the
    /// request pending.
    pub fn submit_attack(&mut self, decision: AttackDecision) -> Result<Outcome, GameError> {
        if self.phase != Phase::AwaitingAttack {
            return Ok(Outcome::Ignored);
        }
        let seat = self.attacker;
        let cards = match decision {
            AttackDecision::Play(cards) if !cards.is_empty() => cards,
            _ => {
                if self.battlefield.is_empty() {
                    return Err(ProtocolError::MustAttack { seat }.into());
                }
                let message = format!("{} passes.", self.players[seat].name());
                self.notify(message);
                self.set_phase(Phase::AfterAttack);
                return Ok(Outcome::Accepted);
            }
        };
        self.validate_cards(seat, &cards)?;

        let mut played = 0;
        for card in &cards {
            let Some(index) = self.players[seat].position_of(card) else {
                continue;
            };
            match self.attack_from_hand(seat, index) {
                Ok(()) => played += 1,
                Err(reason) => warn!(seat = %seat, card = %card, %reason, "attack card refused"),
            }
        }
        let message = match played {
            0 => format!("{} passes.", self.players[seat].name()),
            1 => format!("{} attacks.", self.players[seat].name()),
            n => format!("{} attacks with {} cards.", self.players[seat].name(), n),
        };
        self.notify(message);

        self.check_if_out(seat);
        if !self.is_over() {
            self.set_phase(Phase::AfterAttack);
        }
        Ok(Outcome::Accepted)
    }

    /// Apply the defending computer seat's answer.
    ///
    /// A defense that leaves any attack unbeaten counts as a surrender.
    pub fn submit_defense(&mut self, decision: DefenseDecision) -> Result<Outcome, GameError> {
        if self.phase != Phase::AwaitingDefense {
            return Ok(Outcome::Ignored);
        }
        let seat = self.defender;
        match decision {
            DefenseDecision::Surrender => self.surrender_seat(seat),
            DefenseDecision::Defend(plan) => {
                let attacks = self.battlefield.len();
                if let Some(&slot) = plan.keys().find(|&&slot| slot >= attacks) {
                    return Err(ProtocolError::NoSuchSlot { slot, attacks }.into());
                }
                self.validate_cards(seat, plan.values())?;

                for (slot, card) in &plan {
                    let Some(index) = self.players[seat].position_of(card) else {
                        continue;
                    };
                    if let Err(reason) = self.defend_from_hand(seat, index, *slot) {
                        warn!(seat = %seat, card = %card, slot, %reason, "defense card refused");
                    }
                }

                if self.battlefield.has_new_attacks() {
                    self.surrender_seat(seat);
                } else {
                    let message = format!("{} beats all current attacks.", self.players[seat].name());
                    self.notify(message);
                    self.check_if_out(seat);
                }
            }
        }
        if !self.is_over() {
            self.set_phase(Phase::AfterDefense);
        }
        Ok(Outcome::Accepted)
    }

    /// Ask `source` for the pending decision and apply it.
    ///
    /// Under [`DecisionFailurePolicy::Fallback`], a failed or unusable
    /// answer is replaced by the most passive legal move. Otherwise the
    /// error is returned and the request stays pending.
    pub fn resolve_pending(&mut self, source: &mut dyn DecisionSource) -> Result<Outcome, GameError> {
        let Some(request) = self.pending_request() else {
            return Ok(Outcome::Ignored);
        };
        let result = match request.kind {
            DecisionKind::Attack => source
                .decide_attack(&request)
                .map_err(GameError::from)
                .and_then(|decision| self.submit_attack(decision)),
            DecisionKind::Defense => source
                .decide_defense(&request)
                .map_err(GameError::from)
                .and_then(|decision| self.submit_defense(decision)),
        };

        match result {
            Err(err) if self.config.on_decision_failure == DecisionFailurePolicy::Fallback => {
                warn!(seat = %request.seat, kind = ?request.kind, error = %err, "decision failed, using fallback");
                self.fallback(request.kind)
            }
            other => other,
        }
    }

    /// Step the game until it needs a human, ends, or `max_steps` inputs
    /// have been applied. Returns the phase it stopped in.
    pub fn run_until_input(
        &mut self,
        source: &mut dyn DecisionSource,
        max_steps: usize,
    ) -> Result<Phase, GameError> {
        for _ in 0..max_steps {
            match self.phase {
                Phase::Undealt | Phase::Attacking | Phase::Defending | Phase::GameOver { .. } => {
                    return Ok(self.phase);
                }
                Phase::AwaitingAttack | Phase::AwaitingDefense => {
                    let _ = self.resolve_pending(source)?;
                }
                _ => {
                    let _ = self.advance();
                }
            }
        }
        Ok(self.phase)
    }

    fn fallback(&mut self, kind: DecisionKind) -> Result<Outcome, GameError> {
        match kind {
            DecisionKind::Attack => {
                let lead = if self.battlefield.is_empty() {
                    self.players[self.attacker].hand().first().cloned()
                } else {
                    None
                };
                let decision = match lead {
                    Some(card) => AttackDecision::Play(vec![card]),
                    None => AttackDecision::Pass,
                };
                self.submit_attack(decision)
            }
            DecisionKind::Defense => self.submit_defense(DefenseDecision::Surrender),
        }
    }

    /// Every card must be in the seat's hand, and named once.
    fn validate_cards<'a>(
        &self,
        seat: PlayerId,
        cards: impl IntoIterator<Item = &'a Card>,
    ) -> Result<(), ProtocolError> {
        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(card) {
                return Err(ProtocolError::DuplicateCard(card.clone()));
            }
            if self.players[seat].position_of(card).is_none() {
                return Err(ProtocolError::CardNotInHand {
                    seat,
                    card: card.clone(),
                });
            }
        }
        Ok(())
    }
}
