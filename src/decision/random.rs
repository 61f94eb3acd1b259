//! Seeded random decisions.

use std::collections::BTreeMap;

use super::{AttackDecision, DecisionError, DecisionRequest, DecisionSource, DefenseDecision};
use crate::cards::Card;
use crate::core::GameRng;

/// Picks uniformly among legal moves.
///
/// Leads with a random card, follows up with a matching rank at
/// `follow_up_chance`, and defends each open slot with a random card
/// that beats it. Surrenders when any slot cannot be covered.
#[derive(Clone, Debug)]
pub struct RandomDecider {
    rng: GameRng,
    follow_up_chance: f64,
}

impl RandomDecider {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            follow_up_chance: 0.5,
        }
    }

    /// Probability of adding a card to an attack already in progress.
    #[must_use]
    pub fn with_follow_up_chance(mut self, chance: f64) -> Self {
        self.follow_up_chance = chance.clamp(0.0, 1.0);
        self
    }
}

impl DecisionSource for RandomDecider {
    fn decide_attack(&mut self, request: &DecisionRequest) -> Result<AttackDecision, DecisionError> {
        let hand = request.hand();
        let battlefield = &request.state.battlefield;

        if battlefield.attacks.is_empty() {
            return Ok(match self.rng.choose(hand) {
                Some(card) => AttackDecision::Play(vec![card.clone()]),
                None => AttackDecision::Pass,
            });
        }
        if battlefield.attacks.len() >= battlefield.max_attacks {
            return Ok(AttackDecision::Pass);
        }

        let ranks = battlefield.valid_ranks();
        let candidates: Vec<&Card> = hand.iter().filter(|c| ranks.contains(&c.rank())).collect();
        if candidates.is_empty() || !self.rng.gen_bool(self.follow_up_chance) {
            return Ok(AttackDecision::Pass);
        }
        Ok(match self.rng.choose(&candidates) {
            Some(card) => AttackDecision::Play(vec![(*card).clone()]),
            None => AttackDecision::Pass,
        })
    }

    fn decide_defense(&mut self, request: &DecisionRequest) -> Result<DefenseDecision, DecisionError> {
        let trump = request
            .state
            .trump_suit()
            .ok_or_else(|| DecisionError::InvalidRequest("no trump card in state".into()))?;

        let mut available: Vec<&Card> = request.hand().iter().collect();
        let mut plan = BTreeMap::new();
        for (slot, attack) in request.state.battlefield.attacks.iter().enumerate() {
            if attack.is_defended() {
                continue;
            }
            let beaters: Vec<usize> = available
                .iter()
                .enumerate()
                .filter(|(_, card)| card.can_beat(attack.attacking(), trump))
                .map(|(i, _)| i)
                .collect();
            let Some(&pick) = self.rng.choose(&beaters) else {
                return Ok(DefenseDecision::Surrender);
            };
            plan.insert(slot, available.swap_remove(pick).clone());
        }
        Ok(DefenseDecision::Defend(plan))
    }
}
