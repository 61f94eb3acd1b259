//! Player actions, as sent by a UI.

use serde::{Deserialize, Serialize};

/// A UI action for the human seat, plus the table-level `Deal`.
///
/// Actions arrive as JSON tagged by `type`:
///
/// ```
/// use durak_engine::game::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type": "play_defense", "slot": 1}"#).unwrap();
/// assert_eq!(action, Action::PlayDefense { slot: 1 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Shuffle and deal a new game.
    Deal,
    /// Select the card at `index` in the acting player's hand.
    SelectCard { index: usize },
    /// Attack with the selected card.
    PlayAttack,
    /// Beat the attack in `slot` with the selected card.
    PlayDefense { slot: usize },
    Surrender,
    /// Pass, or continue an automatic step.
    Advance,
}
