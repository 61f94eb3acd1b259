//! The game: phases, transitions and the inputs that drive them.
//!
//! ## Key Types
//!
//! - `Game`: the state machine and sole owner of the cards in play
//! - `Phase`: where the game is waiting
//! - `Action`: UI input for the human seat
//! - `Outcome`: accepted, rejected with a reason, or ignored
//! - `GameSnapshot`: the exported state sent to decision sources
//! - `Notifier`: where status messages go
//!
//! ## Round flow
//!
//! ```text
//! deal ─► initiate ─► attack ─► defend ─► … ─► end of round ─► redraw ─► initiate
//!                        ▲         │
//!                        └─────────┘  (attackers rotate until nobody adds a card)
//! ```
//!
//! Human seats act through [`Game::apply`]; computer seats through
//! [`Game::pending_request`] and `submit_*`. Everything else is a single
//! [`Game::advance`] step, so a UI can pace the table however it likes.

mod action;
mod driver;
mod machine;
mod notify;
mod outcome;
mod phase;
mod snapshot;

pub use action::Action;
pub use machine::Game;
pub use notify::{Notifier, TracingNotifier};
pub use outcome::Outcome;
pub use phase::Phase;
pub use snapshot::{BattlefieldSnapshot, GameSnapshot, PlayerSnapshot};
