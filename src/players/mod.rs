//! Players: hands, activity and the role markers of the current round.

pub mod player;

pub use player::{HandError, Player, Status};
