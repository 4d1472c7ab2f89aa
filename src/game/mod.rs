//! Core game logic: board representation, player records, win rules, turn
//! rotation, and the game state machine with immutable transitions.

mod board;
mod player;
mod rules;
mod state;
mod turn;

pub use board::{Board, Cell};
pub use player::{Color, Player, PlayerId};
pub use rules::{check_win, check_win_at, WIN_LENGTH};
pub use state::{GameState, GameStatus};
pub use turn::next_player_index;
