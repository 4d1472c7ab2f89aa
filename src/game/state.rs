use super::board::{Board, Cell};
use super::player::{Player, PlayerId};
use super::{rules, turn};
use crate::error::{MoveError, SetupError};

/// Where a game stands.
///
/// Starts `InProgress` and transitions at most once, to `Won` or `Tied`;
/// it never reverses and never moves between the two terminal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

impl GameStatus {
    /// True for `Won` and `Tied` — no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Complete state of one game: board, roster, whose turn it is, and whether
/// the game has ended.
///
/// States are values, not machines. Applying a move with [`drop_piece`]
/// yields a new state and leaves the old one intact; nothing here is shared
/// with a rendering layer or mutated behind the caller's back.
///
/// [`drop_piece`]: GameState::drop_piece
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    current_player_index: usize,
    status: GameStatus,
}

impl GameState {
    /// Start a fresh game. The first player in the roster moves first.
    ///
    /// Pass the previous game's roster (see [`into_players`]) to carry win
    /// tallies across games. The roster needs at least two entries with
    /// distinct ids, and both board dimensions must be nonzero.
    ///
    /// [`into_players`]: GameState::into_players
    pub fn new(players: Vec<Player>, width: usize, height: usize) -> Result<Self, SetupError> {
        if players.len() < 2 {
            return Err(SetupError::NotEnoughPlayers {
                count: players.len(),
            });
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.id() == player.id()) {
                return Err(SetupError::DuplicatePlayerId(player.id()));
            }
        }
        Ok(GameState {
            board: Board::new(width, height)?,
            players,
            current_player_index: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Start the next game with this game's roster and dimensions.
    ///
    /// Win tallies carry over; the board is rebuilt empty and the first
    /// player moves first again. Infallible because everything was
    /// validated when `self` was created.
    pub fn rematch(&self) -> GameState {
        GameState {
            board: self.board.cleared(),
            players: self.players.clone(),
            current_player_index: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Apply the current player's move, returning the resulting state.
    ///
    /// `self` is never touched: on success the caller gets a new value to
    /// adopt, on error the game is exactly as it was. Errors are the
    /// recoverable kind — out-of-range column, full column, or a game that
    /// is already over.
    pub fn drop_piece(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.drop_piece_mut(column)?;
        Ok(next)
    }

    /// Apply the current player's move in place.
    ///
    /// Same checks and transitions as [`drop_piece`] without cloning the
    /// state; on error `self` is untouched.
    ///
    /// [`drop_piece`]: GameState::drop_piece
    pub fn drop_piece_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.players[self.current_player_index].id();
        let row = self.board.drop_disc(column, mover)?;

        if rules::check_win_at(&self.board, mover, row, column) {
            self.status = GameStatus::Won(mover);
            self.players[self.current_player_index].record_win();
            // the winner stays current; the turn does not advance
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
        } else {
            self.current_player_index =
                turn::next_player_index(self.current_player_index, self.players.len());
        }
        Ok(())
    }

    /// The player whose turn it is. Once the game is won this is still the
    /// winner, since the turn stops advancing.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or tied.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Cell contents at a position, or `None` outside the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster in turn order, win tallies current.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Take the roster out of a finished (or abandoned) game to seed the
    /// next one.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// The winning player, while the status is `Won`.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(id) => self.players.iter().find(|p| p.id() == id),
            _ => None,
        }
    }
}
