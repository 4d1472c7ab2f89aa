//! Turn rotation over an ordered roster.

/// Index of the player who moves after `current`, cycling through a roster
/// of `player_count` players.
///
/// Plain modular arithmetic: any roster size of at least one works, with no
/// two-player special case. `player_count` must be nonzero.
pub fn next_player_index(current: usize, player_count: usize) -> usize {
    (current + 1) % player_count
}
