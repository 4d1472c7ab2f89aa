use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// Stable identifier for a player.
///
/// Distinct from the display name and color on purpose: two players may pick
/// the same color, and their ids still tell their pieces apart on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece color, stored as 24-bit RGB.
///
/// Parsed from 6-digit hex (`"#c52132"`, case-insensitive, leading `#`
/// required) and displayed back in the same form, lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        // from_str_radix would accept a leading '+', so check the digits first
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let byte = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Color {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A participant in one or more games.
///
/// Player records outlive any single game so that `wins` accumulates; the
/// tally is private and only the engine bumps it, on that player's win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: Color,
    wins: u32,
}

impl Player {
    /// Create a player with no wins yet.
    pub fn new(id: PlayerId, name: impl Into<String>, color: Color) -> Self {
        Player {
            id,
            name: name.into(),
            color,
            wins: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Games won by this player, accumulated across games.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }
}
