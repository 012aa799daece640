//! Records shared between instructions and the program's root account.

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

use crate::layout::{Layout, LayoutWriter};

/// Roster position of a player.
///
/// The named ordinals are this crate's working assignment and are not
/// confirmed against the program. Any other byte is carried through
/// unchanged as `Other`, so a position the program defines but this enum
/// does not name still encodes.
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    IntoPrimitive,
    FromPrimitive,
    Deserialize,
    Serialize,
)]
#[serde(into = "u8", from = "u8")]
pub enum Position {
    Uninitialized = 0,
    QB = 1,
    RB = 2,
    WR = 3,
    TE = 4,
    K = 5,
    DEF = 6,
    #[num_enum(catch_all)]
    Other(u8),
}

// num_enum also reads `#[default]`, which clashes with `catch_all`.
#[allow(clippy::derivable_impls)]
impl Default for Position {
    fn default() -> Self {
        Position::Uninitialized
    }
}

/// A player as listed by the oracle: 3 bytes on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player {
    pub external_id: u16,
    pub position: Position,
}

impl Layout for Player {
    const SPAN: usize = u16::SPAN + u8::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.external_id);
        w.put(&u8::from(self.position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::encode;

    #[test]
    fn test_player_layout() {
        let player = Player {
            external_id: 1000,
            position: Position::WR,
        };
        assert_eq!(Player::SPAN, 3);
        assert_eq!(encode(&player), vec![0xE8, 0x03, 3]);
    }

    #[test]
    fn test_position_from_u8() {
        assert_eq!(Position::from(1), Position::QB);
        assert_eq!(Position::from(6), Position::DEF);
        assert_eq!(Position::from(7), Position::Other(7));
    }

    #[test]
    fn test_unnamed_position_round_trips_its_byte() {
        let player = Player {
            external_id: 1,
            position: Position::from(200),
        };
        assert_eq!(encode(&player), vec![1, 0, 200]);
    }

    #[test]
    fn test_position_deserializes_from_number() {
        let position: Position = serde_json::from_str("4").unwrap();
        assert_eq!(position, Position::TE);
        let position: Position = serde_json::from_str("99").unwrap();
        assert_eq!(position, Position::Other(99));
        assert!(serde_json::from_str::<Position>("300").is_err());
    }
}
