//! Command tags understood by the fantasy sports program.
//!
//! The ordinal of each variant is the first byte of every instruction payload.
//! The program matches on these values independently, so they are spelled out
//! explicitly and must never be reordered or reused.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    Uninitialized = 0,
    AddPlayers = 1,
    InitializeRoot = 2,
    SeedDraftSelection = 3,
    StartSeason = 4,
    CreateLeague = 5,
    JoinLeague = 6,
    UpdateLineup = 7,
    PickPlayer = 8,
    ProposeSwaps = 9,
    AcceptSwap = 10,
    UpdatePlayerScore = 11,
}

impl Command {
    pub const ALL: [Command; 12] = [
        Command::Uninitialized,
        Command::AddPlayers,
        Command::InitializeRoot,
        Command::SeedDraftSelection,
        Command::StartSeason,
        Command::CreateLeague,
        Command::JoinLeague,
        Command::UpdateLineup,
        Command::PickPlayer,
        Command::ProposeSwaps,
        Command::AcceptSwap,
        Command::UpdatePlayerScore,
    ];

    /// The wire tag.
    pub fn ordinal(self) -> u8 {
        self.into()
    }

    /// Whether this crate can build an instruction for the command.
    ///
    /// The remaining ordinals are reserved by the program but have no encoder here.
    pub fn has_encoder(self) -> bool {
        matches!(
            self,
            Command::AddPlayers
                | Command::InitializeRoot
                | Command::SeedDraftSelection
                | Command::CreateLeague
                | Command::JoinLeague
                | Command::PickPlayer
                | Command::UpdatePlayerScore
        )
    }

    /// Look up a command by its camelCase name, as used in intents.
    pub fn from_name(name: &str) -> Option<Command> {
        serde_json::from_value(serde_json::Value::String(name.to_string())).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Command::Uninitialized, 0)]
    #[case(Command::AddPlayers, 1)]
    #[case(Command::InitializeRoot, 2)]
    #[case(Command::SeedDraftSelection, 3)]
    #[case(Command::StartSeason, 4)]
    #[case(Command::CreateLeague, 5)]
    #[case(Command::JoinLeague, 6)]
    #[case(Command::UpdateLineup, 7)]
    #[case(Command::PickPlayer, 8)]
    #[case(Command::ProposeSwaps, 9)]
    #[case(Command::AcceptSwap, 10)]
    #[case(Command::UpdatePlayerScore, 11)]
    fn test_fixed_ordinals(#[case] command: Command, #[case] ordinal: u8) {
        assert_eq!(command.ordinal(), ordinal);
        assert_eq!(Command::try_from(ordinal).unwrap(), command);
    }

    #[test]
    fn test_all_is_in_ordinal_order() {
        for (i, command) in Command::ALL.iter().enumerate() {
            assert_eq!(command.ordinal() as usize, i);
        }
    }

    #[test]
    fn test_unknown_ordinal() {
        assert!(Command::try_from(12u8).is_err());
    }

    #[test]
    fn test_reserved_commands_have_no_encoder() {
        assert!(!Command::Uninitialized.has_encoder());
        assert!(!Command::StartSeason.has_encoder());
        assert!(!Command::UpdateLineup.has_encoder());
        assert!(!Command::ProposeSwaps.has_encoder());
        assert!(!Command::AcceptSwap.has_encoder());
        assert!(Command::JoinLeague.has_encoder());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Command::from_name("joinLeague"), Some(Command::JoinLeague));
        assert_eq!(
            Command::from_name("updatePlayerScore"),
            Some(Command::UpdatePlayerScore)
        );
        assert_eq!(Command::from_name("JoinLeague"), None);
        assert_eq!(Command::from_name("transfer"), None);
    }
}
