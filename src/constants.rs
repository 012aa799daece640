//! Wire constants shared with the fantasy sports program.
//!
//! These must change in lockstep with the program's own definitions.

use solana_sdk::pubkey::Pubkey;

/// Capacity of the player sequence in an AddPlayers payload.
/// The used length travels as a u8, so this cannot exceed 255.
pub const MAX_PLAYERS_PER_INSTRUCTION: usize = 255;

/// Fixed width, in UTF-16 code units, of a league name.
pub const LEAGUE_NAME_MAX_SYMBOLS: usize = 32;

/// Maximum number of users in a league, and the width of a pick order.
pub const LEAGUE_USERS_CAPACITY: usize = 12;

/// Program IDs as base58 strings
pub const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";
pub const SYSVAR_RENT_ID: &str = "SysvarRent111111111111111111111111111111111";

pub const SYSTEM_PROGRAM: Pubkey = Pubkey::from_str_const(SYSTEM_PROGRAM_ID);
pub const SYSVAR_RENT: Pubkey = Pubkey::from_str_const(SYSVAR_RENT_ID);
