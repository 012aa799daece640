//! Wire constants exported via WASM.
//!
//! These let the front-end size its forms and look up well-known accounts
//! without duplicating values that must match the program.

use wasm_bindgen::prelude::*;

use crate::command::Command;
use crate::constants::{
    LEAGUE_NAME_MAX_SYMBOLS, LEAGUE_USERS_CAPACITY, MAX_PLAYERS_PER_INSTRUCTION,
    SYSTEM_PROGRAM_ID, SYSVAR_RENT_ID,
};

/// System Program ID
#[wasm_bindgen(js_name = systemProgramId)]
pub fn system_program_id() -> String {
    SYSTEM_PROGRAM_ID.to_string()
}

/// Rent sysvar address
#[wasm_bindgen(js_name = sysvarRentId)]
pub fn sysvar_rent_id() -> String {
    SYSVAR_RENT_ID.to_string()
}

/// Maximum number of players in one AddPlayers instruction (255)
#[wasm_bindgen(js_name = maxPlayersPerInstruction)]
pub fn max_players_per_instruction() -> u32 {
    MAX_PLAYERS_PER_INSTRUCTION as u32
}

/// Maximum league name length in UTF-16 code units (32)
#[wasm_bindgen(js_name = leagueNameMaxSymbols)]
pub fn league_name_max_symbols() -> u32 {
    LEAGUE_NAME_MAX_SYMBOLS as u32
}

/// Maximum number of users in a league (12)
#[wasm_bindgen(js_name = leagueUsersCapacity)]
pub fn league_users_capacity() -> u32 {
    LEAGUE_USERS_CAPACITY as u32
}

/// Wire ordinal of a command, by its camelCase name.
///
/// @param name - e.g. "joinLeague"
/// @returns The ordinal, or undefined for an unknown name
#[wasm_bindgen(js_name = commandOrdinal)]
pub fn command_ordinal(name: &str) -> Option<u8> {
    Command::from_name(name).map(Command::ordinal)
}
