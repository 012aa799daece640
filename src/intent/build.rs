//! Intent to instruction conversion.

use serde::Deserialize;
use solana_sdk::instruction::Instruction;

use super::types::*;
use crate::command::Command;
use crate::error::SfsError;
use crate::instruction::SfsInstruction;
use crate::layout::{decimal_to_u64, number_to_u16, number_to_u8};
use crate::pubkey::{Pubkey, PubkeyExt};
use crate::state::{Player, Position};

/// Build an instruction from a JSON intent.
///
/// # Arguments
/// * `program_id` - Address of the fantasy sports program (base58)
/// * `intent_json` - `{ "command": "<name>", ...fields }`
pub fn build_from_intent(
    program_id: &str,
    intent_json: &serde_json::Value,
) -> Result<Instruction, SfsError> {
    let program_id = Pubkey::from_base58("programId", program_id)?;
    parse_intent(intent_json)?.build(&program_id)
}

/// Resolve a JSON intent into typed, range-checked instruction arguments.
pub fn parse_intent(intent_json: &serde_json::Value) -> Result<SfsInstruction, SfsError> {
    let name = intent_json
        .get("command")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SfsError::invalid("Missing command in intent"))?;

    let command = Command::from_name(name)
        .ok_or_else(|| SfsError::invalid(&format!("Unknown command: {}", name)))?;

    match command {
        Command::InitializeRoot => parse_initialize_root(from_json(command, intent_json)?),
        Command::AddPlayers => parse_add_players(from_json(command, intent_json)?),
        Command::SeedDraftSelection => {
            parse_seed_draft_selection(from_json(command, intent_json)?)
        }
        Command::CreateLeague => parse_create_league(from_json(command, intent_json)?),
        Command::JoinLeague => parse_join_league(from_json(command, intent_json)?),
        Command::PickPlayer => parse_pick_player(from_json(command, intent_json)?),
        Command::UpdatePlayerScore => {
            parse_update_player_score(from_json(command, intent_json)?)
        }
        Command::Uninitialized
        | Command::StartSeason
        | Command::UpdateLineup
        | Command::ProposeSwaps
        | Command::AcceptSwap => {
            log::warn!("intent names {:?}, which has no encoder", command);
            Err(SfsError::UnsupportedCommand(command))
        }
    }
}

fn from_json<'a, T: Deserialize<'a>>(
    command: Command,
    intent_json: &'a serde_json::Value,
) -> Result<T, SfsError> {
    T::deserialize(intent_json)
        .map_err(|e| SfsError::invalid(&format!("Invalid {:?} intent: {}", command, e)))
}

fn parse_initialize_root(intent: InitializeRootIntent) -> Result<SfsInstruction, SfsError> {
    Ok(SfsInstruction::InitializeRoot {
        root: Pubkey::from_base58("root", &intent.root)?,
        oracle_authority: Pubkey::from_base58("oracleAuthority", &intent.oracle_authority)?,
        current_week: number_to_u8("currentWeek", intent.current_week)?,
    })
}

/// Range check a JS player list.
pub fn parse_players(players: &[PlayerIntent]) -> Result<Vec<Player>, SfsError> {
    players
        .iter()
        .map(|p| {
            Ok(Player {
                external_id: number_to_u16("externalId", p.external_id)?,
                position: Position::from(number_to_u8("position", p.position)?),
            })
        })
        .collect()
}

fn parse_add_players(intent: AddPlayersIntent) -> Result<SfsInstruction, SfsError> {
    Ok(SfsInstruction::AddPlayers {
        root: Pubkey::from_base58("root", &intent.root)?,
        players: parse_players(&intent.players)?,
    })
}

fn parse_seed_draft_selection(
    intent: SeedDraftSelectionIntent,
) -> Result<SfsInstruction, SfsError> {
    let pick_order = intent
        .pick_order
        .iter()
        .map(|index| number_to_u8("pickOrder", *index))
        .collect::<Result<Vec<_>, SfsError>>()?;

    Ok(SfsInstruction::SeedDraftSelection {
        root: Pubkey::from_base58("root", &intent.root)?,
        pick_order,
    })
}

fn parse_create_league(intent: CreateLeagueIntent) -> Result<SfsInstruction, SfsError> {
    Ok(SfsInstruction::CreateLeague {
        root: Pubkey::from_base58("root", &intent.root)?,
        bank: Pubkey::from_base58("bank", &intent.bank)?,
        name: intent.name,
        bid: decimal_to_u64("bid", &intent.bid)?,
        users_limit: number_to_u8("usersLimit", intent.users_limit)?,
        owner: Pubkey::from_base58("owner", &intent.owner)?,
    })
}

fn parse_join_league(intent: JoinLeagueIntent) -> Result<SfsInstruction, SfsError> {
    Ok(SfsInstruction::JoinLeague {
        root: Pubkey::from_base58("root", &intent.root)?,
        bank: Pubkey::from_base58("bank", &intent.bank)?,
        league_id: number_to_u16("leagueId", intent.league_id)?,
        owner: Pubkey::from_base58("owner", &intent.owner)?,
    })
}

fn parse_pick_player(intent: PickPlayerIntent) -> Result<SfsInstruction, SfsError> {
    Ok(SfsInstruction::PickPlayer {
        root: Pubkey::from_base58("root", &intent.root)?,
        league_id: number_to_u16("leagueId", intent.league_id)?,
        user_id: number_to_u8("userId", intent.user_id)?,
        player_id: number_to_u16("playerId", intent.player_id)?,
        owner: Pubkey::from_base58("owner", &intent.owner)?,
    })
}

fn parse_update_player_score(
    intent: UpdatePlayerScoreIntent,
) -> Result<SfsInstruction, SfsError> {
    Ok(SfsInstruction::UpdatePlayerScore {
        root: Pubkey::from_base58("root", &intent.root)?,
        bank: Pubkey::from_base58("bank", &intent.bank)?,
        player_id: number_to_u16("playerId", intent.player_id)?,
        player_score: number_to_u16("playerScore", intent.player_score)?,
        owner: Pubkey::from_base58("owner", &intent.owner)?,
    })
}
