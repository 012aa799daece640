//! Instruction builders for the fantasy sports program.
//!
//! Each builder produces the account list in the exact order and with the
//! exact signer/writable flags the program indexes positionally, plus the
//! payload: the command ordinal followed by the command's record.
//!
//! [`SfsInstruction`] is the single dispatch point used by the intent layer
//! and the WASM bindings.

mod league;
mod root;
mod score;

pub use league::{
    create_create_league_instruction, create_join_league_instruction,
    create_pick_player_instruction,
};
pub use root::{
    create_add_players_instruction, create_initialize_root_instruction,
    create_seed_draft_selection_instruction,
};
pub use score::create_update_player_score_instruction;

use solana_sdk::instruction::Instruction;

use crate::command::Command;
use crate::error::SfsError;
use crate::pubkey::Pubkey;
use crate::state::Player;

/// Typed arguments for every command that has an encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SfsInstruction {
    InitializeRoot {
        root: Pubkey,
        oracle_authority: Pubkey,
        current_week: u8,
    },
    AddPlayers {
        root: Pubkey,
        players: Vec<Player>,
    },
    SeedDraftSelection {
        root: Pubkey,
        pick_order: Vec<u8>,
    },
    CreateLeague {
        root: Pubkey,
        bank: Pubkey,
        name: String,
        bid: u64,
        users_limit: u8,
        owner: Pubkey,
    },
    JoinLeague {
        root: Pubkey,
        bank: Pubkey,
        league_id: u16,
        owner: Pubkey,
    },
    PickPlayer {
        root: Pubkey,
        league_id: u16,
        user_id: u8,
        player_id: u16,
        owner: Pubkey,
    },
    UpdatePlayerScore {
        root: Pubkey,
        bank: Pubkey,
        player_id: u16,
        player_score: u16,
        owner: Pubkey,
    },
}

impl SfsInstruction {
    pub fn command(&self) -> Command {
        match self {
            SfsInstruction::InitializeRoot { .. } => Command::InitializeRoot,
            SfsInstruction::AddPlayers { .. } => Command::AddPlayers,
            SfsInstruction::SeedDraftSelection { .. } => Command::SeedDraftSelection,
            SfsInstruction::CreateLeague { .. } => Command::CreateLeague,
            SfsInstruction::JoinLeague { .. } => Command::JoinLeague,
            SfsInstruction::PickPlayer { .. } => Command::PickPlayer,
            SfsInstruction::UpdatePlayerScore { .. } => Command::UpdatePlayerScore,
        }
    }

    /// Encode the instruction for the program deployed at `program_id`.
    pub fn build(&self, program_id: &Pubkey) -> Result<Instruction, SfsError> {
        let instruction = match self {
            SfsInstruction::InitializeRoot {
                root,
                oracle_authority,
                current_week,
            } => create_initialize_root_instruction(
                program_id,
                root,
                oracle_authority,
                *current_week,
            ),
            SfsInstruction::AddPlayers { root, players } => {
                create_add_players_instruction(program_id, root, players)?
            }
            SfsInstruction::SeedDraftSelection { root, pick_order } => {
                create_seed_draft_selection_instruction(program_id, root, pick_order)?
            }
            SfsInstruction::CreateLeague {
                root,
                bank,
                name,
                bid,
                users_limit,
                owner,
            } => create_create_league_instruction(
                program_id,
                root,
                bank,
                name,
                *bid,
                *users_limit,
                owner,
            )?,
            SfsInstruction::JoinLeague {
                root,
                bank,
                league_id,
                owner,
            } => create_join_league_instruction(program_id, root, bank, *league_id, owner),
            SfsInstruction::PickPlayer {
                root,
                league_id,
                user_id,
                player_id,
                owner,
            } => create_pick_player_instruction(
                program_id, root, *league_id, *user_id, *player_id, owner,
            ),
            SfsInstruction::UpdatePlayerScore {
                root,
                bank,
                player_id,
                player_score,
                owner,
            } => create_update_player_score_instruction(
                program_id,
                root,
                bank,
                *player_id,
                *player_score,
                owner,
            ),
        };

        log::debug!(
            "built {:?} instruction: {} data bytes, {} accounts",
            self.command(),
            instruction.data.len(),
            instruction.accounts.len()
        );
        Ok(instruction)
    }
}
