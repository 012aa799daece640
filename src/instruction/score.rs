use solana_sdk::instruction::{AccountMeta, Instruction};

use crate::command::Command;
use crate::constants::SYSTEM_PROGRAM;
use crate::layout::{pack_tagged, Layout, LayoutWriter};
use crate::pubkey::Pubkey;

struct UpdatePlayerScoreData {
    player_id: u16,
    player_score: u16,
}

impl Layout for UpdatePlayerScoreData {
    const SPAN: usize = u16::SPAN + u16::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.player_id);
        w.put(&self.player_score);
    }
}

/// Build an UpdatePlayerScore instruction, signed by the oracle authority.
///
/// ### Accounts
///  0. `[WRITE]` Root account
///  1. `[SIGNER]` Oracle authority
///  2. `[WRITE]` Bank account
///  3. `[READ]` System program
pub fn create_update_player_score_instruction(
    program_id: &Pubkey,
    root: &Pubkey,
    bank: &Pubkey,
    player_id: u16,
    player_score: u16,
    owner: &Pubkey,
) -> Instruction {
    let data = pack_tagged(
        Command::UpdatePlayerScore,
        &UpdatePlayerScoreData {
            player_id,
            player_score,
        },
    );

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*root, false),
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(*bank, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM, false),
        ],
        data,
    }
}
