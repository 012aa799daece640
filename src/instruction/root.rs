//! Instructions that manage the root account: setup, player list and draft order.

use solana_sdk::instruction::{AccountMeta, Instruction};

use crate::command::Command;
use crate::constants::{LEAGUE_USERS_CAPACITY, MAX_PLAYERS_PER_INSTRUCTION, SYSVAR_RENT};
use crate::error::SfsError;
use crate::layout::{checked_u8, pack_tagged, FixedSeq, Layout, LayoutWriter};
use crate::pubkey::Pubkey;
use crate::state::Player;

struct InitializeRootData {
    oracle_authority: Pubkey,
    current_week: u8,
}

impl Layout for InitializeRootData {
    const SPAN: usize = Pubkey::SPAN + u8::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.oracle_authority);
        w.put(&self.current_week);
    }
}

struct AddPlayersData {
    length: u8,
    players: FixedSeq<Player, MAX_PLAYERS_PER_INSTRUCTION>,
}

impl Layout for AddPlayersData {
    const SPAN: usize = u8::SPAN + FixedSeq::<Player, MAX_PLAYERS_PER_INSTRUCTION>::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.length);
        w.put(&self.players);
    }
}

struct SeedDraftSelectionData {
    pick_order: FixedSeq<u8, LEAGUE_USERS_CAPACITY>,
}

impl Layout for SeedDraftSelectionData {
    const SPAN: usize = FixedSeq::<u8, LEAGUE_USERS_CAPACITY>::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.pick_order);
    }
}

/// Build an InitializeRoot instruction.
///
/// ### Accounts
///  0. `[WRITE]` Root account
///  1. `[READ]` Rent sysvar
pub fn create_initialize_root_instruction(
    program_id: &Pubkey,
    root: &Pubkey,
    oracle_authority: &Pubkey,
    current_week: u8,
) -> Instruction {
    let data = pack_tagged(
        Command::InitializeRoot,
        &InitializeRootData {
            oracle_authority: *oracle_authority,
            current_week,
        },
    );

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*root, false),
            AccountMeta::new_readonly(SYSVAR_RENT, false),
        ],
        data,
    }
}

/// Build an AddPlayers instruction.
///
/// The payload always carries `MAX_PLAYERS_PER_INSTRUCTION` player slots; the
/// leading length byte tells the program how many are in use.
///
/// ### Accounts
///  0. `[WRITE]` Root account
pub fn create_add_players_instruction(
    program_id: &Pubkey,
    root: &Pubkey,
    players: &[Player],
) -> Result<Instruction, SfsError> {
    let players = FixedSeq::from_slice("players", players)?;
    let length = checked_u8("length", players.len() as u64)?;
    let data = pack_tagged(Command::AddPlayers, &AddPlayersData { length, players });

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*root, false)],
        data,
    })
}

/// Build a SeedDraftSelection instruction from a pick order of user indices.
///
/// ### Accounts
///  0. `[WRITE]` Root account
pub fn create_seed_draft_selection_instruction(
    program_id: &Pubkey,
    root: &Pubkey,
    pick_order: &[u8],
) -> Result<Instruction, SfsError> {
    let pick_order = FixedSeq::from_slice("pickOrder", pick_order)?;
    let data = pack_tagged(
        Command::SeedDraftSelection,
        &SeedDraftSelectionData { pick_order },
    );

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*root, false)],
        data,
    })
}
