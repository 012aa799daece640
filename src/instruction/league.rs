//! League instructions: creating, joining and drafting.

use solana_sdk::instruction::{AccountMeta, Instruction};

use crate::command::Command;
use crate::constants::{LEAGUE_NAME_MAX_SYMBOLS, SYSTEM_PROGRAM};
use crate::error::SfsError;
use crate::layout::{pack_tagged, FixedUtf16String, Layout, LayoutWriter};
use crate::pubkey::Pubkey;

type LeagueName = FixedUtf16String<LEAGUE_NAME_MAX_SYMBOLS>;

struct CreateLeagueData {
    name: LeagueName,
    bid: u64,
    users_limit: u8,
}

impl Layout for CreateLeagueData {
    const SPAN: usize = LeagueName::SPAN + u64::SPAN + u8::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.name);
        w.put(&self.bid);
        w.put(&self.users_limit);
    }
}

struct JoinLeagueData {
    league_id: u16,
}

impl Layout for JoinLeagueData {
    const SPAN: usize = u16::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.league_id);
    }
}

struct PickPlayerData {
    league_id: u16,
    user_id: u8,
    player_id: u16,
}

impl Layout for PickPlayerData {
    const SPAN: usize = u16::SPAN + u8::SPAN + u16::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        w.put(&self.league_id);
        w.put(&self.user_id);
        w.put(&self.player_id);
    }
}

/// Build a CreateLeague instruction. The owner pays `bid` lamports into the bank.
///
/// ### Accounts
///  0. `[WRITE]` Root account
///  1. `[WRITE, SIGNER]` League owner
///  2. `[WRITE]` Bank account
///  3. `[READ]` System program
pub fn create_create_league_instruction(
    program_id: &Pubkey,
    root: &Pubkey,
    bank: &Pubkey,
    name: &str,
    bid: u64,
    users_limit: u8,
    owner: &Pubkey,
) -> Result<Instruction, SfsError> {
    let name = LeagueName::new("name", name)?;
    let data = pack_tagged(
        Command::CreateLeague,
        &CreateLeagueData {
            name,
            bid,
            users_limit,
        },
    );

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*root, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new(*bank, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM, false),
        ],
        data,
    })
}

/// Build a JoinLeague instruction.
///
/// ### Accounts
///  0. `[WRITE]` Root account
///  1. `[SIGNER]` Joining user
///  2. `[WRITE]` Bank account
///  3. `[READ]` System program
pub fn create_join_league_instruction(
    program_id: &Pubkey,
    root: &Pubkey,
    bank: &Pubkey,
    league_id: u16,
    owner: &Pubkey,
) -> Instruction {
    let data = pack_tagged(Command::JoinLeague, &JoinLeagueData { league_id });

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

/// Build a PickPlayer instruction for user `user_id` of league `league_id`.
///
/// ### Accounts
///  0. `[WRITE]` Root account
///  1. `[SIGNER]` Picking user
pub fn create_pick_player_instruction(
    program_id: &Pubkey,
    root: &Pubkey,
    league_id: u16,
    user_id: u8,
    player_id: u16,
    owner: &Pubkey,
) -> Instruction {
    let data = pack_tagged(
        Command::PickPlayer,
        &PickPlayerData {
            league_id,
            user_id,
            player_id,
        },
    );

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*root, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeViolation;

    fn program_id() -> Pubkey {
        Pubkey::from([1u8; 32])
    }

    fn root() -> Pubkey {
        Pubkey::from([2u8; 32])
    }

    fn bank() -> Pubkey {
        Pubkey::from([3u8; 32])
    }

    fn owner() -> Pubkey {
        Pubkey::from([4u8; 32])
    }

    #[test]
    fn test_create_league_layout() {
        let ix = create_create_league_instruction(
            &program_id(),
            &root(),
            &bank(),
            "Hi",
            1_000_000_000,
            8,
            &owner(),
        )
        .unwrap();

        assert_eq!(ix.data.len(), 1 + 2 * LEAGUE_NAME_MAX_SYMBOLS + 8 + 1);
        assert_eq!(ix.data[0], Command::CreateLeague.ordinal());
        assert_eq!(&ix.data[1..5], &[b'H', 0, b'i', 0]);
        assert!(ix.data[5..65].iter().all(|b| *b == 0));
        assert_eq!(hex::encode(&ix.data[65..73]), "00ca9a3b00000000");
        assert_eq!(ix.data[73], 8);
    }

    #[test]
    fn test_create_league_account_order() {
        let ix = create_create_league_instruction(
            &program_id(),
            &root(),
            &bank(),
            "League",
            0,
            4,
            &owner(),
        )
        .unwrap();

        let flags: Vec<(Pubkey, bool, bool)> = ix
            .accounts
            .iter()
            .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
            .collect();
        assert_eq!(
            flags,
            vec![
                (root(), false, true),
                (owner(), true, true),
                (bank(), false, true),
                (SYSTEM_PROGRAM, false, false),
            ]
        );
    }

    #[test]
    fn test_create_league_name_boundary() {
        let name = "n".repeat(LEAGUE_NAME_MAX_SYMBOLS);
        let ix = create_create_league_instruction(
            &program_id(),
            &root(),
            &bank(),
            &name,
            1,
            2,
            &owner(),
        )
        .unwrap();
        assert_eq!(ix.data.len(), 74);

        let name = "n".repeat(LEAGUE_NAME_MAX_SYMBOLS + 1);
        let err = create_create_league_instruction(
            &program_id(),
            &root(),
            &bank(),
            &name,
            1,
            2,
            &owner(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SfsError::shape(
                "name",
                ShapeViolation::StringTooLong {
                    len: LEAGUE_NAME_MAX_SYMBOLS + 1,
                    max: LEAGUE_NAME_MAX_SYMBOLS,
                }
            )
        );
    }

    #[test]
    fn test_join_league() {
        let ix = create_join_league_instruction(&program_id(), &root(), &bank(), 7, &owner());

        assert_eq!(ix.data, vec![Command::JoinLeague.ordinal(), 0x07, 0x00]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(root(), false),
                AccountMeta::new_readonly(owner(), true),
                AccountMeta::new(bank(), false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM, false),
            ]
        );
    }

    #[test]
    fn test_pick_player() {
        let ix = create_pick_player_instruction(&program_id(), &root(), 0x0102, 3, 1000, &owner());

        assert_eq!(ix.data, vec![8, 0x02, 0x01, 3, 0xE8, 0x03]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(root(), false),
                AccountMeta::new_readonly(owner(), true),
            ]
        );
    }
}
