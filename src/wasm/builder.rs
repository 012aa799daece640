//! WASM binding for instruction building.
//!
//! Every method returns `{ programId, keys, data }`, ready to be passed to
//! `new TransactionInstruction(...)` and signed by the caller's wallet.
//!
//! Numeric arguments are taken as JS numbers (`f64`) and the bid as a decimal
//! string, then narrowed here. Declaring them as `u8`/`u16`/`u64` would let
//! the JS glue wrap out-of-range values before they reach Rust.

use crate::error::SfsError;
use crate::instruction::SfsInstruction;
use crate::intent::{self, PlayerIntent};
use crate::layout::{decimal_to_u64, number_to_u16, number_to_u8};
use crate::pubkey::{Pubkey, PubkeyExt};
use crate::wasm::try_into_js_value::TryIntoJsValue;
use solana_sdk::instruction::Instruction;
use wasm_bindgen::prelude::*;

/// Namespace for fantasy sports instruction building.
#[wasm_bindgen]
pub struct InstructionNamespace;

#[wasm_bindgen]
impl InstructionNamespace {
    /// Construct an InitializeRoot instruction.
    ///
    /// @param program_id - Fantasy sports program (base58)
    /// @param root - Root account (base58)
    /// @param oracle_authority - Oracle authority (base58)
    /// @param current_week - Current week of the season (0-255)
    #[wasm_bindgen(js_name = createInitializeRootInstruction)]
    pub fn create_initialize_root_instruction(
        program_id: &str,
        root: &str,
        oracle_authority: &str,
        current_week: f64,
    ) -> Result<JsValue, JsValue> {
        to_js(initialize_root(program_id, root, oracle_authority, current_week)?)
    }

    /// Construct an AddPlayers instruction.
    ///
    /// @param players - Array of `{ externalId, position }`
    #[wasm_bindgen(js_name = createAddPlayersInstruction)]
    pub fn create_add_players_instruction(
        program_id: &str,
        root: &str,
        players: JsValue,
    ) -> Result<JsValue, JsValue> {
        let players: Vec<PlayerIntent> = serde_wasm_bindgen::from_value(players)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse players: {}", e)))?;

        to_js(add_players(program_id, root, &players)?)
    }

    /// Construct a SeedDraftSelection instruction.
    ///
    /// @param pick_order - User indices in draft order (each 0-255)
    #[wasm_bindgen(js_name = createSeedDraftSelectionInstruction)]
    pub fn create_seed_draft_selection_instruction(
        program_id: &str,
        root: &str,
        pick_order: Vec<f64>,
    ) -> Result<JsValue, JsValue> {
        to_js(seed_draft_selection(program_id, root, &pick_order)?)
    }

    /// Construct a CreateLeague instruction.
    ///
    /// @param bid - Entry bid in lamports, as a decimal string (`bid.toString()` for a BigInt)
    /// @param users_limit - Maximum number of users (0-255)
    #[wasm_bindgen(js_name = createCreateLeagueInstruction)]
    pub fn create_create_league_instruction(
        program_id: &str,
        root: &str,
        bank: &str,
        name: &str,
        bid: &str,
        users_limit: f64,
        owner: &str,
    ) -> Result<JsValue, JsValue> {
        to_js(create_league(
            program_id,
            root,
            bank,
            name,
            bid,
            users_limit,
            owner,
        )?)
    }

    /// Construct a JoinLeague instruction.
    ///
    /// @param league_id - League index (0-65535)
    #[wasm_bindgen(js_name = createJoinLeagueInstruction)]
    pub fn create_join_league_instruction(
        program_id: &str,
        root: &str,
        bank: &str,
        league_id: f64,
        owner: &str,
    ) -> Result<JsValue, JsValue> {
        to_js(join_league(program_id, root, bank, league_id, owner)?)
    }

    /// Construct a PickPlayer instruction.
    #[wasm_bindgen(js_name = createPickPlayerInstruction)]
    pub fn create_pick_player_instruction(
        program_id: &str,
        root: &str,
        league_id: f64,
        user_id: f64,
        player_id: f64,
        owner: &str,
    ) -> Result<JsValue, JsValue> {
        to_js(pick_player(
            program_id, root, league_id, user_id, player_id, owner,
        )?)
    }

    /// Construct an UpdatePlayerScore instruction.
    ///
    /// @param owner - Oracle authority (signer)
    #[wasm_bindgen(js_name = createUpdatePlayerScoreInstruction)]
    pub fn create_update_player_score_instruction(
        program_id: &str,
        root: &str,
        bank: &str,
        player_id: f64,
        player_score: f64,
        owner: &str,
    ) -> Result<JsValue, JsValue> {
        to_js(update_player_score(
            program_id,
            root,
            bank,
            player_id,
            player_score,
            owner,
        )?)
    }

    /// Build any supported instruction from an intent object.
    ///
    /// # Intent Structure
    ///
    /// ```json
    /// {
    ///   "command": "createLeague",
    ///   "root": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
    ///   "bank": "5ZWgXcyqrrNpQHCme5SdC5hCeYb2o3fEJhF7Gok3bTVN",
    ///   "name": "Sunday League",
    ///   "bid": "1000000000",
    ///   "usersLimit": 10,
    ///   "owner": "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB"
    /// }
    /// ```
    ///
    /// # Commands
    ///
    /// - `initializeRoot`: (root, oracleAuthority, currentWeek)
    /// - `addPlayers`: (root, players: [{ externalId, position }])
    /// - `seedDraftSelection`: (root, pickOrder)
    /// - `createLeague`: (root, bank, name, bid, usersLimit, owner)
    /// - `joinLeague`: (root, bank, leagueId, owner)
    /// - `pickPlayer`: (root, leagueId, userId, playerId, owner)
    /// - `updatePlayerScore`: (root, bank, playerId, playerScore, owner)
    ///
    /// @param program_id - Fantasy sports program (base58)
    /// @param intent - The intent as a JSON object
    #[wasm_bindgen(js_name = buildFromIntent)]
    pub fn build_from_intent(program_id: &str, intent: JsValue) -> Result<JsValue, JsValue> {
        let intent_json: serde_json::Value = serde_wasm_bindgen::from_value(intent)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse intent: {}", e)))?;

        to_js(intent::build_from_intent(program_id, &intent_json)?)
    }
}

fn to_js(instruction: Instruction) -> Result<JsValue, JsValue> {
    instruction.try_to_js_value().map_err(JsValue::from)
}

fn initialize_root(
    program_id: &str,
    root: &str,
    oracle_authority: &str,
    current_week: f64,
) -> Result<Instruction, SfsError> {
    SfsInstruction::InitializeRoot {
        root: Pubkey::from_base58("root", root)?,
        oracle_authority: Pubkey::from_base58("oracleAuthority", oracle_authority)?,
        current_week: number_to_u8("currentWeek", current_week)?,
    }
    .build(&Pubkey::from_base58("programId", program_id)?)
}

fn add_players(
    program_id: &str,
    root: &str,
    players: &[PlayerIntent],
) -> Result<Instruction, SfsError> {
    SfsInstruction::AddPlayers {
        root: Pubkey::from_base58("root", root)?,
        players: intent::parse_players(players)?,
    }
    .build(&Pubkey::from_base58("programId", program_id)?)
}

fn seed_draft_selection(
    program_id: &str,
    root: &str,
    pick_order: &[f64],
) -> Result<Instruction, SfsError> {
    let pick_order = pick_order
        .iter()
        .map(|index| number_to_u8("pickOrder", *index))
        .collect::<Result<Vec<_>, SfsError>>()?;

    SfsInstruction::SeedDraftSelection {
        root: Pubkey::from_base58("root", root)?,
        pick_order,
    }
    .build(&Pubkey::from_base58("programId", program_id)?)
}

fn create_league(
    program_id: &str,
    root: &str,
    bank: &str,
    name: &str,
    bid: &str,
    users_limit: f64,
    owner: &str,
) -> Result<Instruction, SfsError> {
    SfsInstruction::CreateLeague {
        root: Pubkey::from_base58("root", root)?,
        bank: Pubkey::from_base58("bank", bank)?,
        name: name.to_string(),
        bid: decimal_to_u64("bid", bid)?,
        users_limit: number_to_u8("usersLimit", users_limit)?,
        owner: Pubkey::from_base58("owner", owner)?,
    }
    .build(&Pubkey::from_base58("programId", program_id)?)
}

fn join_league(
    program_id: &str,
    root: &str,
    bank: &str,
    league_id: f64,
    owner: &str,
) -> Result<Instruction, SfsError> {
    SfsInstruction::JoinLeague {
        root: Pubkey::from_base58("root", root)?,
        bank: Pubkey::from_base58("bank", bank)?,
        league_id: number_to_u16("leagueId", league_id)?,
        owner: Pubkey::from_base58("owner", owner)?,
    }
    .build(&Pubkey::from_base58("programId", program_id)?)
}

fn pick_player(
    program_id: &str,
    root: &str,
    league_id: f64,
    user_id: f64,
    player_id: f64,
    owner: &str,
) -> Result<Instruction, SfsError> {
    SfsInstruction::PickPlayer {
        root: Pubkey::from_base58("root", root)?,
        league_id: number_to_u16("leagueId", league_id)?,
        user_id: number_to_u8("userId", user_id)?,
        player_id: number_to_u16("playerId", player_id)?,
        owner: Pubkey::from_base58("owner", owner)?,
    }
    .build(&Pubkey::from_base58("programId", program_id)?)
}

fn update_player_score(
    program_id: &str,
    root: &str,
    bank: &str,
    player_id: f64,
    player_score: f64,
    owner: &str,
) -> Result<Instruction, SfsError> {
    SfsInstruction::UpdatePlayerScore {
        root: Pubkey::from_base58("root", root)?,
        bank: Pubkey::from_base58("bank", bank)?,
        player_id: number_to_u16("playerId", player_id)?,
        player_score: number_to_u16("playerScore", player_score)?,
        owner: Pubkey::from_base58("owner", owner)?,
    }
    .build(&Pubkey::from_base58("programId", program_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SYSTEM_PROGRAM;
    use crate::error::ShapeViolation;
    use solana_sdk::instruction::AccountMeta;

    const PROGRAM_ID: &str = "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB";
    const ROOT: &str = "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH";
    const BANK: &str = "5ZWgXcyqrrNpQHCme5SdC5hCeYb2o3fEJhF7Gok3bTVN";
    const OWNER: &str = "GWaQEymC3Z9SHM2gkh8u12xL1zJPMHPCSVR3pSDpEXE4";

    fn key(address: &str) -> Pubkey {
        Pubkey::from_base58("key", address).unwrap()
    }

    #[test]
    fn test_join_league() {
        let ix = join_league(PROGRAM_ID, ROOT, BANK, 7.0, OWNER).unwrap();
        assert_eq!(ix.data, vec![6, 7, 0]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(key(ROOT), false),
                AccountMeta::new_readonly(key(OWNER), true),
                AccountMeta::new(key(BANK), false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM, false),
            ]
        );
    }

    #[test]
    fn test_league_id_is_not_wrapped() {
        assert_eq!(
            join_league(PROGRAM_ID, ROOT, BANK, 70000.0, OWNER).unwrap_err(),
            SfsError::shape(
                "leagueId",
                ShapeViolation::OutOfRange { value: 70000, max: 65535 }
            )
        );
        assert_eq!(
            join_league(PROGRAM_ID, ROOT, BANK, -1.0, OWNER).unwrap_err(),
            SfsError::shape("leagueId", ShapeViolation::NotAnInteger)
        );
    }

    #[test]
    fn test_small_fields_are_range_checked() {
        assert!(initialize_root(PROGRAM_ID, ROOT, OWNER, 256.0).is_err());
        assert!(pick_player(PROGRAM_ID, ROOT, 1.0, 300.0, 2.0, OWNER).is_err());
        assert!(update_player_score(PROGRAM_ID, ROOT, BANK, 1.0, 65536.0, OWNER).is_err());
        assert!(create_league(PROGRAM_ID, ROOT, BANK, "x", "1", 256.0, OWNER).is_err());
    }

    #[test]
    fn test_pick_order_is_not_wrapped() {
        assert_eq!(
            seed_draft_selection(PROGRAM_ID, ROOT, &[0.0, 300.0]).unwrap_err(),
            SfsError::shape("pickOrder", ShapeViolation::OutOfRange { value: 300, max: 255 })
        );
        let ix = seed_draft_selection(PROGRAM_ID, ROOT, &[2.0, 0.0, 1.0]).unwrap();
        assert_eq!(&ix.data[..4], &[3, 2, 0, 1]);
    }

    #[test]
    fn test_bid_is_checked_decimal() {
        let ix = create_league(
            PROGRAM_ID,
            ROOT,
            BANK,
            "League",
            "18446744073709551615",
            4.0,
            OWNER,
        )
        .unwrap();
        assert_eq!(&ix.data[65..73], &[0xFF; 8]);

        for bid in ["18446744073709551616", "-1"] {
            assert!(matches!(
                create_league(PROGRAM_ID, ROOT, BANK, "League", bid, 4.0, OWNER),
                Err(SfsError::ShapeViolation { field: "bid", .. })
            ));
        }
    }
}
